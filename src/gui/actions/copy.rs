// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let page = app.current_page();
    let (headers, rows) = page.export_table(app);

    if rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let txt = csv::to_export_string(&headers, &rows, export.include_headers, export.delim());

    logf!("Copy: page={:?}, rows={}", page.kind(), rows.len());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
