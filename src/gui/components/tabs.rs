// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.
// On switch the export file stem follows the new page, but only while
// the user has not typed a custom path; a dirty field is never clobbered.

use eframe::egui;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                let prev = app.current_page_kind();
                app.set_current_index(idx);
                let new_kind = page.kind();
                logf!("UI: Tab switch {:?} → {:?}", prev, new_kind);

                app.rebuild_view();

                if !app.out_path_dirty {
                    let export = &mut app.state.options.export;
                    export.set_default_stem(new_kind);
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
            }
        }
    });
}
