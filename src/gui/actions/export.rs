// src/gui/actions/export.rs
use crate::{config::options::ExportType, file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let page = app.current_page();
    let (headers, rows) = page.export_table(app);

    if rows.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let export = &app.state.options.export;
    logf!(
        "Export: Begin page={:?}, rows={}, type={:?}",
        page.kind(),
        rows.len(),
        export.export_type
    );

    let status_msg = match export.export_type {
        ExportType::SingleFile => match file::write_export_single(export, &headers, &rows) {
            Ok(path) => {
                logf!("Export: OK count=1 last={}", path.display());
                format!("Exported 1 file. Last: {}", path.display())
            }
            Err(e) => {
                loge!("Export: Error: {}", e);
                format!("Export error: {e}")
            }
        },

        // Both tables keep the group in the first column.
        ExportType::PerGroup => match file::write_export_per_group(export, &headers, &rows, 0) {
            Ok(paths) => match paths.last() {
                Some(last) => {
                    logf!("Export: OK count={} last={}", paths.len(), last.display());
                    format!("Exported {} file(s). Last: {}", paths.len(), last.display())
                }
                None => {
                    logd!("Export: PerGroup produced no files");
                    s!("Nothing to export")
                }
            },
            Err(e) => {
                loge!("Export: Error: {}", e);
                format!("Export error: {e}")
            }
        },
    };

    // mutate app only after the page borrow is gone
    app.status(status_msg);
}
