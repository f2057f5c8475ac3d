// src/gui/components/export_bar.rs

use eframe::egui::{self, Checkbox};

use crate::{
    config::options::{
        ExportFormat,
        ExportType::{PerGroup, SingleFile},
        PageKind,
    },
    gui::{actions, app::App},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cur_kind = app.current_page_kind();
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers/links ---
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }

            let before_links = export.include_links;
            ui.checkbox(&mut export.include_links, "Include links");
            if export.include_links != before_links {
                logf!("UI: Include_links → {}", export.include_links);
            }
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            logf!("UI: Export format → {:?}", export.format);

            // Keep the shown extension in step unless the user typed a path.
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
                logd!("UI: out_path_text refreshed to match format");
            }
        }
    }

    let export = &mut app.state.options.export;

    // --- Per-group toggle + Output field ---
    // Splitting by group only makes sense for the industry table.
    let per_group_applicable = matches!(cur_kind, PageKind::Industries);

    let mut open_folder_clicked = false;
    ui.horizontal(|ui| {
        // Keep layout stable: always show the checkbox, gray it out if not applicable.
        let mut single = matches!(export.export_type, SingleFile);
        let changed = ui
            .add_enabled(
                per_group_applicable,
                Checkbox::new(&mut single, "All groups in one file"),
            )
            .changed();

        if per_group_applicable && changed {
            export.export_type = if single { SingleFile } else { PerGroup };
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
            logf!("UI: export_type → {:?}", export.export_type);
        }

        // If not applicable, force SingleFile silently (no layout shift).
        if !per_group_applicable && !matches!(export.export_type, SingleFile) {
            export.export_type = SingleFile;
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_folder_clicked = true;
        }
    });

    // Handle open folder after the borrow ends
    if open_folder_clicked {
        open_output_folder(app);
    }

    // --- Actions: Copy / Export + status ---
    ui.horizontal(|ui| {
        let button_copy = ui.button("Copy");
        if button_copy.clicked() {
            actions::copy(app, ui.ctx());
        }

        let button_export = ui.button("Export");
        if button_export.clicked() {
            actions::export(app);
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(status);
    });
}

/// Open the output folder in the system file explorer.
fn open_output_folder(app: &App) {
    use crate::config::options::ExportType;
    use std::path::Path;

    let export = &app.state.options.export;
    let path = export.out_path();

    let folder = match export.export_type {
        ExportType::SingleFile => path.parent().unwrap_or(Path::new(".")),
        ExportType::PerGroup => path.as_path(),
    };

    let folder_to_open = find_nearest_existing_parent(folder);

    // Canonicalize so the explorer gets an unambiguous target.
    let absolute_folder = match std::fs::canonicalize(&folder_to_open) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            loge!("{}", msg);
            app.status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        loge!("Failed to open folder: {}", e);
        app.status(format!("Failed to open folder: {}", e));
    } else {
        logf!("Opened folder: {}", absolute_folder.display());
    }
}

/// Walk up the directory tree to the nearest folder that exists.
fn find_nearest_existing_parent(path: &std::path::Path) -> std::path::PathBuf {
    let mut current = path.to_path_buf();

    loop {
        if current.exists() && current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return std::path::PathBuf::from("."),
        }
    }
}

/// Cross-platform folder open via the system default file manager.
fn open_folder_in_explorer(path: &std::path::Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("explorer")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn explorer: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn open: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn xdg-open: {}", e))?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        Err("Opening folders not supported on this platform".to_string())
    }
}
