// src/config/state.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::view::ViewState;
use super::consts::{APP_DIR, STATE_FILE};
use super::options::{AppOptions, ExportFormat, ExportType};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Per-page filter/sort state; starts fresh each launch
    pub industries: ViewState,
    pub recommendations: ViewState,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
            industries: ViewState::default(),
            recommendations: ViewState::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

fn state_path() -> PathBuf {
    Path::new(APP_DIR).join(STATE_FILE)
}

fn truthy(v: &str) -> bool {
    v == "1" || v.eq_ignore_ascii_case("true")
}

impl AppState {
    /// Load saved window/export settings; defaults when absent or malformed.
    pub fn load() -> Self {
        let mut state = AppState::default();
        let text = match fs::read_to_string(state_path()) {
            Ok(t) => t,
            Err(_) => return state,
        };
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }
            let Some(eq) = line.find('=') else { continue };
            let key = line[..eq].trim();
            let val = line[eq + 1..].trim();
            match key {
                "window_w" => if let Ok(v) = val.parse() { state.gui.window_w = v; },
                "window_h" => if let Ok(v) = val.parse() { state.gui.window_h = v; },
                "page" => if let Ok(v) = val.parse() { state.gui.current_page_index = v; },
                "format" => {
                    state.options.export.format = if val.eq_ignore_ascii_case("tsv") {
                        ExportFormat::Tsv
                    } else {
                        ExportFormat::Csv
                    };
                }
                "export_type" => {
                    state.options.export.export_type = if val == "per_group" {
                        ExportType::PerGroup
                    } else {
                        ExportType::SingleFile
                    };
                }
                "include_headers" => state.options.export.include_headers = truthy(val),
                "include_links" => state.options.export.include_links = truthy(val),
                "out_path" => state.options.export.set_path(val),
                _ => {}
            }
        }
        state
    }

    /// Write the stable subset back out. Filters and sort are deliberately
    /// not persisted; each launch starts from the full view.
    pub fn save(&self) {
        let e = &self.options.export;
        let mut s = s!();
        s.push_str(&format!("window_w={}\n", self.gui.window_w));
        s.push_str(&format!("window_h={}\n", self.gui.window_h));
        s.push_str(&format!("page={}\n", self.gui.current_page_index));
        s.push_str(&format!("format={}\n", e.format.ext()));
        s.push_str(&format!("export_type={}\n", match e.export_type {
            ExportType::SingleFile => "single",
            ExportType::PerGroup => "per_group",
        }));
        s.push_str(&format!("include_headers={}\n", e.include_headers as u8));
        s.push_str(&format!("include_links={}\n", e.include_links as u8));
        s.push_str(&format!("out_path={}\n", e.out_path().to_string_lossy()));

        if let Err(err) = fs::create_dir_all(APP_DIR)
            .and_then(|_| fs::write(state_path(), s))
        {
            loge!("Failed to save state: {err}");
        }
    }
}
