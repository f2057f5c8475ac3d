// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::app::App;

pub mod industries;
pub mod recommendations;

/// One tab of the dashboard. Pages draw their own filter row and table;
/// the shared chrome (tabs, export bar, status) lives in components/.
pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;
    fn title(&self) -> &'static str;

    /// Filter controls between the tab strip and the export bar.
    fn draw_filters(&self, _ui: &mut egui::Ui, _app: &mut App) {}

    /// The page's table.
    fn draw_table(&self, ui: &mut egui::Ui, app: &mut App);

    /// Headers and rows for Copy/Export, per current filters and options.
    fn export_table(&self, app: &App) -> (Vec<String>, Vec<Vec<String>>);
}
