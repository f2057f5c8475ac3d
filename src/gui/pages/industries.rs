// src/gui/pages/industries.rs
//
// The live market table: group filtering happens in the sidebar, this
// page adds the sub-group tab row and the sortable table.

use eframe::egui;

use super::Page;
use crate::config::options::PageKind;
use crate::data::{industry_cells, industry_headers};
use crate::gui::{app::App, components};
use crate::taxonomy::Resolver;

pub struct IndustriesPage;

pub static PAGE: IndustriesPage = IndustriesPage;

impl Page for IndustriesPage {
    fn kind(&self) -> PageKind {
        PageKind::Industries
    }

    fn title(&self) -> &'static str {
        "Industries"
    }

    /// Sub-group tab row; only drawn while a group filter is active.
    fn draw_filters(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(group) = app.state.gui.industries.group.clone() else {
            return;
        };
        let resolver = Resolver::shared();
        let subs = resolver.subs_of(&group);
        if subs.is_empty() {
            return;
        }

        // Counts first, so the click handler below can mutate app freely.
        let names: Vec<String> = app.market.rows().iter().map(|r| r.name.clone()).collect();
        let count_of = |sub: Option<&str>| {
            resolver.count_matching(names.iter().map(String::as_str), &group, sub)
        };

        let current = app.state.gui.industries.sub_group.clone();
        let mut picked: Option<Option<&'static str>> = None;

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 6.0;

            let all_selected = current.is_none();
            let all_label = if all_selected {
                format!("All {} ({})", group, count_of(None))
            } else {
                format!("All {group}")
            };
            if ui.selectable_label(all_selected, all_label).clicked() {
                picked = Some(None);
            }

            for sub in subs {
                let selected = current.as_deref() == Some(sub);
                let label = if selected {
                    format!("{} ({})", sub, count_of(Some(sub)))
                } else {
                    s!(sub)
                };
                if ui.selectable_label(selected, label).clicked() {
                    picked = Some(Some(sub));
                }
            }
        });

        if let Some(sub) = picked {
            logd!("UI: Sub-group filter → {:?}", sub);
            app.state.gui.industries.select_sub_group(sub);
            app.rebuild_view();
        }
    }

    fn draw_table(&self, ui: &mut egui::Ui, app: &mut App) {
        components::data_table::draw(ui, app);
    }

    fn export_table(&self, app: &App) -> (Vec<String>, Vec<Vec<String>>) {
        let include_links = app.state.options.export.include_links;
        let resolver = Resolver::shared();

        let headers = industry_headers(include_links);
        let rows = app
            .row_ix
            .iter()
            .filter_map(|&ix| app.market.rows().get(ix))
            .map(|row| industry_cells(row, resolver, include_links))
            .collect();
        (headers, rows)
    }
}
