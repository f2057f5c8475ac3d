// src/gui/pages/recommendations.rs
//
// The bundled analyst picks: group filter buttons with stock-count
// badges, a contributor filter, and the aggregated table with stock
// rows nested under their industry.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column as TableColumn, TableBuilder};

use super::Page;
use crate::config::options::PageKind;
use crate::data::{NESTED_MARKER, recs_headers, recs_rows};
use crate::gui::app::App;
use crate::recs::{self, AggregatedRow};
use crate::taxonomy::GROUP_ORDER;

pub struct RecommendationsPage;

pub static PAGE: RecommendationsPage = RecommendationsPage;

impl Page for RecommendationsPage {
    fn kind(&self) -> PageKind {
        PageKind::Recommendations
    }

    fn title(&self) -> &'static str {
        "Recommendations"
    }

    fn draw_filters(&self, ui: &mut egui::Ui, app: &mut App) {
        let counts = recs::group_counts(&app.recs);
        let total_stocks = recs::total_stocks(&app.recs);

        let state = &app.state.gui.recommendations;
        let current_group = state.group.clone();
        let current_contributor = state.contributor.clone();
        let has_filters = state.has_filters();

        let mut pick_group: Option<Option<&'static str>> = None;
        let mut pick_contributor: Option<Option<&'static str>> = None;
        let mut clear = false;

        // Group buttons carry the stock count; groups without any
        // recommendation stay visible but disabled.
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 6.0;

            let all_selected = current_group.is_none();
            if ui
                .selectable_label(all_selected, format!("All ({total_stocks})"))
                .clicked()
            {
                pick_group = Some(None);
            }

            for group in GROUP_ORDER {
                let (industries, stocks) = counts.get(group).copied().unwrap_or((0, 0));
                let selected = current_group.as_deref() == Some(group);
                let label = if stocks > 0 {
                    format!("{group} ({stocks})")
                } else {
                    s!(group)
                };
                let resp = ui.add_enabled(
                    industries > 0,
                    egui::SelectableLabel::new(selected, label),
                );
                if resp.clicked() {
                    pick_group = Some(Some(group));
                }
            }
        });

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 6.0;
            ui.label("Analyst:");

            if ui
                .selectable_label(current_contributor.is_none(), "All")
                .clicked()
            {
                pick_contributor = Some(None);
            }
            for who in recs::contributors(recs::RECOMMENDATIONS) {
                let selected = current_contributor.as_deref() == Some(who);
                if ui.selectable_label(selected, who).clicked() {
                    pick_contributor = Some(Some(who));
                }
            }

            if ui
                .add_enabled(has_filters, egui::Button::new("Clear filters"))
                .clicked()
            {
                clear = true;
            }
        });

        let state = &mut app.state.gui.recommendations;
        let mut changed = false;
        if let Some(group) = pick_group {
            logf!("UI: Rec group filter → {:?}", group);
            state.select_group(group);
            changed = true;
        }
        if let Some(who) = pick_contributor {
            logf!("UI: Rec contributor filter → {:?}", who);
            state.select_contributor(who);
            changed = true;
        }
        if clear {
            logd!("UI: Rec filters cleared");
            state.clear_filters();
            changed = true;
        }
        if changed {
            app.rebuild_view();
        }
    }

    fn draw_table(&self, ui: &mut egui::Ui, app: &mut App) {
        draw_table(ui, app);
    }

    fn export_table(&self, app: &App) -> (Vec<String>, Vec<Vec<String>>) {
        let include_links = app.state.options.export.include_links;
        (
            recs_headers(include_links),
            recs_rows(&app.recs, &app.rec_ix, include_links),
        )
    }
}

/* ---------- table ---------- */

/// One painted table line: an industry row or one of its stock picks.
/// Everything borrows from the static dataset, so no lifetime juggling.
struct Line {
    sno: Option<usize>,
    group: Option<&'static str>,
    sub_group: Option<&'static str>,
    name: &'static str,
    url: Option<&'static str>,
    nested: bool,
    analysts: String,
    /// (contributor, note) in first-seen order.
    notes: Vec<(&'static str, &'static str)>,
}

fn build_lines(rows: &[AggregatedRow], ix: &[usize]) -> Vec<Line> {
    let mut out = Vec::new();

    for (n, &i) in ix.iter().enumerate() {
        let Some(row) = rows.get(i) else { continue };

        out.push(Line {
            sno: Some(n + 1),
            group: row.group,
            sub_group: row.sub_group,
            name: row.target,
            url: None,
            nested: false,
            analysts: row.contributors.join(", "),
            notes: notes_of(&row.contributors, |c| row.note_of(c)),
        });

        for stock in &row.stocks {
            out.push(Line {
                sno: None,
                group: None,
                sub_group: None,
                name: stock.name,
                url: stock.screener_url,
                nested: true,
                analysts: stock.contributors.join(", "),
                notes: notes_of(&stock.contributors, |c| stock.note_of(c)),
            });
        }
    }

    out
}

fn notes_of(
    contributors: &[&'static str],
    note: impl Fn(&str) -> Option<&'static str>,
) -> Vec<(&'static str, &'static str)> {
    contributors
        .iter()
        .filter_map(|&c| note(c).map(|n| (c, n)))
        .collect()
}

fn line_height(line: &Line) -> f32 {
    // One text line per contributor note, at least one.
    6.0 + 18.0 * line.notes.len().max(1) as f32
}

fn draw_table(ui: &mut egui::Ui, app: &mut App) {
    let lines = build_lines(&app.recs, &app.rec_ix);

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("recs_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt("recs_table")
                .column(TableColumn::exact(44.0)) // S.No
                .column(TableColumn::initial(110.0).at_least(80.0).clip(true)) // Group
                .column(TableColumn::initial(100.0).at_least(70.0).clip(true)) // Sub-group
                .column(TableColumn::initial(230.0).at_least(170.0).clip(true)) // Industry
                .column(TableColumn::initial(110.0).at_least(80.0).clip(true)) // Analysts
                .column(TableColumn::remainder().at_least(260.0).clip(true)); // Thesis

            table
                .header(24.0, |mut header| {
                    for caption in ["S.No", "Group", "Sub-group", "Industry", "Analysts", "Thesis"] {
                        header.col(|ui| {
                            ui.scope(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.label(RichText::new(caption).strong());
                                });
                            });
                        });
                    }
                })
                .body(|body| {
                    let heights = lines.iter().map(line_height);
                    body.heterogeneous_rows(heights, |mut row| {
                        let Some(line) = lines.get(row.index()) else { return };
                        draw_line(&mut row, line);
                    });
                });
        });
}

fn draw_line(row: &mut egui_extras::TableRow<'_, '_>, line: &Line) {
    row.col(|ui| {
        if let Some(n) = line.sno {
            ui.centered_and_justified(|ui| {
                ui.label(n.to_string());
            });
        }
    });

    // Stock rows leave group and sub-group blank, same as the export.
    row.col(|ui| {
        if !line.nested {
            match line.group {
                Some(g) => {
                    ui.label(g);
                }
                None => {
                    ui.weak("-");
                }
            }
        }
    });
    row.col(|ui| {
        if !line.nested {
            match line.sub_group {
                Some(s) => {
                    ui.label(s);
                }
                None => {
                    ui.weak("-");
                }
            }
        }
    });

    row.col(|ui| {
        ui.horizontal(|ui| {
            if line.nested {
                ui.weak(NESTED_MARKER);
            }
            ui.label(RichText::new(line.name).strong());
            if let Some(url) = line.url {
                ui.hyperlink_to("↗", url);
            }
        });
    });

    row.col(|ui| {
        ui.label(&line.analysts);
    });

    row.col(|ui| {
        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 2.0;
            for (who, note) in &line.notes {
                ui.horizontal(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.weak(format!("{who}:"));
                    ui.label(*note).on_hover_text(*note);
                });
            }
        });
    });
}
