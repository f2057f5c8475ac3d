// src/gui/components/data_table.rs
//
// Draws the industry table. Purely a view over app.market + app.row_ix;
// header clicks feed the sort cycle, nothing else mutates state here.

use eframe::egui::{self, Align, CursorIcon, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::gui::app::App;
use crate::scrape::IndustryRow;
use crate::taxonomy::Resolver;
use crate::view::{Column, SortDirection};

// Colors matched to the site CSS: positive ≈ #52C41A, negative ≈ #FF4D4F
const POSITIVE: egui::Color32 = egui::Color32::from_rgb(0x52, 0xC4, 0x1A);
const NEGATIVE: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x4D, 0x4F);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let resolver = Resolver::shared();
    let sort = app.state.gui.industries.sort;

    // Ensure scroll bars allocate space (not floating over content), and tune size
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

    // Set inside the header closure, applied after the table releases
    // its borrows.
    let mut sort_clicked: Option<Column> = None;

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("industries_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt("industries_table")
                .column(TableColumn::exact(44.0)); // S.No, render-only

            for col in Column::DISPLAY {
                let c = match col {
                    Column::Name => TableColumn::initial(230.0).at_least(160.0),
                    Column::Category => TableColumn::initial(110.0).at_least(80.0),
                    _ => TableColumn::initial(92.0).at_least(60.0),
                };
                table = table.column(c.resizable(true).clip(true));
            }

            table
                .header(24.0, |mut header| {
                    header.col(|ui| {
                        ui.centered_and_justified(|ui| {
                            ui.label(RichText::new("S.No").strong());
                        });
                    });
                    for col in Column::DISPLAY {
                        header.col(|ui| {
                            ui.scope(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);

                                let caption = match sort {
                                    Some(s) if s.column == col => match s.direction {
                                        SortDirection::Ascending => format!("{} ▲", col.label()),
                                        SortDirection::Descending => format!("{} ▼", col.label()),
                                    },
                                    _ => s!(col.label()),
                                };
                                let label = egui::Label::new(RichText::new(caption).strong())
                                    .selectable(false)
                                    .sense(Sense::click());

                                let resp = if numeric(col) {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                        ui.add(label)
                                    })
                                    .inner
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        ui.add(label)
                                    })
                                    .inner
                                };

                                if resp.on_hover_cursor(CursorIcon::PointingHand).clicked() {
                                    sort_clicked = Some(col);
                                }
                            });
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.row_ix.len(), |mut row| {
                        let row_idx = row.index();
                        let Some(&src_ix) = app.row_ix.get(row_idx) else { return };
                        let Some(data) = app.market.rows().get(src_ix) else { return };

                        row.col(|ui| {
                            ui.centered_and_justified(|ui| {
                                ui.label((row_idx + 1).to_string());
                            });
                        });
                        for col in Column::DISPLAY {
                            row.col(|ui| {
                                ui.scope(|ui| {
                                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                    draw_cell(ui, col, data, resolver);
                                });
                            });
                        }
                    });
                });
        });

    if let Some(col) = sort_clicked {
        logd!("UI: Sort toggle on {:?}", col);
        app.state.gui.industries.toggle_sort(col);
        app.rebuild_view();
    }
}

fn numeric(col: Column) -> bool {
    !matches!(col, Column::Category | Column::Name)
}

fn draw_cell(ui: &mut egui::Ui, col: Column, row: &IndustryRow, resolver: &Resolver) {
    match col {
        Column::Name => match &row.url {
            Some(url) => {
                ui.hyperlink_to(&row.name, url);
            }
            None => {
                ui.label(&row.name);
            }
        },
        Column::Category => match resolver.resolve(&row.name) {
            Some((group, _)) => {
                ui.label(group);
            }
            None => {
                ui.weak("-");
            }
        },
        _ => {
            let text = col.cell(row, resolver);
            let rt = if text == "-" || text == "%" || text.is_empty() {
                RichText::new("-").weak()
            } else if col.signed() {
                // Sign decides the tint, same as the site's value cells.
                let tint = if text.contains('-') { NEGATIVE } else { POSITIVE };
                RichText::new(text).color(tint)
            } else {
                RichText::new(text)
            };
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(rt);
            });
        }
    }
}
