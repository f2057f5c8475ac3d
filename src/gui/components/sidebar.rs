// src/gui/components/sidebar.rs
//
// Renders the left group list and applies the pick directly to `app`.
// Groups keep their sectioned order with dividers between sections; the
// active entry carries a live row count. Refresh sits at the bottom and
// is disabled while a fetch runs.

use eframe::egui;

use crate::gui::{actions, app::App};
use crate::taxonomy::{Resolver, SIDEBAR_SECTIONS};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Industry Groups");
    ui.separator();

    let names: Vec<String> = app.market.rows().iter().map(|r| r.name.clone()).collect();
    let current = app.state.gui.industries.group.clone();
    let resolver = Resolver::shared();

    // Outer None = no click this frame; inner None = "All Industries".
    let mut picked: Option<Option<&'static str>> = None;

    let all_selected = current.is_none();
    let all_label = if all_selected {
        format!("All Industries ({})", names.len())
    } else {
        s!("All Industries")
    };
    if ui.selectable_label(all_selected, all_label).clicked() {
        picked = Some(None);
    }

    ui.separator();

    // Match the scroll bar aesthetics used in the main table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 0.0;
        s.bar_outer_margin = -6.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let bottom = 36.0; // room for the refresh row below the list
    egui::ScrollArea::vertical()
        .id_salt("group_sidebar_scroll")
        .max_height(ui.available_height() - bottom)
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            ui.set_width(w);

            for (si, section) in SIDEBAR_SECTIONS.iter().enumerate() {
                for &group in *section {
                    let selected = current.as_deref() == Some(group);
                    let label = if selected {
                        let n = resolver.count_matching(
                            names.iter().map(String::as_str),
                            group,
                            None,
                        );
                        format!("{group} ({n})")
                    } else {
                        s!(group)
                    };
                    // No !selected guard: re-picking a group resets its
                    // sub-group selection.
                    if ui.selectable_label(selected, label).clicked() {
                        picked = Some(Some(group));
                    }
                }
                if si + 1 < SIDEBAR_SECTIONS.len() {
                    ui.separator();
                }
            }
        });

    if let Some(group) = picked {
        logf!("UI: Group filter → {:?}", group);
        app.state.gui.industries.select_group(group);
        app.rebuild_view();
    }

    ui.separator();
    ui.horizontal(|ui| {
        let refresh = ui.add_enabled(!app.running, egui::Button::new("⟳ Refresh"));
        if refresh.clicked() {
            actions::refresh(app, ui.ctx());
        }
        if app.running {
            ui.add(egui::Spinner::new().size(14.0));
        }
    });
}
