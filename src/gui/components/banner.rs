// src/gui/components/banner.rs
//
// Dismissible notice strip above the filter row. Fetch failures show in
// the error tone, the no-rows case in the warning tone. Stays up until
// the ✕ or the next refresh clears it.

use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Warning,
}

#[derive(Clone, Debug)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: BannerKind::Error, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { kind: BannerKind::Warning, text: text.into() }
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(banner) = app.banner.clone() else { return };

    let (fill, tint) = match banner.kind {
        BannerKind::Error => (Color32::from_rgb(60, 20, 20), Color32::from_rgb(255, 120, 120)),
        BannerKind::Warning => (Color32::from_rgb(60, 50, 15), Color32::from_rgb(240, 210, 60)),
    };

    egui::Frame::default()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(8, 6))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&banner.text).color(tint));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        logd!("UI: Banner dismissed");
                        app.banner = None;
                    }
                });
            });
        });
    ui.add_space(4.0);
}
