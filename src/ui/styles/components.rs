//! Frames, swatches and spacing for the paint panel

use super::colors::UiColors;
use bevy_egui::egui;

/// Edge length of a part swatch
pub const SWATCH_SIZE: f32 = 14.0;

/// Helper functions for creating styled panels
pub struct StyledPanel;

impl StyledPanel {
    /// Side panel frame
    pub fn side() -> egui::Frame {
        egui::Frame {
            fill: UiColors::BG_DARK,
            stroke: egui::Stroke::new(1.0, UiColors::BORDER),
            inner_margin: egui::Margin::same(15),
            ..Default::default()
        }
    }

    /// Card frame for nested content
    pub fn card() -> egui::Frame {
        egui::Frame {
            fill: UiColors::BG_MID,
            stroke: egui::Stroke::new(1.0, UiColors::BORDER),
            inner_margin: egui::Margin::same(8),
            ..Default::default()
        }
    }
}

/// Paint a filled square swatch inline
pub fn swatch(ui: &mut egui::Ui, color: egui::Color32) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.painter().rect_stroke(
        rect,
        2.0,
        egui::Stroke::new(1.0, UiColors::BORDER),
        egui::StrokeKind::Inside,
    );
    response
}

/// Helper functions for spacing and layout
pub struct Layout;

impl Layout {
    pub const SECTION_SPACING: f32 = 18.0;
    pub const SMALL_SPACING: f32 = 6.0;

    pub fn section_space(ui: &mut egui::Ui) {
        ui.add_space(Self::SECTION_SPACING);
    }

    pub fn small_space(ui: &mut egui::Ui) {
        ui.add_space(Self::SMALL_SPACING);
    }
}
