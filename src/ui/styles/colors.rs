//! Color palette for the paint panel
//!
//! Neutral dark panel over the light viewport background. Colors are
//! `egui::Color32` for direct use in UI code.

use bevy_egui::egui;

use crate::painting::PartColor;

/// Panel color palette
pub struct UiColors;

impl UiColors {
    // === Background Colors ===

    /// Panel background
    pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(20, 20, 25);

    /// Nested cards (part list)
    pub const BG_MID: egui::Color32 = egui::Color32::from_rgb(30, 30, 35);

    // === Status Colors ===

    /// Model loaded
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(40, 180, 40);

    /// Still loading
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 150, 0);

    /// Rejected action or load failure
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

    // === Text Colors ===

    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(200, 200, 205);
    pub const TEXT_TERTIARY: egui::Color32 = egui::Color32::from_rgb(150, 150, 155);

    /// Border around panels and swatches
    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(60, 60, 65);
}

/// Swatch color for a part
pub fn swatch_color(color: PartColor) -> egui::Color32 {
    let [r, g, b] = color.channels();
    egui::Color32::from_rgb(r, g, b)
}
