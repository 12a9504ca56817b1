//! Text presets for the paint panel

use super::colors::UiColors;
use bevy_egui::egui;

/// Text size presets
pub struct TextSize;

impl TextSize {
    /// Panel title
    pub const LG: f32 = 22.0;

    /// Section titles
    pub const SM: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Hints and captions
    pub const CAPTION: f32 = 12.0;
}

/// Helper functions for creating styled text
pub struct TextStyle;

impl TextStyle {
    pub fn heading(text: impl Into<String>, size: f32) -> egui::RichText {
        egui::RichText::new(text)
            .size(size)
            .color(UiColors::TEXT_PRIMARY)
            .strong()
    }

    pub fn body(text: impl Into<String>) -> egui::RichText {
        egui::RichText::new(text)
            .size(TextSize::BODY)
            .color(UiColors::TEXT_SECONDARY)
    }

    /// Small, less prominent text
    pub fn caption(text: impl Into<String>) -> egui::RichText {
        egui::RichText::new(text)
            .size(TextSize::CAPTION)
            .color(UiColors::TEXT_TERTIARY)
    }

    /// Body text in an arbitrary status color
    pub fn status(text: impl Into<String>, color: egui::Color32) -> egui::RichText {
        egui::RichText::new(text).size(TextSize::BODY).color(color)
    }

    pub fn error(text: impl Into<String>) -> egui::RichText {
        Self::status(text, UiColors::DANGER)
    }
}
