//! UI module - egui paint panel
//!
//! - `paint_panel` - part list, color picker and text entry
//! - `styles` - palette, text presets and layout helpers
//!
//! Runs in bevy_egui's `EguiPrimaryContextPass`. The panel never mutates the
//! painting resources; it writes messages and reports whether the pointer is
//! over it through [`PointerOverUi`](crate::input::PointerOverUi).

pub mod paint_panel;
pub mod styles;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use paint_panel::{draw_paint_panel, paint_panel_system, LoadStatus, PanelActions};

/// Plugin adding the paint panel
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, paint_panel_system);
    }
}
