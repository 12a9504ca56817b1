//! Window configuration resource
//!
//! Centralizes window settings for the application. On the web build the
//! window renders into the canvas matched by `canvas` and follows the size of
//! its parent element.

use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};
use serde::{Deserialize, Serialize};

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// CSS selector of the target canvas (web only)
    pub canvas: Option<String>,
    /// Track the canvas parent's size instead of `width`/`height` (web only)
    pub fit_canvas_to_parent: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Mesh Painter".to_string(),
            width: 1366,
            height: 768,
            resizable: true,
            canvas: Some("#content".to_string()),
            fit_canvas_to_parent: true,
        }
    }
}

impl WindowConfig {
    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            canvas: self.canvas.clone(),
            fit_canvas_to_parent: self.fit_canvas_to_parent,
            prevent_default_event_handling: true,
            ..default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_window_copies_fields() {
        let config = WindowConfig {
            title: "Test".to_string(),
            width: 640,
            height: 480,
            resizable: false,
            canvas: None,
            fit_canvas_to_parent: false,
        };
        let window = config.to_window();

        assert_eq!(window.title, "Test");
        assert_eq!(window.resolution.width(), 640.0);
        assert_eq!(window.resolution.height(), 480.0);
        assert!(!window.resizable);
        assert_eq!(window.canvas, None);
    }
}
