//! Viewer configuration resources
//!
//! Everything here is fixed once the app starts: window, background, lighting
//! rig, camera bounds and texture resolution. Values come from the settings
//! file when one is present, otherwise from the defaults below.

use std::f32::consts::{FRAC_PI_6, PI};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreResult};
use super::window_config::WindowConfig;
use crate::painting::encoder::DEFAULT_TEXTURE_SIZE;

/// Model loaded when neither settings nor CLI name one
pub const DEFAULT_MODEL_PATH: &str = "model/scene.gltf";

/// Startup configuration for the viewer
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct ViewerSettings {
    /// glTF file relative to the asset root
    pub model_path: String,

    /// Edge length of generated part textures
    pub texture_size: u32,

    /// Clear color as sRGB bytes
    pub background: [u8; 3],

    /// `EnvFilter` style log directive handed to Bevy's log plugin
    pub log_filter: String,

    pub window: WindowConfig,
    pub lighting: LightingSettings,
    pub camera: CameraSettings,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            texture_size: DEFAULT_TEXTURE_SIZE,
            background: [0xee, 0xee, 0xee],
            log_filter: "info,wgpu=error,naga=warn".to_string(),
            window: WindowConfig::default(),
            lighting: LightingSettings::default(),
            camera: CameraSettings::default(),
        }
    }
}

impl ViewerSettings {
    pub fn background_color(&self) -> Color {
        let [r, g, b] = self.background;
        Color::srgb_u8(r, g, b)
    }

    /// Reject values the camera rig or encoder cannot work with
    pub fn validate(&self) -> CoreResult<()> {
        let invalid = |message: &str| {
            Err(CoreError::InvalidSettings {
                message: message.to_string(),
            })
        };

        if self.model_path.trim().is_empty() {
            return invalid("model_path is empty");
        }
        if self.texture_size == 0 {
            return invalid("texture_size must be at least 1");
        }

        let camera = &self.camera;
        if !(0.0..=PI).contains(&camera.min_polar_angle)
            || !(0.0..=PI).contains(&camera.max_polar_angle)
            || camera.min_polar_angle > camera.max_polar_angle
        {
            return invalid("polar angle bounds must satisfy 0 <= min <= max <= PI");
        }
        if camera.min_distance <= 0.0 || camera.min_distance > camera.max_distance {
            return invalid("distance bounds must satisfy 0 < min <= max");
        }
        if camera.near <= 0.0 || camera.near >= camera.far {
            return invalid("clip planes must satisfy 0 < near < far");
        }
        Ok(())
    }
}

/// Fixed lighting rig: ambient + point + directional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct LightingSettings {
    pub ambient_color: [u8; 3],
    /// Ambient brightness in cd/m²
    pub ambient_brightness: f32,

    pub point_color: [u8; 3],
    /// Point light power in lumens
    pub point_intensity: f32,
    pub point_range: f32,
    pub point_position: [f32; 3],

    pub directional_color: [u8; 3],
    /// Directional illuminance in lux
    pub directional_illuminance: f32,
    /// Light travels from here towards the origin
    pub directional_position: [f32; 3],
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            ambient_color: [0xff, 0xff, 0xff],
            ambient_brightness: 900.0,
            point_color: [0xcc, 0xcc, 0xcc],
            point_intensity: 100_000.0,
            point_range: 100.0,
            point_position: [0.0, 0.0, 0.0],
            directional_color: [0xff, 0xff, 0xff],
            directional_illuminance: 5_000.0,
            directional_position: [0.0, 1.0, 0.0],
        }
    }
}

/// Perspective camera and orbit bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct CameraSettings {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Distance from the origin along +Z at startup
    pub start_distance: f32,
    /// Angle from +Y, radians
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians per pixel of mouse drag
    pub rotate_sensitivity: f32,
    /// World units per scroll line
    pub zoom_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 1.0,
            far: 1000.0,
            start_distance: 15.0,
            min_polar_angle: FRAC_PI_6,
            max_polar_angle: PI * 3.0 / 4.0,
            min_distance: 12.0,
            max_distance: 20.0,
            rotate_sensitivity: 0.005,
            zoom_sensitivity: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = ViewerSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.model_path, DEFAULT_MODEL_PATH);
        assert_eq!(settings.texture_size, 100);
    }

    #[test]
    fn test_inverted_distance_bounds_rejected() {
        let mut settings = ViewerSettings::default();
        settings.camera.min_distance = 30.0;
        assert!(matches!(
            settings.validate(),
            Err(CoreError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_polar_bounds_outside_sphere_rejected() {
        let mut settings = ViewerSettings::default();
        settings.camera.max_polar_angle = 4.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: ViewerSettings =
            serde_json::from_str(r#"{ "texture_size": 16, "camera": { "fov_degrees": 60.0 } }"#)
                .unwrap();
        assert_eq!(settings.texture_size, 16);
        assert_eq!(settings.camera.fov_degrees, 60.0);
        assert_eq!(settings.camera.max_distance, 20.0);
        assert_eq!(settings.model_path, DEFAULT_MODEL_PATH);
    }
}
