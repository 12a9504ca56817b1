//! Orbit camera - rotate around the origin with mouse drag, zoom with scroll
//!
//! The rig is kept in spherical coordinates around the scene origin. The
//! polar angle is measured from +Y and, together with the distance, is
//! clamped to the configured bounds on every change. Azimuth is unbounded.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

use crate::core::CameraSettings;
use crate::input::PointerOverUi;

/// Pixel scroll deltas per line of wheel scroll
const PIXELS_PER_LINE: f32 = 100.0;

/// Spherical orbit state of the viewer camera
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct OrbitCamera {
    /// Angle from +Y, radians
    pub polar: f32,
    /// Angle around Y measured from +Z, radians
    pub azimuth: f32,
    pub distance: f32,

    pub min_polar: f32,
    pub max_polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,

    /// Radians per pixel of drag
    pub rotate_sensitivity: f32,
    /// World units per scroll line
    pub zoom_sensitivity: f32,
}

impl OrbitCamera {
    /// Rig on the +Z axis at the configured start distance, clamped to bounds
    pub fn from_settings(settings: &CameraSettings) -> Self {
        let mut orbit = Self {
            polar: std::f32::consts::FRAC_PI_2,
            azimuth: 0.0,
            distance: settings.start_distance,
            min_polar: settings.min_polar_angle,
            max_polar: settings.max_polar_angle,
            min_distance: settings.min_distance,
            max_distance: settings.max_distance,
            rotate_sensitivity: settings.rotate_sensitivity,
            zoom_sensitivity: settings.zoom_sensitivity,
        };
        orbit.clamp();
        orbit
    }

    /// Apply a drag of `delta` pixels
    pub fn rotate(&mut self, delta: Vec2) {
        self.azimuth -= delta.x * self.rotate_sensitivity;
        self.polar -= delta.y * self.rotate_sensitivity;
        self.clamp();
    }

    /// Apply `lines` of scroll; positive moves closer
    pub fn zoom(&mut self, lines: f32) {
        self.distance -= lines * self.zoom_sensitivity;
        self.clamp();
    }

    /// Camera position for the current angles and distance
    pub fn translation(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        self.distance * Vec3::new(sin_polar * sin_azimuth, cos_polar, sin_polar * cos_azimuth)
    }

    /// Transform at [`Self::translation`] looking at the origin
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation()).looking_at(Vec3::ZERO, Vec3::Y)
    }

    fn clamp(&mut self) {
        self.polar = self.polar.clamp(self.min_polar, self.max_polar);
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }
}

/// Drag with the left button rotates, scroll zooms
///
/// Input is ignored while the pointer is over the paint panel.
pub fn orbit_camera_system(
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerOverUi>,
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    if pointer.0 {
        return;
    }

    let drag = if mouse_button.pressed(MouseButton::Left) {
        mouse_motion.delta
    } else {
        Vec2::ZERO
    };
    let lines = match mouse_scroll.unit {
        MouseScrollUnit::Line => mouse_scroll.delta.y,
        MouseScrollUnit::Pixel => mouse_scroll.delta.y / PIXELS_PER_LINE,
    };
    if drag == Vec2::ZERO && lines == 0.0 {
        return;
    }

    for (mut transform, mut orbit) in query.iter_mut() {
        if drag != Vec2::ZERO {
            orbit.rotate(drag);
        }
        if lines != 0.0 {
            orbit.zoom(lines);
        }
        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI};

    fn orbit() -> OrbitCamera {
        OrbitCamera::from_settings(&CameraSettings::default())
    }

    #[test]
    fn test_starts_on_positive_z() {
        let orbit = orbit();
        assert!(orbit.translation().abs_diff_eq(Vec3::new(0.0, 0.0, 15.0), 1e-4));
    }

    #[test]
    fn test_polar_clamped_both_ways() {
        let mut orbit = orbit();
        orbit.rotate(Vec2::new(0.0, 10_000.0));
        assert!((orbit.polar - FRAC_PI_6).abs() < 1e-6);

        orbit.rotate(Vec2::new(0.0, -10_000.0));
        assert!((orbit.polar - PI * 3.0 / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_clamped_both_ways() {
        let mut orbit = orbit();
        orbit.zoom(1_000.0);
        assert_eq!(orbit.distance, 12.0);

        orbit.zoom(-1_000.0);
        assert_eq!(orbit.distance, 20.0);
    }

    #[test]
    fn test_azimuth_unbounded() {
        let mut orbit = orbit();
        orbit.rotate(Vec2::new(-2.0 * PI / orbit.rotate_sensitivity, 0.0));
        assert!((orbit.azimuth - 2.0 * PI).abs() < 1e-3);
        assert!((orbit.polar - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_start_outside_bounds_is_clamped() {
        let settings = CameraSettings {
            start_distance: 50.0,
            ..default()
        };
        let orbit = OrbitCamera::from_settings(&settings);
        assert_eq!(orbit.distance, 20.0);
    }

    #[test]
    fn test_transform_looks_at_origin() {
        let mut orbit = orbit();
        orbit.rotate(Vec2::new(120.0, 40.0));
        let transform = orbit.transform();
        let to_origin = (-transform.translation).normalize();
        assert!(transform.forward().as_vec3().abs_diff_eq(to_origin, 1e-4));
    }
}
