//! Rendering module - camera and lighting rig
//!
//! Spawns the perspective camera (with its [`OrbitCamera`] rig and ambient
//! light) plus a point and a directional light, all taken from
//! [`LightingSettings`] and [`CameraSettings`]. Nothing here changes after
//! startup except the camera transform.
//!
//! - `orbit_camera` - spherical rig and the drag/scroll system

pub mod orbit_camera;

use bevy::prelude::*;

use crate::core::{CameraSettings, LightingSettings, ViewerSettings, ViewerSystems};

pub use orbit_camera::{orbit_camera_system, OrbitCamera};

/// Marker for the single viewer camera
#[derive(Component, Debug, Default)]
pub struct ViewerCamera;

/// Plugin spawning the scene rig and driving the orbit camera
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<OrbitCamera>()
            .add_systems(Startup, setup_scene_rig)
            .add_systems(Update, orbit_camera_system.in_set(ViewerSystems::Camera));
    }
}

/// Spawn camera and lights from the startup settings
pub fn setup_scene_rig(mut commands: Commands, settings: Res<ViewerSettings>) {
    spawn_camera(&mut commands, &settings.camera, &settings.lighting);
    spawn_lights(&mut commands, &settings.lighting);
    info!("[RENDERING] Scene rig ready");
}

fn spawn_camera(commands: &mut Commands, camera: &CameraSettings, lighting: &LightingSettings) {
    let orbit = OrbitCamera::from_settings(camera);
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        AmbientLight {
            color: srgb(lighting.ambient_color),
            brightness: lighting.ambient_brightness,
            ..default()
        },
        orbit.transform(),
        orbit,
        ViewerCamera,
        Name::new("Viewer Camera"),
    ));
}

fn spawn_lights(commands: &mut Commands, lighting: &LightingSettings) {
    commands.spawn((
        PointLight {
            color: srgb(lighting.point_color),
            intensity: lighting.point_intensity,
            range: lighting.point_range,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(lighting.point_position)),
        Name::new("Point Light"),
    ));

    commands.spawn((
        DirectionalLight {
            color: srgb(lighting.directional_color),
            illuminance: lighting.directional_illuminance,
            ..default()
        },
        directional_transform(Vec3::from_array(lighting.directional_position)),
        Name::new("Directional Light"),
    ));
}

/// Directional light placed at `position`, shining towards the origin
pub fn directional_transform(position: Vec3) -> Transform {
    let direction = -position.normalize_or(Vec3::NEG_Y);
    // looking_at needs an up vector that is not parallel to the view direction
    let up = if direction.cross(Vec3::Y).length_squared() < 1e-6 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    Transform::from_translation(position).looking_to(direction, up)
}

fn srgb([r, g, b]: [u8; 3]) -> Color {
    Color::srgb_u8(r, g, b)
}
