//! Input module - viewport picking
//!
//! Parts are picked with Bevy's observer pattern: the model loader attaches
//! [`picking::on_part_click`] to every registered mesh via `.observe()`, so a
//! click routes straight to the mesh that was hit with no global polling.
//!
//! Picking and the orbit camera both listen to the primary mouse button.
//! A press that turns into a drag belongs to the camera, and anything under
//! the egui panel belongs to the panel. [`PointerOverUi`] carries the latter
//! from the UI pass to both consumers.

pub mod picking;

use bevy::prelude::*;

pub use picking::*;

/// Whether the pointer is currently over (or captured by) the egui panel
///
/// Written by the paint panel each frame, read by picking and the camera.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerOverUi(pub bool);

/// Plugin registering input resources
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerOverUi>();
    }
}
