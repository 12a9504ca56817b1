//! Painting module - the mesh color-assignment pipeline
//!
//! Leaf-first:
//!
//! - [`color`] - [`PartColor`] and the strict color parser
//! - [`encoder`] - [`ColorEncoder`], solid-color texture + lit material
//! - [`registry`] - [`PartRegistry`], parts discovered at load time
//! - [`selection`] - [`PartSelection`], the active part index
//! - [`applicator`] - [`Painter`], swaps materials onto the selected mesh
//!
//! The panel and viewport picking never touch these resources directly. They
//! write [`SelectPart`] / [`PaintPart`] messages, which the handlers below
//! apply in [`ViewerSystems::Paint`](crate::core::ViewerSystems::Paint).
//! Rejections are logged and kept in [`PaintFeedback`] for display.

pub mod applicator;
pub mod color;
pub mod encoder;
pub mod error;
pub mod registry;
pub mod selection;

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

use crate::core::{ViewerSettings, ViewerSystems};

pub use applicator::Painter;
pub use color::{ColorInput, PartColor};
pub use encoder::{ColorEncoder, EncodedMaterial};
pub use error::{PaintError, PaintResult};
pub use registry::{Part, PartRegistry};
pub use selection::PartSelection;

/// Request to make a part the active one
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectPart {
    pub index: usize,
}

/// Request to paint the active part
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct PaintPart {
    pub color: ColorInput,
}

impl PaintPart {
    pub fn new(color: impl Into<ColorInput>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

/// Outcome of the most recent select/paint request, for the panel
#[derive(Resource, Debug, Default)]
pub struct PaintFeedback {
    pub last_error: Option<PaintError>,
}

/// Plugin wiring the painting resources and request handlers
pub struct PaintingPlugin;

impl Plugin for PaintingPlugin {
    fn build(&self, app: &mut App) {
        // Settings are inserted by CorePlugin when it is present.
        let encoder = app
            .world()
            .get_resource::<ViewerSettings>()
            .map(|settings| ColorEncoder::new(settings.texture_size))
            .unwrap_or_default();
        info!(
            "[PAINT] Encoder ready ({}x{} textures)",
            encoder.texture_size(),
            encoder.texture_size()
        );

        app.insert_resource(encoder)
            .init_resource::<PartRegistry>()
            .init_resource::<PartSelection>()
            .init_resource::<PaintFeedback>()
            .add_message::<SelectPart>()
            .add_message::<PaintPart>()
            .add_systems(
                Update,
                (handle_select_requests, handle_paint_requests)
                    .chain()
                    .in_set(ViewerSystems::Paint),
            );
    }
}

pub fn handle_select_requests(
    mut requests: MessageReader<SelectPart>,
    mut painter: Painter,
    mut feedback: ResMut<PaintFeedback>,
) {
    for request in requests.read() {
        match painter.select(request.index) {
            Ok(color) => {
                debug!("[PAINT] Selected part {} ({})", request.index + 1, color);
                feedback.last_error = None;
            }
            Err(e) => {
                warn!("[PAINT] Selection rejected: {}", e);
                feedback.last_error = Some(e);
            }
        }
    }
}

pub fn handle_paint_requests(
    mut requests: MessageReader<PaintPart>,
    mut painter: Painter,
    mut feedback: ResMut<PaintFeedback>,
) {
    for request in requests.read() {
        match painter.apply_color(request.color.clone()) {
            Ok(_) => feedback.last_error = None,
            Err(e) => {
                warn!("[PAINT] Paint rejected: {}", e);
                feedback.last_error = Some(e);
            }
        }
    }
}
