//! Error types for the painting pipeline
//!
//! Every failure here is terminal for the single user action that caused it:
//! nothing is mutated and the render loop keeps drawing the last good state.

use bevy::prelude::Entity;

/// Errors returned by the part registry, selection and material applicator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaintError {
    /// Part index outside the registered parts
    #[error("Part index {index} is out of range ({count} parts registered)")]
    OutOfRange { index: usize, count: usize },

    /// A paint request arrived before any part was selected
    #[error("No part is selected")]
    NoSelection,

    /// Color input that is not three channels in 0..=255
    #[error("Malformed color: {input:?}")]
    MalformedColor { input: String },

    /// The selected part's mesh no longer carries a material slot
    #[error("Mesh entity {entity:?} has no material slot")]
    MissingMaterialSlot { entity: Entity },
}

/// Result type alias for painting operations
pub type PaintResult<T> = Result<T, PaintError>;
