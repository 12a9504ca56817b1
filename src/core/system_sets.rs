//! System organization using SystemSets
//!
//! # Execution Order
//!
//! Viewport clicks are handled by picking observers before `Update`, and the
//! paint panel runs in the egui pass after it. Both only write messages.
//! Inside `Update`:
//! 1. **Paint** - select/paint messages are applied to the registry and meshes
//! 2. **Camera** - the orbit rig moves the camera
//!
//! Rendering happens after `Update`, so a paint applied in a frame is drawn in
//! that same frame.

use bevy::prelude::*;

/// Per-frame execution order for viewer systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum ViewerSystems {
    /// Selection and material swaps
    Paint,

    /// Orbit camera update
    Camera,
}
