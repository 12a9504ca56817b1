//! UI styling for the paint panel
//!
//! Shared palette, text presets and frame/spacing helpers so the panel reads
//! consistently.

pub mod colors;
pub mod components;
pub mod typography;

pub use colors::*;
pub use components::*;
pub use typography::*;
