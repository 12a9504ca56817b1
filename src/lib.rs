//! Mesh Painter - interactive glTF viewer for assigning solid colors to parts
//!
//! Loads a model, registers each mesh as a numbered part, and lets the user
//! select a part (panel or viewport click) and paint it with a solid color.
//!
//! - [`core`] - state machine, settings, CLI, system ordering
//! - [`painting`] - color parsing, encoder, registry, selection, applicator
//! - [`assets`] - model loading and part discovery
//! - [`input`] - viewport picking
//! - [`rendering`] - camera and lighting rig
//! - [`ui`] - egui paint panel

pub mod assets;
pub mod core;
pub mod input;
pub mod painting;
pub mod rendering;
pub mod ui;
