//! Core module - application state, configuration and infrastructure
//!
//! - [`AppState`] - `Loading → Ready | LoadFailed`
//! - [`ViewerSystems`] - per-frame ordering of painting and camera
//! - [`ViewerSettings`] / [`WindowConfig`] - startup configuration
//! - [`ViewerArgs`] - command line overrides
//! - [`CorePlugin`] - wires the above and installs the panic hook
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use mesh_painter::core::{CorePlugin, ViewerArgs};
//!
//! let (settings, origin) = ViewerArgs::default().resolve_settings();
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(CorePlugin { settings, origin })
//!     // ... viewer plugins
//! ```

pub mod cli;
pub mod error;
pub mod error_handling;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod states;
pub mod system_sets;
pub mod window_config;

// Re-export commonly used items
pub use cli::ViewerArgs;
pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use resources::*;
pub use settings_persistence::SettingsOrigin;
pub use states::*;
pub use system_sets::ViewerSystems;
pub use window_config::WindowConfig;
