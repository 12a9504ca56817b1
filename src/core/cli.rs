//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use super::settings_persistence::{load_settings_or_default, settings_path, SettingsOrigin};
use super::ViewerSettings;

/// Interactive glTF viewer: click a part, pick a color
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "mesh_painter", version, about)]
pub struct ViewerArgs {
    /// glTF file to load, relative to the asset root
    #[arg(long, value_name = "PATH")]
    pub model: Option<String>,

    /// Settings file to use instead of the platform config location
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,
}

impl ViewerArgs {
    /// Resolve settings from disk and apply command line overrides
    pub fn resolve_settings(&self) -> (ViewerSettings, SettingsOrigin) {
        let path = settings_path(self.settings.as_deref());
        let (mut settings, origin) = load_settings_or_default(&path);
        if let Some(model) = &self.model {
            settings.model_path = model.clone();
        }
        (settings, origin)
    }
}
