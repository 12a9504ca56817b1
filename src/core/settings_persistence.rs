//! Settings loading
//!
//! Reads [`ViewerSettings`] from a JSON file once, before the app is built, so
//! the window and log filter can be configured from it.
//!
//! # File Location
//!
//! `settings.json` in the platform config directory, e.g.
//! `~/.config/meshpainter/settings.json`, unless `--settings` names another
//! file. Falls back to `settings.json` in the working directory when no
//! config directory can be resolved.
//!
//! # Error Handling
//!
//! A missing, unreadable or invalid file never stops the viewer: defaults are
//! used and the reason is reported once logging is up.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use directories::ProjectDirs;

use super::error::CoreResult;
use super::ViewerSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Where the active settings came from
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum SettingsOrigin {
    /// Parsed from this file
    File(PathBuf),
    /// Defaults; `reason` is set when a file existed but was rejected
    Defaults {
        path: PathBuf,
        reason: Option<String>,
    },
}

/// Resolve the settings file path, honoring an explicit override
pub fn settings_path(override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }
    if let Some(proj_dirs) = ProjectDirs::from("com", "mesh_painter", "MeshPainter") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and validate settings from `path`
pub fn load_settings(path: &Path) -> CoreResult<ViewerSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: ViewerSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from `path`, falling back to defaults on any failure
pub fn load_settings_or_default(path: &Path) -> (ViewerSettings, SettingsOrigin) {
    if !path.exists() {
        let origin = SettingsOrigin::Defaults {
            path: path.to_path_buf(),
            reason: None,
        };
        return (ViewerSettings::default(), origin);
    }

    match load_settings(path) {
        Ok(settings) => (settings, SettingsOrigin::File(path.to_path_buf())),
        Err(e) => {
            let origin = SettingsOrigin::Defaults {
                path: path.to_path_buf(),
                reason: Some(e.to_string()),
            };
            (ViewerSettings::default(), origin)
        }
    }
}

/// Startup system reporting how settings were resolved
pub fn report_settings_origin(origin: Res<SettingsOrigin>) {
    match origin.as_ref() {
        SettingsOrigin::File(path) => info!("[SETTINGS] Loaded settings from {:?}", path),
        SettingsOrigin::Defaults { path, reason: None } => {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path)
        }
        SettingsOrigin::Defaults {
            path,
            reason: Some(reason),
        } => warn!(
            "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
            path, reason
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_override_path_wins() {
        let path = Path::new("/tmp/custom.json");
        assert_eq!(settings_path(Some(path)), path);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let (settings, origin) = load_settings_or_default(&path);
        assert_eq!(settings, ViewerSettings::default());
        assert_eq!(origin, SettingsOrigin::Defaults { path, reason: None });
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "model_path": "model/boots.gltf", "background": [0, 0, 0] }}"#)
            .unwrap();

        let (settings, origin) = load_settings_or_default(file.path());
        assert_eq!(settings.model_path, "model/boots.gltf");
        assert_eq!(settings.background, [0, 0, 0]);
        assert_eq!(origin, SettingsOrigin::File(file.path().to_path_buf()));
    }

    #[test]
    fn test_garbage_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let (settings, origin) = load_settings_or_default(file.path());
        assert_eq!(settings, ViewerSettings::default());
        assert!(matches!(
            origin,
            SettingsOrigin::Defaults { reason: Some(_), .. }
        ));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "texture_size": 0 }}"#).unwrap();

        assert!(load_settings(file.path()).is_err());
        let (settings, _) = load_settings_or_default(file.path());
        assert_eq!(settings.texture_size, ViewerSettings::default().texture_size);
    }
}
