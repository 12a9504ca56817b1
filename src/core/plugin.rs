//! Core plugin
//!
//! Provides fundamental application setup including:
//! - Panic hook configuration for detailed crash reporting
//! - Viewer settings and window configuration resources
//! - State management setup and transition logging
//! - System set ordering
//!
//! # Plugin Order
//!
//! Add [`CorePlugin`] right after `DefaultPlugins` and before the viewer
//! plugins: [`PaintingPlugin`](crate::painting::PaintingPlugin) reads
//! [`ViewerSettings`] while it builds.

use bevy::prelude::*;
use std::panic;
use std::sync::{Mutex, OnceLock};

use super::{
    settings_persistence::{report_settings_origin, SettingsOrigin},
    states::validate_and_log_state_transitions,
    AppState, ViewerSettings, ViewerSystems,
};
use crate::painting::PartSelection;

/// Global state tracker for panic reporting
static PANIC_STATE_TRACKER: OnceLock<Mutex<PanicStateInfo>> = OnceLock::new();

/// State information stored for panic reporting
#[derive(Debug, Clone, Default)]
struct PanicStateInfo {
    app_state: Option<AppState>,
    active_part: Option<usize>,
}

/// Core plugin for the viewer
///
/// Owns the settings resolved before the app was built.
pub struct CorePlugin {
    pub settings: ViewerSettings,
    pub origin: SettingsOrigin,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone())
            .insert_resource(self.settings.window.clone())
            .insert_resource(self.origin.clone())
            .insert_resource(ClearColor(self.settings.background_color()));

        app.init_state::<AppState>();

        app.register_type::<ViewerSettings>()
            .register_type::<super::WindowConfig>();

        app.configure_sets(
            Update,
            (ViewerSystems::Paint, ViewerSystems::Camera).chain(),
        );

        app.add_systems(Startup, report_settings_origin);
        app.add_systems(
            Update,
            (
                validate_and_log_state_transitions,
                update_panic_state_tracker,
            ),
        );
    }

    fn finish(&self, _app: &mut App) {
        // After all plugins are built but before the app runs
        setup_panic_hook();
    }
}

/// Set up a panic hook that reports the message, location and viewer state
fn setup_panic_hook() {
    PANIC_STATE_TRACKER.get_or_init(|| Mutex::new(PanicStateInfo::default()));

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "<unknown>".to_string()
        };

        let location = if let Some(loc) = panic_info.location() {
            format!("{}:{}:{}", loc.file(), loc.line(), loc.column())
        } else {
            "<unknown>".to_string()
        };

        let mut app_state_str = "<unknown>".to_string();
        let mut active_part_str = "<none>".to_string();
        if let Some(tracker) = PANIC_STATE_TRACKER.get() {
            if let Ok(state_info) = tracker.lock() {
                if let Some(app_state) = state_info.app_state {
                    app_state_str = format!("{:?}", app_state);
                }
                if let Some(index) = state_info.active_part {
                    active_part_str = format!("Part {}", index + 1);
                }
            }
        }

        eprintln!(
            "\nPANIC DETECTED\n\
            ============================================\n\
            Message: {}\n\
            Location: {}\n\
            AppState: {}\n\
            Active part: {}\n\
            ============================================\n",
            panic_msg, location, app_state_str, active_part_str
        );

        default_hook(panic_info);
    }));
}

/// Keep the panic tracker in sync with the current state and selection
fn update_panic_state_tracker(
    app_state: Option<Res<State<AppState>>>,
    selection: Option<Res<PartSelection>>,
) {
    if let Some(tracker) = PANIC_STATE_TRACKER.get() {
        if let Ok(mut state_info) = tracker.lock() {
            if let Some(app_state) = app_state {
                state_info.app_state = Some(*app_state.get());
            }
            if let Some(selection) = selection {
                state_info.active_part = selection.current();
            }
        }
    }
}
