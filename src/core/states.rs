//! Application state machine
//!
//! # State Flow
//!
//! ```text
//! [Loading] → [Ready]
//!     ↓
//! [LoadFailed]
//! ```
//!
//! - **Loading**: the model file is being fetched and parsed; the part
//!   registry is empty, so selection and paint requests are rejected
//! - **Ready**: the scene instance is spawned and its parts registered
//! - **LoadFailed**: the model could not be loaded; the scene keeps rendering
//!   with no parts. There is no retry.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

/// Primary application state
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, States, Reflect)]
pub enum AppState {
    /// Model asset in flight (starting state)
    #[default]
    Loading,

    /// Model spawned and parts registered
    Ready,

    /// Model asset failed to load
    LoadFailed,
}

/// Validate if a state transition is allowed
fn is_valid_state_transition(from: AppState, to: AppState) -> bool {
    match (from, to) {
        (AppState::Loading, AppState::Ready) => true,
        (AppState::Loading, AppState::LoadFailed) => true,

        // Self-transitions are always valid (no-op)
        (from, to) if from == to => true,

        _ => false,
    }
}

/// System to validate and log state transitions
pub fn validate_and_log_state_transitions(
    mut transition_events: MessageReader<StateTransitionEvent<AppState>>,
) {
    for event in transition_events.read() {
        match (event.exited, event.entered) {
            (Some(exited), Some(entered)) => {
                if is_valid_state_transition(exited, entered) {
                    info!("[TRANSITION] {:?} -> {:?}", exited, entered);
                } else {
                    error!(
                        "[TRANSITION] INVALID: {:?} -> {:?} (state may be inconsistent)",
                        exited, entered
                    );
                }
            }
            (None, Some(entered)) => {
                debug!("[TRANSITION] Enter: {:?}", entered);
            }
            (Some(exited), None) => {
                debug!("[TRANSITION] Exit: {:?}", exited);
            }
            (None, None) => {}
        }
    }
}
