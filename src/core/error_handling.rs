//! Error handling utilities for viewer systems
//!
//! Helpers for logging failures from systems instead of panicking, so the
//! render loop keeps running on the last good state.

use bevy::prelude::*;

/// Log a failed system result and continue
///
/// Returns the value on success so callers can chain on it.
pub fn log_system_result<T, E: std::fmt::Debug>(
    result: Result<T, E>,
    system_name: &str,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("[ERROR_HANDLER] {} failed: {:?}", system_name, e);
            warn!("[ERROR_HANDLER] System will continue without this result");
            None
        }
    }
}

/// Helper macro to safely unwrap Option with error logging
#[macro_export]
macro_rules! safe_unwrap {
    ($expr:expr, $msg:expr) => {
        match $expr {
            Some(val) => val,
            None => {
                error!("[ERROR_HANDLER] {}", $msg);
                return;
            }
        }
    };
}
