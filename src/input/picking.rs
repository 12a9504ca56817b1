//! Click-to-select for part meshes

use std::time::Duration;

use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

use super::PointerOverUi;
use crate::painting::{PartRegistry, SelectPart};

/// Presses held longer than this are treated as orbit drags, not clicks
pub const MAX_CLICK_DURATION: Duration = Duration::from_millis(300);

/// Observer attached to each part mesh: a primary click selects the part
pub fn on_part_click(
    click: On<Pointer<Click>>,
    registry: Res<PartRegistry>,
    pointer: Res<PointerOverUi>,
    mut requests: MessageWriter<SelectPart>,
) {
    if !is_selecting_click(click.event.button, click.event.duration, pointer.0) {
        return;
    }

    match registry.index_of(click.entity) {
        Some(index) => {
            debug!("[PICKING] Clicked part {} ({:?})", index + 1, click.entity);
            requests.write(SelectPart { index });
        }
        None => {
            debug!("[PICKING] Clicked unregistered entity {:?}", click.entity);
        }
    }
}

/// Whether a pointer click should turn into a selection
pub fn is_selecting_click(button: PointerButton, held: Duration, over_ui: bool) -> bool {
    button == PointerButton::Primary && held <= MAX_CLICK_DURATION && !over_ui
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_short_click_selects() {
        assert!(is_selecting_click(
            PointerButton::Primary,
            Duration::from_millis(80),
            false
        ));
    }

    #[test]
    fn test_other_buttons_ignored() {
        assert!(!is_selecting_click(
            PointerButton::Secondary,
            Duration::ZERO,
            false
        ));
        assert!(!is_selecting_click(
            PointerButton::Middle,
            Duration::ZERO,
            false
        ));
    }

    #[test]
    fn test_drag_release_ignored() {
        assert!(!is_selecting_click(
            PointerButton::Primary,
            Duration::from_millis(900),
            false
        ));
    }

    #[test]
    fn test_click_through_panel_ignored() {
        assert!(!is_selecting_click(
            PointerButton::Primary,
            Duration::from_millis(50),
            true
        ));
    }
}
