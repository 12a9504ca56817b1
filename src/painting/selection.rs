//! Selection resource for tracking the active part

use bevy::prelude::*;

use super::color::PartColor;
use super::error::PaintResult;
use super::registry::PartRegistry;

/// Currently active part and the color shown for it in the picker
///
/// `active` is `None` until the first successful [`PartSelection::select`],
/// which is distinct from having part 0 selected.
#[derive(Resource, Debug, Default)]
pub struct PartSelection {
    active: Option<usize>,
    displayed: PartColor,
}

impl PartSelection {
    /// Make `index` the active part and return its current color
    ///
    /// An out-of-range index leaves the selection untouched.
    pub fn select(&mut self, registry: &PartRegistry, index: usize) -> PaintResult<PartColor> {
        let color = registry.color(index)?;
        self.active = Some(index);
        self.displayed = color;
        Ok(color)
    }

    pub fn current(&self) -> Option<usize> {
        self.active
    }

    pub fn displayed_color(&self) -> PartColor {
        self.displayed
    }

    pub fn is_selected(&self) -> bool {
        self.active.is_some()
    }

    pub(crate) fn show_color(&mut self, color: PartColor) {
        self.displayed = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painting::error::PaintError;

    fn registry_with(n: usize) -> PartRegistry {
        let mut world = World::new();
        let mut registry = PartRegistry::default();
        for _ in 0..n {
            registry.register(world.spawn_empty().id());
        }
        registry
    }

    #[test]
    fn test_none_before_select() {
        let selection = PartSelection::default();
        assert_eq!(selection.current(), None);
        assert!(!selection.is_selected());
    }

    #[test]
    fn test_select_every_valid_index() {
        let registry = registry_with(4);
        let mut selection = PartSelection::default();

        for index in 0..registry.count() {
            assert_eq!(selection.select(&registry, index), Ok(PartColor::BLACK));
            assert_eq!(selection.current(), Some(index));
        }
    }

    #[test]
    fn test_select_out_of_range_keeps_previous() {
        let registry = registry_with(2);
        let mut selection = PartSelection::default();

        assert_eq!(
            selection.select(&registry, 2),
            Err(PaintError::OutOfRange { index: 2, count: 2 })
        );
        assert_eq!(selection.current(), None);

        selection.select(&registry, 1).unwrap();
        assert!(selection.select(&registry, usize::MAX).is_err());
        assert_eq!(selection.current(), Some(1));
    }

    #[test]
    fn test_select_before_load_fails() {
        let registry = PartRegistry::default();
        let mut selection = PartSelection::default();
        assert!(selection.select(&registry, 0).is_err());
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn test_select_reads_back_part_color() {
        let mut registry = registry_with(2);
        registry.set_color(1, PartColor::new(9, 8, 7)).unwrap();
        let mut selection = PartSelection::default();

        assert_eq!(selection.select(&registry, 1), Ok(PartColor::new(9, 8, 7)));
        assert_eq!(selection.displayed_color(), PartColor::new(9, 8, 7));

        selection.select(&registry, 0).unwrap();
        assert_eq!(selection.displayed_color(), PartColor::BLACK);
    }
}
