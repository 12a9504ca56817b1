//! Part Registry - ordered, append-only list of paintable mesh parts

use bevy::prelude::*;

use super::color::PartColor;
use super::error::{PaintError, PaintResult};

/// One paintable mesh discovered in the loaded model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// Display label, `Part 1`, `Part 2`, … in discovery order
    pub name: String,
    /// Mesh entity owned by the scene graph
    pub mesh: Entity,
}

/// Parts discovered at load time plus the color currently assigned to each
///
/// `parts` and `colors` are index aligned and only ever grow.
#[derive(Resource, Debug, Default)]
pub struct PartRegistry {
    parts: Vec<Part>,
    colors: Vec<PartColor>,
}

impl PartRegistry {
    /// Append a part for `mesh` with the next sequential name and a black color
    pub fn register(&mut self, mesh: Entity) -> &Part {
        let name = format!("Part {}", self.parts.len() + 1);
        self.parts.push(Part { name, mesh });
        self.colors.push(PartColor::BLACK);
        &self.parts[self.parts.len() - 1]
    }

    pub fn get(&self, index: usize) -> PaintResult<&Part> {
        self.parts.get(index).ok_or(PaintError::OutOfRange {
            index,
            count: self.count(),
        })
    }

    pub fn color(&self, index: usize) -> PaintResult<PartColor> {
        self.colors.get(index).copied().ok_or(PaintError::OutOfRange {
            index,
            count: self.count(),
        })
    }

    pub fn count(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Index of the part wrapping `mesh`, if any
    pub fn index_of(&self, mesh: Entity) -> Option<usize> {
        self.parts.iter().position(|part| part.mesh == mesh)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Part, PartColor)> + '_ {
        self.parts
            .iter()
            .zip(self.colors.iter().copied())
            .enumerate()
            .map(|(index, (part, color))| (index, part, color))
    }

    pub(crate) fn set_color(&mut self, index: usize, color: PartColor) -> PaintResult<()> {
        let count = self.count();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(PaintError::OutOfRange { index, count })?;
        *slot = color;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(n: usize) -> PartRegistry {
        let mut world = World::new();
        let mut registry = PartRegistry::default();
        for _ in 0..n {
            registry.register(world.spawn_empty().id());
        }
        registry
    }

    #[test]
    fn test_empty_registry() {
        let registry = PartRegistry::default();
        assert_eq!(registry.count(), 0);
        assert!(registry.is_empty());
        assert_eq!(
            registry.get(0),
            Err(PaintError::OutOfRange { index: 0, count: 0 })
        );
    }

    #[test]
    fn test_register_assigns_sequential_names_and_black() {
        let registry = registry_with(5);

        assert_eq!(registry.count(), 5);
        for (index, part, color) in registry.iter() {
            assert_eq!(part.name, format!("Part {}", index + 1));
            assert_eq!(color, PartColor::BLACK);
        }
    }

    #[test]
    fn test_register_keeps_discovery_order() {
        let mut world = World::new();
        let mut registry = PartRegistry::default();
        let meshes: Vec<Entity> = (0..3).map(|_| world.spawn_empty().id()).collect();
        for mesh in meshes.iter().rev() {
            registry.register(*mesh);
        }
        let meshes: Vec<Entity> = meshes.into_iter().rev().collect();

        for (index, mesh) in meshes.iter().enumerate() {
            assert_eq!(registry.get(index).unwrap().mesh, *mesh);
            assert_eq!(registry.index_of(*mesh), Some(index));
        }
        assert_eq!(registry.index_of(world.spawn_empty().id()), None);
    }

    #[test]
    fn test_get_out_of_range() {
        let registry = registry_with(3);
        assert!(registry.get(2).is_ok());
        assert_eq!(
            registry.get(3),
            Err(PaintError::OutOfRange { index: 3, count: 3 })
        );
        assert!(registry.color(usize::MAX).is_err());
    }

    #[test]
    fn test_set_color_only_touches_one_part() {
        let mut registry = registry_with(3);
        registry.set_color(1, PartColor::new(1, 2, 3)).unwrap();

        assert_eq!(registry.color(0), Ok(PartColor::BLACK));
        assert_eq!(registry.color(1), Ok(PartColor::new(1, 2, 3)));
        assert_eq!(registry.color(2), Ok(PartColor::BLACK));
        assert!(registry.set_color(3, PartColor::BLACK).is_err());
    }
}
