//! Material Applicator - the only place part colors and mesh materials change
//!
//! [`Painter`] bundles the registry, the selection, the encoder and the asset
//! stores into one system parameter, so both the message handlers and tests
//! drive exactly the same code path.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::color::{ColorInput, PartColor};
use super::encoder::ColorEncoder;
use super::error::{PaintError, PaintResult};
use super::registry::PartRegistry;
use super::selection::PartSelection;

/// Explicit viewer state handed to every painting operation
#[derive(SystemParam)]
pub struct Painter<'w, 's> {
    registry: ResMut<'w, PartRegistry>,
    selection: ResMut<'w, PartSelection>,
    encoder: Res<'w, ColorEncoder>,
    images: ResMut<'w, Assets<Image>>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    slots: Query<'w, 's, &'static mut MeshMaterial3d<StandardMaterial>>,
}

impl Painter<'_, '_> {
    /// Select part `index` and return the color to display for it
    pub fn select(&mut self, index: usize) -> PaintResult<PartColor> {
        self.selection.select(&self.registry, index)
    }

    /// Paint the selected part with `input`
    ///
    /// Builds a fresh material, swaps it onto the part's mesh and records the
    /// new color. On any error nothing has been mutated. The replaced material
    /// is dropped with its last handle.
    pub fn apply_color(&mut self, input: impl Into<ColorInput>) -> PaintResult<PartColor> {
        let index = self.selection.current().ok_or(PaintError::NoSelection)?;
        let color = input.into().resolve()?;
        let part = self.registry.get(index)?;
        let mesh = part.mesh;

        let mut slot = self
            .slots
            .get_mut(mesh)
            .map_err(|_| PaintError::MissingMaterialSlot { entity: mesh })?;

        let encoded = self
            .encoder
            .encode(color, &mut self.images, &mut self.materials);
        slot.0 = encoded.material;

        // Touching the texture flags it for re-upload before the next frame.
        if self.images.get_mut(&encoded.texture).is_none() {
            warn!("[PAINT] Texture for {} vanished before upload", color);
        }

        self.registry.set_color(index, color)?;
        self.selection.show_color(color);

        info!("[PAINT] Part {} painted {}", index + 1, color);
        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn test_world(parts: usize) -> (World, Vec<Entity>, Handle<StandardMaterial>) {
        let mut world = World::new();
        world.init_resource::<PartRegistry>();
        world.init_resource::<PartSelection>();
        world.insert_resource(ColorEncoder::new(2));
        world.init_resource::<Assets<Image>>();
        world.init_resource::<Assets<StandardMaterial>>();

        let original = world
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());

        let meshes: Vec<Entity> = (0..parts)
            .map(|_| world.spawn(MeshMaterial3d(original.clone())).id())
            .collect();
        let mut registry = world.resource_mut::<PartRegistry>();
        for mesh in &meshes {
            registry.register(*mesh);
        }
        (world, meshes, original)
    }

    fn material_of(world: &World, mesh: Entity) -> Handle<StandardMaterial> {
        world
            .get::<MeshMaterial3d<StandardMaterial>>(mesh)
            .expect("mesh keeps its slot")
            .0
            .clone()
    }

    #[test]
    fn test_apply_without_selection() {
        let (mut world, meshes, original) = test_world(2);

        let result = world
            .run_system_once(|mut painter: Painter| painter.apply_color("rgb(1, 2, 3)"))
            .unwrap();

        assert_eq!(result, Err(PaintError::NoSelection));
        let registry = world.resource::<PartRegistry>();
        assert!(registry.iter().all(|(_, _, color)| color == PartColor::BLACK));
        assert!(meshes.iter().all(|mesh| material_of(&world, *mesh) == original));
    }

    #[test]
    fn test_apply_swaps_material_and_color() {
        let (mut world, meshes, original) = test_world(3);

        let result = world
            .run_system_once(|mut painter: Painter| {
                painter.select(1)?;
                painter.apply_color("rgb(255, 0, 0)")
            })
            .unwrap();
        assert_eq!(result, Ok(PartColor::new(255, 0, 0)));

        let painted = material_of(&world, meshes[1]);
        assert_ne!(painted, original);
        assert_eq!(material_of(&world, meshes[0]), original);
        assert_eq!(material_of(&world, meshes[2]), original);

        let materials = world.resource::<Assets<StandardMaterial>>();
        let texture = materials
            .get(&painted)
            .and_then(|material| material.base_color_texture.clone())
            .expect("painted material samples a texture");
        let images = world.resource::<Assets<Image>>();
        let pixels = images.get(&texture).and_then(|image| image.data.clone());
        assert_eq!(pixels, Some(vec![255, 0, 0, 255].repeat(4)));

        let registry = world.resource::<PartRegistry>();
        assert_eq!(registry.color(0), Ok(PartColor::BLACK));
        assert_eq!(registry.color(1), Ok(PartColor::new(255, 0, 0)));
        assert_eq!(registry.color(2), Ok(PartColor::BLACK));
        assert_eq!(
            world.resource::<PartSelection>().displayed_color(),
            PartColor::new(255, 0, 0)
        );
    }

    #[test]
    fn test_malformed_color_is_a_no_op() {
        let (mut world, meshes, _) = test_world(1);

        let result = world
            .run_system_once(|mut painter: Painter| {
                painter.select(0)?;
                painter.apply_color([5, 5, 5])?;
                painter.apply_color("notacolor")
            })
            .unwrap();

        assert_eq!(
            result,
            Err(PaintError::MalformedColor {
                input: "notacolor".to_string()
            })
        );
        let registry = world.resource::<PartRegistry>();
        assert_eq!(registry.color(0), Ok(PartColor::new(5, 5, 5)));

        let painted = material_of(&world, meshes[0]);
        let materials = world.resource::<Assets<StandardMaterial>>();
        let images = world.resource::<Assets<Image>>();
        let texture = materials.get(&painted).unwrap().base_color_texture.clone().unwrap();
        let pixel = images.get(&texture).unwrap().data.as_ref().unwrap()[..4].to_vec();
        assert_eq!(pixel, vec![5, 5, 5, 255]);
    }

    #[test]
    fn test_last_write_wins() {
        let (mut world, _, _) = test_world(1);

        world
            .run_system_once(|mut painter: Painter| {
                painter.select(0)?;
                painter.apply_color("rgb(10, 20, 30)")?;
                painter.apply_color("rgb(40, 50, 60)")
            })
            .unwrap()
            .unwrap();

        assert_eq!(
            world.resource::<PartRegistry>().color(0),
            Ok(PartColor::new(40, 50, 60))
        );
    }

    #[test]
    fn test_missing_slot_is_reported() {
        let (mut world, meshes, _) = test_world(1);
        world
            .entity_mut(meshes[0])
            .remove::<MeshMaterial3d<StandardMaterial>>();

        let result = world
            .run_system_once(|mut painter: Painter| {
                painter.select(0)?;
                painter.apply_color([1, 1, 1])
            })
            .unwrap();

        assert_eq!(
            result,
            Err(PaintError::MissingMaterialSlot { entity: meshes[0] })
        );
        assert_eq!(
            world.resource::<PartRegistry>().color(0),
            Ok(PartColor::BLACK)
        );
    }
}
