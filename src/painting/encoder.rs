//! Color Encoder - turns a part color into a lit, textured material
//!
//! The material samples a uniform solid-color texture instead of using a flat
//! `base_color`, so every painted part goes through the same texture path
//! whether or not it ever needs per-pixel detail.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use super::color::PartColor;

/// Default edge length of the generated texture, in pixels
pub const DEFAULT_TEXTURE_SIZE: u32 = 100;

/// Handles to the assets produced by one encode
#[derive(Debug, Clone)]
pub struct EncodedMaterial {
    pub material: Handle<StandardMaterial>,
    pub texture: Handle<Image>,
}

/// Builds solid-color materials at a fixed texture resolution
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEncoder {
    texture_size: u32,
}

impl Default for ColorEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_TEXTURE_SIZE)
    }
}

impl ColorEncoder {
    /// A zero size is bumped to one pixel
    pub fn new(texture_size: u32) -> Self {
        Self {
            texture_size: texture_size.max(1),
        }
    }

    pub fn texture_size(&self) -> u32 {
        self.texture_size
    }

    /// Square image where every pixel holds `color`
    pub fn solid_color_image(&self, color: PartColor) -> Image {
        Image::new_fill(
            Extent3d {
                width: self.texture_size,
                height: self.texture_size,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            &color.to_rgba8(),
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::default(),
        )
    }

    /// Lit material sampling `texture` as its base color map
    pub fn material_for(texture: Handle<Image>) -> StandardMaterial {
        StandardMaterial {
            base_color: Color::WHITE,
            base_color_texture: Some(texture),
            perceptual_roughness: 0.6,
            reflectance: 0.5,
            ..default()
        }
    }

    /// Add a new texture and material for `color`; existing assets are untouched
    pub fn encode(
        &self,
        color: PartColor,
        images: &mut Assets<Image>,
        materials: &mut Assets<StandardMaterial>,
    ) -> EncodedMaterial {
        let texture = images.add(self.solid_color_image(color));
        let material = materials.add(Self::material_for(texture.clone()));
        debug!(
            "[ENCODER] Built {}x{} material for {}",
            self.texture_size, self.texture_size, color
        );
        EncodedMaterial { material, texture }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_is_uniform() {
        let encoder = ColorEncoder::default();
        let color = PartColor::new(10, 200, 30);
        let image = encoder.solid_color_image(color);

        assert_eq!(image.width(), DEFAULT_TEXTURE_SIZE);
        assert_eq!(image.height(), DEFAULT_TEXTURE_SIZE);

        let data = image.data.as_ref().expect("image should own its pixels");
        assert_eq!(data.len(), (DEFAULT_TEXTURE_SIZE * DEFAULT_TEXTURE_SIZE * 4) as usize);
        assert!(data.chunks_exact(4).all(|pixel| pixel == [10, 200, 30, 255]));
    }

    #[test]
    fn test_zero_size_is_clamped() {
        assert_eq!(ColorEncoder::new(0).texture_size(), 1);
    }

    #[test]
    fn test_encode_adds_linked_assets() {
        let encoder = ColorEncoder::new(4);
        let mut images = Assets::<Image>::default();
        let mut materials = Assets::<StandardMaterial>::default();

        let encoded = encoder.encode(PartColor::new(1, 2, 3), &mut images, &mut materials);

        let material = materials.get(&encoded.material).expect("material added");
        assert_eq!(material.base_color_texture.as_ref(), Some(&encoded.texture));
        assert_eq!(material.base_color, Color::WHITE);
        assert!(!material.unlit, "painted parts must respond to lighting");

        let image = images.get(&encoded.texture).expect("texture added");
        assert_eq!(image.width(), 4);
    }

    #[test]
    fn test_each_encode_allocates_fresh_assets() {
        let encoder = ColorEncoder::new(2);
        let mut images = Assets::<Image>::default();
        let mut materials = Assets::<StandardMaterial>::default();

        let first = encoder.encode(PartColor::BLACK, &mut images, &mut materials);
        let second = encoder.encode(PartColor::BLACK, &mut images, &mut materials);

        assert_ne!(first.material.id(), second.material.id());
        assert_ne!(first.texture.id(), second.texture.id());
        assert_eq!(materials.len(), 2);
    }
}
