//! Skin texture loading
//!
//! Skins are 64×64 RGBA textures laid out in the modern humanoid atlas
//! format. Images of any other size are resized on load; the unfolding
//! engine's face arithmetic assumes exactly 64×64 texels.

use crate::types::Result;
use image::{imageops::FilterType, RgbaImage};
use tracing::warn;

/// Side length of the humanoid skin atlas, in texels
pub const SKIN_SIZE: u32 = 64;

/// A 64×64 RGBA skin texture, immutable once loaded
#[derive(Debug, Clone)]
pub struct SkinTexture {
    image: RgbaImage,
}

impl SkinTexture {
    /// Load a skin from an image file
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let image = image::open(path)?.to_rgba8();
        Ok(Self::from_image(image))
    }

    /// Load a skin from encoded image bytes (PNG, etc.)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self::from_image(image))
    }

    /// Wrap an already-decoded RGBA image, resizing to 64×64 if needed
    ///
    /// Resizing uses nearest-neighbour filtering so no colors appear that
    /// were not in the source texture. Aspect ratio is not preserved; a
    /// non-square input will be distorted.
    pub fn from_image(image: RgbaImage) -> Self {
        let image = if image.dimensions() == (SKIN_SIZE, SKIN_SIZE) {
            image
        } else {
            warn!(
                "skin is {}x{}, resizing to {}x{}",
                image.width(),
                image.height(),
                SKIN_SIZE,
                SKIN_SIZE
            );
            image::imageops::resize(&image, SKIN_SIZE, SKIN_SIZE, FilterType::Nearest)
        };

        Self { image }
    }

    /// Get the RGBA texel at atlas coordinates (u, v)
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is outside the 64×64 atlas. Face regions of the
    /// fixed body parts never leave the atlas.
    pub fn pixel(&self, u: u32, v: u32) -> [u8; 4] {
        self.image.get_pixel(u, v).0
    }
}
