//! Texture unfolding engine and statue assembler
//!
//! Unfolding walks every texel of a body part's twelve face regions (six
//! base, six overlay) and writes the resolved blocks into a shared sparse
//! voxel map. Overlay voxels are puffed one voxel outward along their face
//! normal, forming the thin clothing/hair shell around the base box.
//!
//! Write order is the contract: within a part the base layer lands before
//! the overlay layer, and parts are assembled in the fixed [`BODY_PARTS`]
//! order, so wherever two writes target the same coordinate the later one
//! wins deterministically.

use crate::body::{BodyPart, Face, BODY_PARTS};
use crate::palette::BlockPalette;
use crate::skin::SkinTexture;
use crate::types::{Result, StatueError};
use glam::IVec3;
use std::collections::HashMap;
use tracing::{debug, info};

/// Sparse statue representation: voxel coordinate to block identifier
pub type VoxelMap = HashMap<IVec3, String>;

/// The two texture layers of each body part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinLayer {
    /// Primary skin surface
    Base,
    /// Clothing/hair shell, rendered one voxel outside the base box
    Overlay,
}

impl SkinLayer {
    /// Both layers, in processing order. Base must come first so overlay
    /// writes overwrite base writes at coincident coordinates.
    pub const ALL: [SkinLayer; 2] = [SkinLayer::Base, SkinLayer::Overlay];

    /// Atlas origin of this layer's unfolded rectangle for a part
    fn origin(self, part: &BodyPart) -> (u32, u32) {
        match self {
            SkinLayer::Base => part.base,
            SkinLayer::Overlay => part.overlay,
        }
    }

    /// Displacement applied to this layer's voxels: overlay faces puff one
    /// voxel along their outward normal, base faces stay put
    fn puff(self, face: Face) -> IVec3 {
        match self {
            SkinLayer::Base => IVec3::ZERO,
            SkinLayer::Overlay => face.normal(),
        }
    }
}

/// Unfold one body part's texture regions into the shared voxel map
///
/// For each layer and face, every texel of the face's region is resolved
/// through the palette; transparent texels leave no voxel. Resolved blocks
/// land at the face transform's offset, translated by the part's placement
/// origin and the layer's puff.
pub fn unfold_part(
    part: &BodyPart,
    skin: &SkinTexture,
    palette: &BlockPalette,
    blocks: &mut VoxelMap,
) {
    for layer in SkinLayer::ALL {
        let (layer_u, layer_v) = layer.origin(part);
        for face in Face::ALL {
            let (face_u, face_v) = face.texture_offset(part);
            let (face_w, face_h) = face.texture_size(part);
            for v in 0..face_h {
                for u in 0..face_w {
                    let pixel = skin.pixel(layer_u + face_u + u, layer_v + face_v + v);
                    if let Some(block) = palette.resolve(pixel) {
                        let pos =
                            part.position + face.voxel_offset(u, v, part) + layer.puff(face);
                        blocks.insert(pos, block.to_string());
                    }
                }
            }
        }
    }
}

/// Assemble a full statue from a skin texture
///
/// Drives [`unfold_part`] across all six body parts in fixed order and
/// merges their contributions into one voxel map.
///
/// # Errors
///
/// Returns [`StatueError::EmptyPalette`] before any processing if the
/// palette has no entries. A fully transparent skin is not an error here:
/// it yields an empty map, which the export step rejects.
pub fn assemble(skin: &SkinTexture, palette: &BlockPalette) -> Result<VoxelMap> {
    if palette.is_empty() {
        return Err(StatueError::EmptyPalette);
    }

    let mut blocks = VoxelMap::new();
    for part in &BODY_PARTS {
        let before = blocks.len();
        unfold_part(part, skin, palette, &mut blocks);
        debug!("unfolded {}: {} new voxels", part.name, blocks.len() - before);
    }

    info!("assembled statue with {} voxels", blocks.len());
    Ok(blocks)
}
