//! Statue - Minecraft skin to voxel statue converter
//!
//! This crate turns a 64×64 avatar skin texture into a block statue: every
//! texel of the skin's unfolded body-part atlas is matched against a block
//! palette and placed as a voxel, then the sparse statue is shrink-wrapped
//! and written as a flat-grid schematic.
//!
//! ## Pipeline
//!
//! ```text
//! skin.png (any size)
//!     ↓ SkinTexture::from_path (resized to 64×64)
//! SkinTexture
//!     ↓ unfold::assemble (per part: 6 base faces, then 6 puffed overlay faces,
//!     ↓                   texels resolved through BlockPalette)
//! VoxelMap (sparse, statue-local coordinates)
//!     ↓ schematic::export_region (bounding box → zero-based dense grid)
//! Region → Schematic JSON
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use statue::{assemble, export_region, BlockPalette, Schematic, SkinTexture};
//!
//! fn main() -> statue::Result<()> {
//!     let skin = SkinTexture::from_path("steve.png")?;
//!     let palette = BlockPalette::builtin();
//!
//!     let blocks = assemble(&skin, &palette)?;
//!     let (region, stats) = export_region(&blocks)?;
//!     println!("placed {} blocks", stats.placed);
//!
//!     Schematic::new("SkinStatue", "statue", region).save("steve.json")?;
//!     Ok(())
//! }
//! ```
//!
//! The overlay layer (hat, jacket, sleeves) is rendered one voxel outside
//! the base box along each face normal, and overwrites base voxels wherever
//! the puffed shell lands on an already-written coordinate.

pub mod body;
pub mod palette;
pub mod schematic;
pub mod skin;
pub mod types;
pub mod unfold;

// Re-export main types for convenience
pub use body::{BodyPart, Face, BODY_PARTS};
pub use palette::{BlockPalette, PaletteEntry, ALPHA_THRESHOLD, FALLBACK_BLOCK};
pub use schematic::{
    export_region, Bounds, ExportStats, PlacementError, Region, Schematic, AIR_BLOCK,
};
pub use skin::{SkinTexture, SKIN_SIZE};
pub use types::{Result, StatueError};
pub use unfold::{assemble, unfold_part, SkinLayer, VoxelMap};
