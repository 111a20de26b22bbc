//! Bounds computation and schematic export
//!
//! The export adapter shrink-wraps the sparse voxel map into a zero-based
//! bounding box and places every voxel into a dense [`Region`] grid. The
//! region is the single flat-grid container format this crate writes; it
//! serializes to JSON through serde, with an interned block palette and
//! `minecraft:air` as the implicit default state.
//!
//! Placement failures are per-voxel and recoverable: a bad block identifier
//! or out-of-range coordinate is logged, counted and skipped without
//! aborting the rest of the export.

use crate::types::{Result, StatueError};
use crate::unfold::VoxelMap;
use glam::{IVec3, UVec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Default block state filling unset region cells
pub const AIR_BLOCK: &str = "minecraft:air";

/// Per-voxel placement failure, absorbed and counted by the exporter
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("coordinate ({x}, {y}, {z}) outside region {width}x{height}x{length}")]
    OutOfBounds {
        x: i32,
        y: i32,
        z: i32,
        width: u32,
        height: u32,
        length: u32,
    },

    #[error("invalid block identifier {0:?}")]
    InvalidBlockId(String),
}

/// Axis-aligned bounding box over a voxel map, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: IVec3,
    pub max: IVec3,
}

impl Bounds {
    /// Compute the minimal bounds enclosing every voxel in the map
    ///
    /// Returns `None` for an empty map.
    pub fn of(blocks: &VoxelMap) -> Option<Self> {
        let mut positions = blocks.keys();
        let first = *positions.next()?;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for pos in positions {
            bounds.min = bounds.min.min(*pos);
            bounds.max = bounds.max.max(*pos);
        }
        Some(bounds)
    }

    /// Width, height and length of the box
    pub fn dimensions(&self) -> UVec3 {
        (self.max - self.min + IVec3::ONE).as_uvec3()
    }
}

/// Counters reported by [`export_region`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportStats {
    pub placed: usize,
    pub skipped: usize,
}

/// A dense block grid with an interned state palette
///
/// Cells default to [`AIR_BLOCK`] (palette index 0). Blocks are stored as
/// palette indices in x-fastest, then y, then z order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    width: u32,
    height: u32,
    length: u32,
    palette: Vec<String>,
    blocks: Vec<u16>,
}

impl Region {
    /// Allocate an air-filled region of the given dimensions
    pub fn new(width: u32, height: u32, length: u32) -> Self {
        Self {
            width,
            height,
            length,
            palette: vec![AIR_BLOCK.to_string()],
            blocks: vec![0; (width * height * length) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    fn index(&self, x: u32, y: u32, z: u32) -> usize {
        (x + self.width * (y + self.height * z)) as usize
    }

    fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && (x as u32) < self.width
            && y >= 0
            && (y as u32) < self.height
            && z >= 0
            && (z as u32) < self.length
    }

    /// Place a block at a zero-based region coordinate
    ///
    /// The identifier must be a lowercase `namespace:path` pair. Fails with
    /// a [`PlacementError`] on a malformed identifier or an out-of-range
    /// coordinate; the region is unchanged on failure.
    pub fn set_block(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        block: &str,
    ) -> std::result::Result<(), PlacementError> {
        if !self.contains(x, y, z) {
            return Err(PlacementError::OutOfBounds {
                x,
                y,
                z,
                width: self.width,
                height: self.height,
                length: self.length,
            });
        }
        if !is_valid_block_id(block) {
            return Err(PlacementError::InvalidBlockId(block.to_string()));
        }

        let state = match self.palette.iter().position(|b| b == block) {
            Some(i) => i as u16,
            None => {
                self.palette.push(block.to_string());
                (self.palette.len() - 1) as u16
            }
        };

        let index = self.index(x as u32, y as u32, z as u32);
        self.blocks[index] = state;
        Ok(())
    }

    /// Get the block at a zero-based region coordinate
    ///
    /// Returns `None` outside the region; air cells return [`AIR_BLOCK`].
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Option<&str> {
        if !self.contains(x, y, z) {
            return None;
        }
        let state = self.blocks[self.index(x as u32, y as u32, z as u32)];
        Some(&self.palette[state as usize])
    }

    /// Count the non-air cells
    pub fn block_count(&self) -> usize {
        self.blocks.iter().filter(|&&state| state != 0).count()
    }

    /// Per-identifier counts of the non-air cells, densest first
    pub fn distribution(&self) -> Vec<(&str, usize)> {
        let mut counts = vec![0usize; self.palette.len()];
        for &state in &self.blocks {
            counts[state as usize] += 1;
        }

        let mut distribution: Vec<(&str, usize)> = self
            .palette
            .iter()
            .zip(counts)
            .skip(1) // air
            .filter(|(_, count)| *count > 0)
            .map(|(block, count)| (block.as_str(), count))
            .collect();
        distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        distribution
    }
}

/// Export a voxel map into a shrink-wrapped region
///
/// Computes the map's bounding box, translates every coordinate into the
/// zero-based frame and places the blocks in z, y, x order, so the interned
/// palette (and the serialized region) is identical across runs. Per-voxel
/// placement failures are logged and counted in the returned [`ExportStats`]
/// instead of aborting.
///
/// # Errors
///
/// Returns [`StatueError::EmptyStatue`] if the map holds no voxels.
pub fn export_region(blocks: &VoxelMap) -> Result<(Region, ExportStats)> {
    let bounds = Bounds::of(blocks).ok_or(StatueError::EmptyStatue)?;
    let dims = bounds.dimensions();
    let mut region = Region::new(dims.x, dims.y, dims.z);
    let mut stats = ExportStats::default();

    let mut voxels: Vec<(&IVec3, &String)> = blocks.iter().collect();
    voxels.sort_by_key(|(pos, _)| (pos.z, pos.y, pos.x));

    for (pos, block) in voxels {
        let local = *pos - bounds.min;
        match region.set_block(local.x, local.y, local.z, block) {
            Ok(()) => stats.placed += 1,
            Err(e) => {
                warn!("skipping voxel at {:?}: {}", local, e);
                stats.skipped += 1;
            }
        }
    }

    Ok((region, stats))
}

/// A named schematic wrapping one region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schematic {
    pub name: String,
    pub author: String,
    pub region: Region,
}

impl Schematic {
    pub fn new(name: impl Into<String>, author: impl Into<String>, region: Region) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            region,
        }
    }

    /// Write the schematic as JSON
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer(std::io::BufWriter::new(file), self)?;
        Ok(())
    }

    /// Read a schematic back from JSON
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let schematic = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(schematic)
    }
}

/// Check that a block identifier is a lowercase `namespace:path` pair
fn is_valid_block_id(id: &str) -> bool {
    let Some((namespace, path)) = id.split_once(':') else {
        return false;
    };
    let valid_part = |part: &str, extra: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || extra.contains(c))
    };
    valid_part(namespace, "_-.") && valid_part(path, "_-./")
}
