//! Block palette and nearest-color resolution
//!
//! A [`BlockPalette`] maps RGB colors to Minecraft block identifiers. Skin
//! texels are matched against it with a nearest-color search, so any palette
//! of opaque blocks can drive the statue conversion.
//!
//! Palettes preserve their load order, and ties in the nearest-color search
//! go to the earliest entry. Converting the same skin with the same palette
//! therefore always produces the same statue.

use crate::types::{Result, StatueError};
use tracing::warn;

/// Pixels with alpha below this threshold resolve to no block at all.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Returned by [`BlockPalette::nearest_block`] when the palette is empty.
pub const FALLBACK_BLOCK: &str = "minecraft:stone";

/// Wool, concrete and terracotta averages from the vanilla textures.
/// Used when no external palette file is supplied.
const BUILTIN_PALETTE: &[([u8; 3], &str)] = &[
    // Wool
    ([221, 221, 221], "minecraft:white_wool"),
    ([219, 125, 62], "minecraft:orange_wool"),
    ([179, 80, 188], "minecraft:magenta_wool"),
    ([107, 138, 201], "minecraft:light_blue_wool"),
    ([177, 166, 39], "minecraft:yellow_wool"),
    ([65, 174, 56], "minecraft:lime_wool"),
    ([208, 132, 153], "minecraft:pink_wool"),
    ([64, 64, 64], "minecraft:gray_wool"),
    ([154, 161, 161], "minecraft:light_gray_wool"),
    ([46, 110, 137], "minecraft:cyan_wool"),
    ([126, 61, 181], "minecraft:purple_wool"),
    ([46, 56, 141], "minecraft:blue_wool"),
    ([79, 50, 31], "minecraft:brown_wool"),
    ([53, 70, 27], "minecraft:green_wool"),
    ([150, 52, 48], "minecraft:red_wool"),
    ([25, 22, 22], "minecraft:black_wool"),
    // Concrete
    ([207, 213, 214], "minecraft:white_concrete"),
    ([224, 97, 0], "minecraft:orange_concrete"),
    ([169, 48, 159], "minecraft:magenta_concrete"),
    ([35, 137, 198], "minecraft:light_blue_concrete"),
    ([240, 175, 21], "minecraft:yellow_concrete"),
    ([94, 169, 24], "minecraft:lime_concrete"),
    ([213, 101, 142], "minecraft:pink_concrete"),
    ([54, 57, 61], "minecraft:gray_concrete"),
    ([125, 125, 115], "minecraft:light_gray_concrete"),
    ([21, 119, 136], "minecraft:cyan_concrete"),
    ([100, 31, 156], "minecraft:purple_concrete"),
    ([44, 46, 143], "minecraft:blue_concrete"),
    ([96, 59, 31], "minecraft:brown_concrete"),
    ([73, 91, 36], "minecraft:green_concrete"),
    ([142, 32, 32], "minecraft:red_concrete"),
    ([8, 10, 15], "minecraft:black_concrete"),
    // Terracotta
    ([209, 177, 161], "minecraft:white_terracotta"),
    ([160, 83, 37], "minecraft:orange_terracotta"),
    ([149, 87, 108], "minecraft:magenta_terracotta"),
    ([112, 108, 138], "minecraft:light_blue_terracotta"),
    ([186, 133, 35], "minecraft:yellow_terracotta"),
    ([103, 117, 52], "minecraft:lime_terracotta"),
    ([160, 77, 78], "minecraft:pink_terracotta"),
    ([57, 41, 35], "minecraft:gray_terracotta"),
    ([135, 107, 98], "minecraft:light_gray_terracotta"),
    ([86, 91, 91], "minecraft:cyan_terracotta"),
    ([118, 69, 86], "minecraft:purple_terracotta"),
    ([74, 59, 91], "minecraft:blue_terracotta"),
    ([77, 51, 35], "minecraft:brown_terracotta"),
    ([76, 83, 42], "minecraft:green_terracotta"),
    ([142, 60, 46], "minecraft:red_terracotta"),
    ([37, 22, 16], "minecraft:black_terracotta"),
    // Plain terracotta works well for skin tones
    ([152, 94, 67], "minecraft:terracotta"),
];

/// A single palette entry: an opaque RGB color and the block it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub rgb: [u8; 3],
    pub block: String,
}

/// Ordered mapping from RGB colors to block identifiers
///
/// Entries keep their insertion order; the nearest-color search breaks ties
/// in favor of the earliest entry, so iteration order is part of the
/// palette's observable behavior. RGB keys are unique: inserting an existing
/// color replaces its block identifier.
#[derive(Debug, Clone, Default)]
pub struct BlockPalette {
    entries: Vec<PaletteEntry>,
}

impl BlockPalette {
    /// Create a new empty palette
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create the built-in wool/concrete/terracotta palette
    pub fn builtin() -> Self {
        let mut palette = Self::new();
        for (rgb, block) in BUILTIN_PALETTE {
            palette.insert(*rgb, (*block).to_string());
        }
        palette
    }

    /// Load a palette from a JSON file
    ///
    /// The file must contain a single JSON object mapping `"r,g,b"` keys to
    /// block identifier strings:
    ///
    /// ```json
    /// {
    ///   "221,221,221": "minecraft:white_wool",
    ///   "25,22,22": "minecraft:black_wool"
    /// }
    /// ```
    ///
    /// Returns [`StatueError::PaletteUnavailable`] if the file cannot be
    /// read, and [`StatueError::InvalidPaletteEntry`] for malformed keys or
    /// non-string values. Entry order follows the document order.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| StatueError::PaletteUnavailable(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&data)
    }

    /// Parse a palette from a JSON string (same format as [`Self::from_path`])
    pub fn from_json_str(data: &str) -> Result<Self> {
        // serde_json's preserve_order feature keeps document order here
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(data)?;

        let mut palette = Self::new();
        for (key, value) in &map {
            let rgb = parse_rgb_key(key)?;
            let block = value
                .as_str()
                .ok_or_else(|| StatueError::InvalidPaletteEntry {
                    key: key.clone(),
                    reason: "value is not a string".to_string(),
                })?;
            palette.insert(rgb, block.to_string());
        }

        Ok(palette)
    }

    /// Add a color to the palette, replacing the block for an existing color
    pub fn insert(&mut self, rgb: [u8; 3], block: String) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.rgb == rgb) {
            warn!(
                "palette color {},{},{} redefined: {} -> {}",
                rgb[0], rgb[1], rgb[2], entry.block, block
            );
            entry.block = block;
        } else {
            self.entries.push(PaletteEntry { rgb, block });
        }
    }

    /// Get the number of entries in the palette
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in palette order
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Resolve an RGBA pixel to a block identifier
    ///
    /// Returns `None` for transparent pixels (alpha below
    /// [`ALPHA_THRESHOLD`]); there is no partial-transparency blending.
    /// Opaque pixels match the nearest palette entry by Euclidean distance
    /// in RGB space, ignoring alpha.
    pub fn resolve(&self, rgba: [u8; 4]) -> Option<&str> {
        let [r, g, b, a] = rgba;
        if a < ALPHA_THRESHOLD {
            return None;
        }
        Some(self.nearest_block([r, g, b]))
    }

    /// Find the block whose palette color is nearest to `rgb`
    ///
    /// Ties go to the earliest entry in palette order. An empty palette
    /// yields [`FALLBACK_BLOCK`]; callers that treat an empty palette as a
    /// configuration error should check [`Self::is_empty`] up front, as the
    /// assembler does.
    pub fn nearest_block(&self, rgb: [u8; 3]) -> &str {
        let mut best: Option<(&str, u32)> = None;

        for entry in &self.entries {
            let distance = color_distance_sq(rgb, entry.rgb);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((entry.block.as_str(), distance)),
            }
        }

        best.map_or(FALLBACK_BLOCK, |(block, _)| block)
    }
}

/// Squared Euclidean distance between two colors in RGB space
///
/// Squared distance has the same ordering as the true distance, so the
/// nearest entry (and the tie-break) comes out identical without the sqrt.
fn color_distance_sq(a: [u8; 3], b: [u8; 3]) -> u32 {
    let dr = a[0] as i32 - b[0] as i32;
    let dg = a[1] as i32 - b[1] as i32;
    let db = a[2] as i32 - b[2] as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Parse an `"r,g,b"` palette key into a color triple
fn parse_rgb_key(key: &str) -> Result<[u8; 3]> {
    let parts: Vec<&str> = key.split(',').collect();
    if parts.len() != 3 {
        return Err(StatueError::InvalidPaletteEntry {
            key: key.to_string(),
            reason: "expected three comma-separated components".to_string(),
        });
    }

    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| StatueError::InvalidPaletteEntry {
                key: key.to_string(),
                reason: format!("component {:?} is not in 0-255", part),
            })?;
    }

    Ok(rgb)
}
