//! End-to-end tests for the skin → voxel map → schematic pipeline

use glam::IVec3;
use image::{Rgba, RgbaImage};
use statue::{
    assemble, export_region, BlockPalette, Schematic, SkinTexture, StatueError, BODY_PARTS,
};
use std::collections::HashSet;

fn opaque_white_skin() -> SkinTexture {
    SkinTexture::from_image(RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255])))
}

fn white_wool_palette() -> BlockPalette {
    let mut palette = BlockPalette::new();
    palette.insert([255, 255, 255], "minecraft:white_wool".to_string());
    palette
}

/// Independently construct the voxel set a fully opaque skin must produce:
/// per part, the surface of the base box plus one puffed plane per face for
/// the overlay shell.
fn opaque_statue_oracle() -> HashSet<IVec3> {
    let mut keys = HashSet::new();
    for part in &BODY_PARTS {
        let (w, h, d) = (
            part.width as i32,
            part.height as i32,
            part.depth as i32,
        );

        // Base layer: every voxel on the box surface
        for x in 0..w {
            for y in 0..h {
                for z in 0..d {
                    let on_surface =
                        x == 0 || x == w - 1 || y == 0 || y == h - 1 || z == 0 || z == d - 1;
                    if on_surface {
                        keys.insert(part.position + IVec3::new(x, y, z));
                    }
                }
            }
        }

        // Overlay layer: each face plane displaced one voxel outward
        for x in 0..w {
            for y in 0..h {
                keys.insert(part.position + IVec3::new(x, y, d)); // front
                keys.insert(part.position + IVec3::new(x, y, -1)); // back
            }
        }
        for y in 0..h {
            for z in 0..d {
                keys.insert(part.position + IVec3::new(-1, y, z)); // right
                keys.insert(part.position + IVec3::new(w, y, z)); // left
            }
        }
        for x in 0..w {
            for z in 0..d {
                keys.insert(part.position + IVec3::new(x, h, z)); // top
                keys.insert(part.position + IVec3::new(x, -1, z)); // bottom
            }
        }
    }
    keys
}

#[test]
fn test_white_skin_fills_every_part() {
    let blocks = assemble(&opaque_white_skin(), &white_wool_palette()).unwrap();

    for block in blocks.values() {
        assert_eq!(block, "minecraft:white_wool");
    }

    let oracle = opaque_statue_oracle();
    let assembled: HashSet<IVec3> = blocks.keys().copied().collect();
    assert_eq!(assembled, oracle);
}

#[test]
fn test_white_skin_export_dimensions() {
    let blocks = assemble(&opaque_white_skin(), &white_wool_palette()).unwrap();
    let (region, stats) = export_region(&blocks).unwrap();

    assert_eq!(stats.placed, blocks.len());
    assert_eq!(stats.skipped, 0);
    assert_eq!(region.block_count(), blocks.len());

    // Puffed overlays reach one voxel beyond the limbs on every side; the
    // head (depth 8) sets the z extent.
    assert_eq!(
        (region.width(), region.height(), region.length()),
        (18, 34, 10)
    );
}

#[test]
fn test_export_touches_every_bounding_face() {
    let blocks = assemble(&opaque_white_skin(), &white_wool_palette()).unwrap();
    let (region, _) = export_region(&blocks).unwrap();

    let (w, h, l) = (
        region.width() as i32,
        region.height() as i32,
        region.length() as i32,
    );

    let mut touched = [false; 6];
    for x in 0..w {
        for y in 0..h {
            for z in 0..l {
                if region.get_block(x, y, z) != Some("minecraft:air") {
                    touched[0] |= x == 0;
                    touched[1] |= x == w - 1;
                    touched[2] |= y == 0;
                    touched[3] |= y == h - 1;
                    touched[4] |= z == 0;
                    touched[5] |= z == l - 1;
                }
            }
        }
    }
    assert_eq!(touched, [true; 6], "a bounding face has no voxels");
}

#[test]
fn test_transparent_skin_produces_empty_statue() {
    let skin = SkinTexture::from_image(RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 0])));
    let blocks = assemble(&skin, &white_wool_palette()).unwrap();
    assert!(blocks.is_empty());

    let result = export_region(&blocks);
    assert!(matches!(result, Err(StatueError::EmptyStatue)));
}

#[test]
fn test_nearest_color_matching_through_pipeline() {
    // An off-white skin must still resolve to the nearest palette entry
    let skin = SkinTexture::from_image(RgbaImage::from_pixel(
        64,
        64,
        Rgba([250, 248, 252, 255]),
    ));
    let mut palette = BlockPalette::new();
    palette.insert([255, 255, 255], "minecraft:white_wool".to_string());
    palette.insert([0, 0, 0], "minecraft:black_wool".to_string());

    let blocks = assemble(&skin, &palette).unwrap();
    assert!(!blocks.is_empty());
    for block in blocks.values() {
        assert_eq!(block, "minecraft:white_wool");
    }
}

#[test]
fn test_schematic_save_and_load_round_trip() {
    let blocks = assemble(&opaque_white_skin(), &white_wool_palette()).unwrap();
    let (region, _) = export_region(&blocks).unwrap();
    let schematic = Schematic::new("SkinStatue", "statue", region);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statue.json");
    schematic.save(&path).unwrap();

    let restored = Schematic::load(&path).unwrap();
    assert_eq!(restored.name, "SkinStatue");
    assert_eq!(restored.author, "statue");
    assert_eq!(
        restored.region.block_count(),
        schematic.region.block_count()
    );
    assert_eq!(
        (
            restored.region.width(),
            restored.region.height(),
            restored.region.length()
        ),
        (18, 34, 10)
    );
}

#[test]
fn test_palette_file_drives_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.json");
    std::fs::write(
        &path,
        r#"{"255,255,255": "minecraft:quartz_block", "10,10,10": "minecraft:coal_block"}"#,
    )
    .unwrap();

    let palette = BlockPalette::from_path(&path).unwrap();
    let blocks = assemble(&opaque_white_skin(), &palette).unwrap();
    for block in blocks.values() {
        assert_eq!(block, "minecraft:quartz_block");
    }
}
