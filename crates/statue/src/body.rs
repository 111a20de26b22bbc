//! Humanoid body part definitions and face unfolding transforms
//!
//! The modern 64×64 skin atlas packs each body part as an unfolded box: the
//! top and bottom faces sit on the first `depth` rows, with the right,
//! front, left and back faces in a strip below them. [`Face`] carries the
//! fixed transform from a texel inside one of those regions to a voxel
//! offset inside the part's box.
//!
//! Statue space is x to the viewer's right, y up, and z toward the viewer,
//! so a part's front face lies in the local plane `z = depth - 1`. The
//! character's right arm ends up at low x, matching how skins render
//! in-game.

use glam::IVec3;

/// One of the six faces of a body part's box
///
/// Each face knows where its texel region sits inside a layer's unfolded
/// atlas rectangle and how that region folds onto the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    /// The character's right side (low x)
    Right,
    /// The character's left side (high x)
    Left,
    Top,
    Bottom,
}

impl Face {
    /// All faces, in atlas reading order. Unfolding processes faces in this
    /// order, so on shared box edges the later face's texel wins.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Right,
        Face::Front,
        Face::Left,
        Face::Back,
    ];

    /// Texel offset of this face's region, relative to the layer origin
    pub fn texture_offset(self, part: &BodyPart) -> (u32, u32) {
        let (w, d) = (part.width, part.depth);
        match self {
            Face::Top => (d, 0),
            Face::Bottom => (d + w, 0),
            Face::Right => (0, d),
            Face::Front => (d, d),
            Face::Left => (d + w, d),
            Face::Back => (d + w + d, d),
        }
    }

    /// Size of this face's texel region
    pub fn texture_size(self, part: &BodyPart) -> (u32, u32) {
        match self {
            Face::Top | Face::Bottom => (part.width, part.depth),
            Face::Front | Face::Back => (part.width, part.height),
            Face::Right | Face::Left => (part.depth, part.height),
        }
    }

    /// Map a texel (u, v) of this face's region to a voxel offset within
    /// the part's box
    ///
    /// `u` runs right and `v` runs down in the texture. The transforms
    /// follow the fold adjacency of the atlas: texels on a shared edge of
    /// two regions land on the same box edge. Side regions wrap around the
    /// box walls (the right face's high-u column touches the front face's
    /// low-u column at the right-front corner), the top region's bottom row
    /// meets the front face's top row, and the bottom region is mirrored
    /// vertically relative to the top.
    pub fn voxel_offset(self, u: u32, v: u32, part: &BodyPart) -> IVec3 {
        let (w, h, d) = (
            part.width as i32,
            part.height as i32,
            part.depth as i32,
        );
        let (u, v) = (u as i32, v as i32);
        match self {
            Face::Front => IVec3::new(u, h - 1 - v, d - 1),
            Face::Back => IVec3::new(w - 1 - u, h - 1 - v, 0),
            Face::Right => IVec3::new(0, h - 1 - v, u),
            Face::Left => IVec3::new(w - 1, h - 1 - v, d - 1 - u),
            Face::Top => IVec3::new(u, h - 1, v),
            Face::Bottom => IVec3::new(u, 0, d - 1 - v),
        }
    }

    /// Outward unit normal of this face; overlay voxels are puffed one
    /// voxel along it
    pub fn normal(self) -> IVec3 {
        match self {
            Face::Front => IVec3::Z,
            Face::Back => IVec3::NEG_Z,
            Face::Right => IVec3::NEG_X,
            Face::Left => IVec3::X,
            Face::Top => IVec3::Y,
            Face::Bottom => IVec3::NEG_Y,
        }
    }
}

/// A rectangular-box body part of the humanoid model
///
/// Dimensions are in voxels; `base` and `overlay` are the atlas origins of
/// the part's two unfolded texture rectangles, and `position` places the
/// box's low corner in statue-local space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyPart {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub base: (u32, u32),
    pub overlay: (u32, u32),
    pub position: IVec3,
}

impl BodyPart {
    const fn new(
        name: &'static str,
        width: u32,
        height: u32,
        depth: u32,
        base: (u32, u32),
        overlay: (u32, u32),
        position: IVec3,
    ) -> Self {
        Self {
            name,
            width,
            height,
            depth,
            base,
            overlay,
            position,
        }
    }
}

/// The six body parts of the 64×64 humanoid skin format, in assembly order
///
/// These are fixed constants of the skin format, not user-configurable. The
/// placement origins stand the statue on y = 0 with the character's right
/// side at low x.
pub const BODY_PARTS: [BodyPart; 6] = [
    BodyPart::new("head", 8, 8, 8, (0, 0), (32, 0), IVec3::new(4, 24, 4)),
    BodyPart::new("torso", 8, 12, 4, (16, 16), (16, 32), IVec3::new(4, 12, 4)),
    BodyPart::new("right_arm", 4, 12, 4, (40, 16), (40, 32), IVec3::new(0, 12, 4)),
    BodyPart::new("left_arm", 4, 12, 4, (32, 48), (48, 48), IVec3::new(12, 12, 4)),
    BodyPart::new("right_leg", 4, 12, 4, (0, 16), (0, 32), IVec3::new(4, 0, 4)),
    BodyPart::new("left_leg", 4, 12, 4, (16, 48), (0, 48), IVec3::new(8, 0, 4)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skin::SKIN_SIZE;

    #[test]
    fn test_face_regions_stay_inside_atlas() {
        for part in &BODY_PARTS {
            for layer_origin in [part.base, part.overlay] {
                for face in Face::ALL {
                    let (fu, fv) = face.texture_offset(part);
                    let (fw, fh) = face.texture_size(part);
                    assert!(
                        layer_origin.0 + fu + fw <= SKIN_SIZE,
                        "{} {:?} overruns atlas width",
                        part.name,
                        face
                    );
                    assert!(
                        layer_origin.1 + fv + fh <= SKIN_SIZE,
                        "{} {:?} overruns atlas height",
                        part.name,
                        face
                    );
                }
            }
        }
    }

    #[test]
    fn test_voxel_offsets_stay_inside_box() {
        for part in &BODY_PARTS {
            for face in Face::ALL {
                let (fw, fh) = face.texture_size(part);
                for v in 0..fh {
                    for u in 0..fw {
                        let p = face.voxel_offset(u, v, part);
                        assert!(p.x >= 0 && p.x < part.width as i32);
                        assert!(p.y >= 0 && p.y < part.height as i32);
                        assert!(p.z >= 0 && p.z < part.depth as i32);
                    }
                }
            }
        }
    }

    #[test]
    fn test_each_face_covers_its_boundary_plane() {
        // Every face must paint its whole plane of the box, so the six
        // faces together cover exactly the box surface.
        let part = &BODY_PARTS[0]; // head, 8x8x8
        for face in Face::ALL {
            let (fw, fh) = face.texture_size(part);
            let mut seen = std::collections::HashSet::new();
            for v in 0..fh {
                for u in 0..fw {
                    seen.insert(face.voxel_offset(u, v, part));
                }
            }
            assert_eq!(seen.len(), (fw * fh) as usize, "{:?} transform not injective", face);
        }
    }

    #[test]
    fn test_fold_adjacency_right_front() {
        // The right face's last texel column and the front face's first
        // column share the right-front vertical edge of the box.
        let part = &BODY_PARTS[0];
        let d = part.depth;
        for v in 0..part.height {
            let right_edge = Face::Right.voxel_offset(d - 1, v, part);
            let front_edge = Face::Front.voxel_offset(0, v, part);
            assert_eq!(right_edge.y, front_edge.y);
            assert_eq!(right_edge.z, front_edge.z);
            assert_eq!(right_edge.x, 0);
            assert_eq!(front_edge.x, 0);
        }
    }

    #[test]
    fn test_fold_adjacency_top_front() {
        // The top region's bottom row meets the front face's top row along
        // the front-top edge.
        let part = &BODY_PARTS[0];
        for u in 0..part.width {
            let top_edge = Face::Top.voxel_offset(u, part.depth - 1, part);
            let front_edge = Face::Front.voxel_offset(u, 0, part);
            assert_eq!(top_edge.x, front_edge.x);
            assert_eq!(top_edge.z, front_edge.z);
        }
    }

    #[test]
    fn test_normals_point_outward() {
        for part in &BODY_PARTS {
            for face in Face::ALL {
                let (fw, fh) = face.texture_size(part);
                for v in 0..fh {
                    for u in 0..fw {
                        let pushed = face.voxel_offset(u, v, part) + face.normal();
                        let outside = pushed.x < 0
                            || pushed.x >= part.width as i32
                            || pushed.y < 0
                            || pushed.y >= part.height as i32
                            || pushed.z < 0
                            || pushed.z >= part.depth as i32;
                        assert!(outside, "{} {:?} normal points inward", part.name, face);
                    }
                }
            }
        }
    }

    #[test]
    fn test_part_table_matches_skin_format() {
        let head = &BODY_PARTS[0];
        assert_eq!((head.width, head.height, head.depth), (8, 8, 8));
        assert_eq!(head.base, (0, 0));
        assert_eq!(head.overlay, (32, 0));

        let right_leg = BODY_PARTS.iter().find(|p| p.name == "right_leg").unwrap();
        assert_eq!(right_leg.base, (0, 16));
        assert_eq!(right_leg.overlay, (0, 32));

        // Right-side limbs sit at lower x than left-side limbs
        let right_arm = BODY_PARTS.iter().find(|p| p.name == "right_arm").unwrap();
        let left_arm = BODY_PARTS.iter().find(|p| p.name == "left_arm").unwrap();
        assert!(right_arm.position.x < left_arm.position.x);
    }
}
