//! Book geometry
//!
//! Sizes and pivot offsets of the covers and pages, and conversion of a
//! hinge angle into world-space quads. The spine runs along the Y axis at
//! x = 0; every hinge rotates about it.

use macroquad::math::Vec3;

use super::hinge::HingeId;

pub const COVER_WIDTH: f32 = 2.0;
pub const COVER_HEIGHT: f32 = 3.0;
pub const COVER_DEPTH: f32 = 0.15;
pub const COVER_Z: f32 = -0.1;

pub const PAGE_WIDTH: f32 = 1.9;
pub const PAGE_HEIGHT: f32 = 2.8;
pub const PAGE_DEPTH: f32 = 0.02;
/// Z of page 0; each following page sits `PAGE_STACK_STEP` further along +Z
pub const PAGE_Z: f32 = -0.001;
pub const PAGE_STACK_STEP: f32 = 0.002;
/// Most pages a book can hold; the stack stays thinner than one cover
pub const MAX_PAGE_COUNT: usize = 64;

/// Photo planes float just off the page surface
pub const PHOTO_OFFSET: f32 = 0.011;

/// Aspect ratio of a page (and of the photo planes on it)
pub const PAGE_ASPECT: f32 = PAGE_WIDTH / PAGE_HEIGHT;

/// Which side of a page sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}

/// A box hanging off the spine, described in its hinge's local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    /// Centre of the slab relative to the pivot
    pub center: Vec3,
}

impl Slab {
    /// Slab for a hinge at angle 0
    pub fn for_hinge(id: HingeId) -> Self {
        match id {
            HingeId::FrontCover => Self {
                width: COVER_WIDTH,
                height: COVER_HEIGHT,
                depth: COVER_DEPTH,
                center: Vec3::new(-COVER_WIDTH * 0.5, 0.0, COVER_Z),
            },
            HingeId::BackCover => Self {
                width: COVER_WIDTH,
                height: COVER_HEIGHT,
                depth: COVER_DEPTH,
                center: Vec3::new(COVER_WIDTH * 0.5, 0.0, COVER_Z),
            },
            HingeId::Page(i) => Self {
                width: PAGE_WIDTH,
                height: PAGE_HEIGHT,
                depth: PAGE_DEPTH,
                center: Vec3::new(-PAGE_WIDTH * 0.5, 0.0, PAGE_Z + i as f32 * PAGE_STACK_STEP),
            },
        }
    }

    /// One face of the slab, rotated by `angle` about the spine
    pub fn face(&self, side: Side, angle: f32) -> Quad {
        let z = match side {
            Side::Front => self.center.z + self.depth * 0.5,
            Side::Back => self.center.z - self.depth * 0.5,
        };
        Quad::plane(self.center.x, self.center.y, z, self.width, self.height, side).rotated_y(angle)
    }

    /// The four thin sides joining the front and back faces
    pub fn edges(&self, angle: f32) -> [Quad; 4] {
        let front = self.face(Side::Front, angle).corners;
        let back = self.face(Side::Back, angle).corners;
        // Back faces are mirrored in X, so corner i of the front face sits
        // over corner BACK_OF[i] of the back face
        const BACK_OF: [usize; 4] = [1, 0, 3, 2];
        std::array::from_fn(|i| {
            let j = (i + 1) % 4;
            Quad {
                corners: [front[j], front[i], back[BACK_OF[i]], back[BACK_OF[j]]],
            }
        })
    }
}

/// Four corners in texture order: bottom-left, bottom-right, top-right,
/// top-left as seen from the side the face points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [Vec3; 4],
}

impl Quad {
    /// Axis-aligned rectangle in the XY plane. Back faces are mirrored in X
    /// so their texture reads correctly from behind.
    pub fn plane(cx: f32, cy: f32, z: f32, width: f32, height: f32, side: Side) -> Self {
        let (hw, hh) = (width * 0.5, height * 0.5);
        let (left, right) = match side {
            Side::Front => (cx - hw, cx + hw),
            Side::Back => (cx + hw, cx - hw),
        };
        Self {
            corners: [
                Vec3::new(left, cy - hh, z),
                Vec3::new(right, cy - hh, z),
                Vec3::new(right, cy + hh, z),
                Vec3::new(left, cy + hh, z),
            ],
        }
    }

    pub fn rotated_y(self, angle: f32) -> Self {
        Self {
            corners: self.corners.map(|p| rotate_y(p, angle)),
        }
    }

    pub fn map(self, f: impl Fn(Vec3) -> Vec3) -> Self {
        Self {
            corners: self.corners.map(f),
        }
    }
}

/// Rotate a point about the Y axis (right-handed)
pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x * c + p.z * s, p.y, -p.x * s + p.z * c)
}

/// Photo plane on one side of a page sheet, rotated with the page
pub fn photo_quad(sheet: usize, side: Side, angle: f32) -> Quad {
    let slab = Slab::for_hinge(HingeId::Page(sheet));
    let z = match side {
        Side::Front => slab.center.z + PHOTO_OFFSET,
        Side::Back => slab.center.z - PHOTO_OFFSET,
    };
    Quad::plane(slab.center.x, slab.center.y, z, PAGE_WIDTH, PAGE_HEIGHT, side).rotated_y(angle)
}
