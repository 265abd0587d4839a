//! Responsive book layout
//!
//! Scales the book with the window and turns it sideways in portrait.

use macroquad::math::Vec3;
use std::f32::consts::FRAC_PI_2;

/// Window size at which the book is drawn at scale 1.0
pub const REFERENCE_SIZE: f32 = 1200.0;
pub const MIN_SCALE: f32 = 0.4;
pub const MAX_SCALE: f32 = 0.9;

/// Transform applied to the whole book
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookLayout {
    pub scale: f32,
    /// Rotation about the view axis (Z)
    pub roll: f32,
}

impl BookLayout {
    /// Apply scale then roll to a book-space point
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let p = p * self.scale;
        let (s, c) = self.roll.sin_cos();
        Vec3::new(p.x * c - p.y * s, p.x * s + p.y * c, p.z)
    }
}

impl Default for BookLayout {
    fn default() -> Self {
        Self { scale: 1.0, roll: 0.0 }
    }
}

/// Layout for a window of the given size
pub fn layout_book(width: f32, height: f32) -> BookLayout {
    let scale = (width.min(height) / REFERENCE_SIZE).clamp(MIN_SCALE, MAX_SCALE);
    let roll = if height > width { -FRAC_PI_2 } else { 0.0 };
    BookLayout { scale, roll }
}
