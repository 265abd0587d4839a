//! Cover fit
//!
//! Computes the UV transform that makes a photo fill a page the way CSS
//! `object-fit: cover` does: scale to cover the whole page, crop the
//! overflow evenly from both sides. Landscape photos are turned a quarter
//! turn first so they use the page's long edge.

use std::f32::consts::FRAC_PI_2;

/// UV transform for one photo on one page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverFit {
    /// Rotation about the UV centre (radians)
    pub rotation: f32,
    /// Fraction of the texture visible along U and V
    pub repeat: (f32, f32),
}

impl CoverFit {
    pub const IDENTITY: CoverFit = CoverFit {
        rotation: 0.0,
        repeat: (1.0, 1.0),
    };

    /// Fit an image of `width` x `height` pixels onto a plane of aspect
    /// `page_aspect` (width / height).
    pub fn compute(width: u32, height: u32, page_aspect: f32) -> Self {
        if width == 0 || height == 0 {
            return Self::IDENTITY;
        }
        let (w, h) = (width as f32, height as f32);
        let landscape = width > height;

        let image_aspect = if landscape { h / w } else { w / h };
        let repeat = if image_aspect > page_aspect {
            (page_aspect / image_aspect, 1.0)
        } else {
            (1.0, image_aspect / page_aspect)
        };

        Self {
            rotation: if landscape { FRAC_PI_2 } else { 0.0 },
            repeat,
        }
    }

    /// Map a plane UV (origin bottom-left, V up) to a texture UV.
    ///
    /// Rotation and repeat pivot on (0.5, 0.5); there is no offset.
    pub fn transform_uv(&self, u: f32, v: f32) -> (f32, f32) {
        let (s, c) = self.rotation.sin_cos();
        let (du, dv) = (u - 0.5, v - 0.5);
        let (rx, ry) = self.repeat;
        (
            rx * (c * du + s * dv) + 0.5,
            ry * (-s * du + c * dv) + 0.5,
        )
    }
}

impl Default for CoverFit {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::PAGE_ASPECT;

    #[test]
    fn test_square_photo_crops_sides() {
        let fit = CoverFit::compute(1000, 1000, PAGE_ASPECT);
        assert_eq!(fit.rotation, 0.0);
        assert!((fit.repeat.0 - 1.9 / 2.8).abs() < 1e-5, "{:?}", fit.repeat);
        assert_eq!(fit.repeat.1, 1.0);
    }

    #[test]
    fn test_tall_photo_crops_top_and_bottom() {
        // 1:3 is narrower than the page
        let fit = CoverFit::compute(500, 1500, PAGE_ASPECT);
        assert_eq!(fit.repeat.0, 1.0);
        assert!((fit.repeat.1 - (1.0 / 3.0) / PAGE_ASPECT).abs() < 1e-5);
    }

    #[test]
    fn test_landscape_rotates() {
        let fit = CoverFit::compute(4000, 3000, PAGE_ASPECT);
        assert_eq!(fit.rotation, FRAC_PI_2);
        // Turned 3:4 is wider than the page, so U is cropped
        assert!((fit.repeat.0 - PAGE_ASPECT / 0.75).abs() < 1e-5);
        assert_eq!(fit.repeat.1, 1.0);
    }

    #[test]
    fn test_exact_page_aspect_is_identity_repeat() {
        let fit = CoverFit::compute(190, 280, PAGE_ASPECT);
        assert!((fit.repeat.0 - 1.0).abs() < 1e-5);
        assert!((fit.repeat.1 - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_transform_keeps_centre() {
        let fit = CoverFit::compute(4000, 3000, PAGE_ASPECT);
        let (u, v) = fit.transform_uv(0.5, 0.5);
        assert!((u - 0.5).abs() < 1e-6 && (v - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_transform_crops_evenly() {
        let fit = CoverFit { rotation: 0.0, repeat: (0.5, 1.0) };
        let (u0, _) = fit.transform_uv(0.0, 0.0);
        let (u1, _) = fit.transform_uv(1.0, 0.0);
        assert!((u0 - 0.25).abs() < 1e-6);
        assert!((u1 - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_empty_image() {
        assert_eq!(CoverFit::compute(0, 10, PAGE_ASPECT), CoverFit::IDENTITY);
    }
}
