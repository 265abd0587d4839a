//! Hinges
//!
//! Every rotatable part of the book (front cover, each page, back cover)
//! is a hinge around the spine. A hinge only stores angles; geometry and
//! rendering read those angles each frame.

use std::f32::consts::PI;

/// Identifies one hinge of the book.
///
/// Hinge order is front cover, pages 0..N-1, back cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HingeId {
    FrontCover,
    Page(usize),
    BackCover,
}

impl HingeId {
    /// Short label for status output
    pub fn label(&self) -> String {
        match self {
            HingeId::FrontCover => "front cover".to_string(),
            HingeId::Page(i) => format!("page {}", i + 1),
            HingeId::BackCover => "back cover".to_string(),
        }
    }
}

/// A rotatable joint with a current and target angle (radians, about Y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hinge {
    pub angle: f32,
    pub target: f32,
}

impl Hinge {
    /// Front cover starts closed over the pages
    pub const FRONT_CLOSED: f32 = PI;
    /// Pages start stacked on the right of the spine
    pub const PAGE_CLOSED: f32 = PI;
    /// Back cover starts flat under the pages
    pub const BACK_CLOSED: f32 = 0.0;

    /// A hinge at rest at `angle`
    pub const fn at_rest(angle: f32) -> Self {
        Self { angle, target: angle }
    }

    /// Move a fraction `rate` of the remaining distance toward the target.
    ///
    /// Returns true when within `epsilon`, in which case the angle has been
    /// snapped onto the target exactly.
    pub fn step(&mut self, rate: f32, epsilon: f32) -> bool {
        self.angle += (self.target - self.angle) * rate;
        if (self.angle - self.target).abs() < epsilon {
            self.angle = self.target;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_is_proportional() {
        let mut h = Hinge { angle: PI, target: 0.0 };
        let done = h.step(0.06, 0.01);
        assert!(!done);
        assert!((h.angle - PI * 0.94).abs() < 1e-5, "angle={}", h.angle);
    }

    #[test]
    fn test_step_snaps_inside_epsilon() {
        let mut h = Hinge { angle: 0.005, target: 0.0 };
        assert!(h.step(0.06, 0.01));
        assert_eq!(h.angle, 0.0);
        assert_eq!(h.angle, h.target);
    }

    #[test]
    fn test_step_is_monotonic() {
        let mut h = Hinge { angle: 0.0, target: -PI };
        let mut last = h.angle;
        while !h.step(0.09, 0.01) {
            assert!(h.angle < last);
            assert!(h.angle >= -PI);
            last = h.angle;
        }
        assert_eq!(h.angle, -PI);
    }

    #[test]
    fn test_labels() {
        assert_eq!(HingeId::Page(0).label(), "page 1");
        assert_eq!(HingeId::BackCover.label(), "back cover");
    }
}
