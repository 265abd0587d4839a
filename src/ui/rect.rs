//! Rectangle type for overlay layout

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` centred on a point
    pub fn centered(cx: f32, cy: f32, size: f32) -> Self {
        Self::new(cx - size * 0.5, cy - size * 0.5, size, size)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
        // Right/bottom edges are exclusive
        assert!(!r.contains(110.0, 40.0));
    }

    #[test]
    fn test_centered() {
        let r = Rect::centered(100.0, 50.0, 20.0);
        assert_eq!(r, Rect::new(90.0, 40.0, 20.0, 20.0));
        assert!((r.center_x() - 100.0).abs() < 0.001);
        assert!((r.center_y() - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_pad_never_negative() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).pad(8.0);
        assert_eq!(r.w, 0.0);
        assert_eq!(r.h, 0.0);
    }
}
