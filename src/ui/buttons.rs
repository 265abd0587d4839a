//! Previous/next page buttons and the overlay text

use macroquad::prelude::*;
use super::Rect;
use crate::input::Action;

/// Accent color for hovered buttons
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);
const BUTTON_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.85);
const ARROW_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

/// Side margin as a fraction of the screen width
const MARGIN_FRACTION: f32 = 0.06;
const MIN_SIZE: f32 = 40.0;
const MAX_SIZE: f32 = 72.0;

/// Round buttons on either side of the book
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavButtons {
    pub previous: Rect,
    pub next: Rect,
    pub visible: bool,
}

impl NavButtons {
    /// Lay the buttons out for a screen of `width` x `height`
    pub fn layout(width: f32, height: f32, visible: bool) -> Self {
        let size = (width.min(height) * 0.08).clamp(MIN_SIZE, MAX_SIZE);
        let margin = (width * MARGIN_FRACTION).max(size * 0.5 + 8.0);
        let cy = height * 0.5;
        Self {
            previous: Rect::centered(margin, cy, size),
            next: Rect::centered(width - margin, cy, size),
            visible,
        }
    }

    /// Which action, if any, a click at (x, y) triggers
    pub fn hit(&self, x: f32, y: f32) -> Option<Action> {
        if !self.visible {
            return None;
        }
        if self.previous.contains(x, y) {
            Some(Action::PreviousPage)
        } else if self.next.contains(x, y) {
            Some(Action::NextPage)
        } else {
            None
        }
    }

    pub fn draw(&self) {
        if !self.visible {
            return;
        }
        let (mx, my) = mouse_position();
        draw_arrow_button(self.previous, -1.0, self.previous.contains(mx, my));
        draw_arrow_button(self.next, 1.0, self.next.contains(mx, my));
    }
}

/// `dir` is -1 for a left arrow, 1 for a right arrow
fn draw_arrow_button(rect: Rect, dir: f32, hovered: bool) {
    let (cx, cy) = (rect.center_x(), rect.center_y());
    let color = if hovered { ACCENT_COLOR } else { BUTTON_COLOR };
    draw_circle(cx, cy, rect.w * 0.5, color);

    let inner = rect.pad(rect.w * 0.3);
    let half = inner.w * 0.5;
    draw_triangle(
        vec2(cx + dir * half, cy),
        vec2(cx - dir * half * 0.6, cy - half),
        vec2(cx - dir * half * 0.6, cy + half),
        ARROW_COLOR,
    );
}

/// Centered multi-line message (prompt or error)
pub fn draw_message(lines: &[&str], color: Color) {
    let font_size = 22.0;
    let line_height = font_size * 1.3;
    let top = screen_height() * 0.5 - line_height * lines.len() as f32 * 0.5;
    for (i, line) in lines.iter().enumerate() {
        let dims = measure_text(line, None, font_size as u16, 1.0);
        let x = ((screen_width() - dims.width) * 0.5).round();
        let y = (top + line_height * (i as f32 + 1.0)).round();
        draw_text(line, x, y, font_size, color);
    }
}

/// Small status line in the bottom-left corner
pub fn draw_status(text: &str) {
    let font_size = 16.0;
    draw_text(text, 10.0, (screen_height() - 10.0).round(), font_size, Color::new(1.0, 1.0, 1.0, 0.7));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_sit_either_side() {
        let b = NavButtons::layout(1280.0, 720.0, true);
        assert!(b.previous.center_x() < 640.0);
        assert!(b.next.center_x() > 640.0);
        assert!((b.next.center_y() - 360.0).abs() < 0.001);
        assert!(b.previous.right() <= b.next.x);
    }

    #[test]
    fn test_hit() {
        let b = NavButtons::layout(1280.0, 720.0, true);
        assert_eq!(b.hit(b.next.center_x(), b.next.center_y()), Some(Action::NextPage));
        assert_eq!(b.hit(b.previous.center_x(), b.previous.center_y()), Some(Action::PreviousPage));
        assert_eq!(b.hit(640.0, 360.0), None);
    }

    #[test]
    fn test_hidden_buttons_ignore_clicks() {
        let b = NavButtons::layout(1280.0, 720.0, false);
        assert_eq!(b.hit(b.next.center_x(), b.next.center_y()), None);
    }

    #[test]
    fn test_size_clamped_on_small_screens() {
        let b = NavButtons::layout(320.0, 240.0, true);
        assert_eq!(b.next.w, MIN_SIZE);
    }
}
