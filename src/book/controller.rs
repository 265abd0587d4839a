//! Page Flip Controller
//!
//! Drives the book's hinges toward their targets one at a time.
//!
//! - `request_forward` / `request_backward` pick the next hinge to move and
//!   set its target. They are dropped while a transition is in flight.
//! - `advance` is called once per frame by the render loop and moves the
//!   active hinge a fixed fraction of its remaining distance (ease-out).
//!
//! The controller never schedules its own ticks.

use std::f32::consts::PI;

use super::hinge::{Hinge, HingeId};

/// Constants the embedding application supplies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipConfig {
    /// Number of pages between the covers (N)
    pub page_count: usize,
    /// Fraction of the remaining angle covered per tick (k)
    pub speed: f32,
    /// Distance at which a hinge snaps onto its target (radians)
    pub epsilon: f32,
    /// Back cover must be open wider than this (radians) to be closed again
    pub reopen_threshold: f32,
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self {
            page_count: 10,
            speed: 0.06,
            epsilon: 0.01,
            reopen_threshold: 1.0,
        }
    }
}

/// Direction of travel through the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// The transition currently animating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    FrontCover,
    /// Page hinge index (always equal to the cursor while running)
    Page(usize),
    BackCover,
}

impl Transition {
    pub fn hinge_id(&self) -> HingeId {
        match *self {
            Transition::FrontCover => HingeId::FrontCover,
            Transition::Page(i) => HingeId::Page(i),
            Transition::BackCover => HingeId::BackCover,
        }
    }
}

/// Emitted by `advance` on the tick a transition completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipEvent {
    pub hinge: HingeId,
    pub direction: Direction,
}

/// Open/close animation state for a book of covers and pages.
#[derive(Debug, Clone)]
pub struct PageFlipController {
    config: FlipConfig,
    front: Hinge,
    pages: Vec<Hinge>,
    back: Hinge,
    active: Option<Transition>,
    direction: Direction,
    /// Pages flipped past the front cover, in 0..=N
    cursor: usize,
    cover_open: bool,
}

impl PageFlipController {
    /// Create a closed book
    pub fn new(config: FlipConfig) -> Self {
        Self {
            config,
            front: Hinge::at_rest(Hinge::FRONT_CLOSED),
            pages: vec![Hinge::at_rest(Hinge::PAGE_CLOSED); config.page_count],
            back: Hinge::at_rest(Hinge::BACK_CLOSED),
            active: None,
            direction: Direction::Forward,
            cursor: 0,
            cover_open: false,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[allow(dead_code)]
    pub fn active(&self) -> Option<Transition> {
        self.active
    }

    #[allow(dead_code)]
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    #[allow(dead_code)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cover_open(&self) -> bool {
        self.cover_open
    }

    /// Look up a hinge. Page indices past the end return None.
    #[allow(dead_code)]
    pub fn hinge(&self, id: HingeId) -> Option<&Hinge> {
        match id {
            HingeId::FrontCover => Some(&self.front),
            HingeId::Page(i) => self.pages.get(i),
            HingeId::BackCover => Some(&self.back),
        }
    }

    /// Current angle of a hinge (0.0 for an unknown page)
    #[allow(dead_code)]
    pub fn angle(&self, id: HingeId) -> f32 {
        self.hinge(id).map(|h| h.angle).unwrap_or(0.0)
    }

    /// All hinges in book order: front cover, pages, back cover
    pub fn hinges(&self) -> impl Iterator<Item = (HingeId, &Hinge)> + '_ {
        std::iter::once((HingeId::FrontCover, &self.front))
            .chain(self.pages.iter().enumerate().map(|(i, h)| (HingeId::Page(i), h)))
            .chain(std::iter::once((HingeId::BackCover, &self.back)))
    }

    /// "Next" input. Opens the cover, then turns pages, then closes the back.
    pub fn request_forward(&mut self) {
        if self.active.is_some() {
            return;
        }
        self.direction = Direction::Forward;

        if !self.cover_open {
            self.begin(Transition::FrontCover, 0.0);
        } else if self.cursor < self.pages.len() {
            self.begin(Transition::Page(self.cursor), 0.0);
        } else {
            self.begin(Transition::BackCover, -PI);
        }
    }

    /// "Previous" input. Reopens the back cover, then turns pages back, then
    /// closes the front cover. Does nothing at the very start.
    pub fn request_backward(&mut self) {
        if self.active.is_some() {
            return;
        }
        self.direction = Direction::Backward;

        if self.cursor == self.pages.len() && self.back.angle.abs() > self.config.reopen_threshold {
            self.begin(Transition::BackCover, 0.0);
        } else if self.cursor > 0 {
            // Cursor moves before the animation runs
            self.cursor -= 1;
            self.begin(Transition::Page(self.cursor), PI);
        } else if self.cover_open {
            self.begin(Transition::FrontCover, PI);
        }
    }

    /// Per-frame update. Convergence is per tick, so `_dt` only keeps the
    /// render loop contract uniform.
    pub fn advance(&mut self, _dt: f32) -> Option<FlipEvent> {
        let transition = self.active?;
        let (speed, epsilon) = (self.config.speed, self.config.epsilon);

        let done = match self.hinge_mut(transition.hinge_id()) {
            Some(hinge) => hinge.step(speed, epsilon),
            // Unreachable for a well-formed transition; drop it rather than stall
            None => true,
        };
        if !done {
            return None;
        }

        match transition {
            Transition::FrontCover => {
                self.cover_open = self.direction == Direction::Forward;
            }
            Transition::Page(_) => {
                if self.direction == Direction::Forward {
                    self.cursor += 1;
                }
            }
            Transition::BackCover => {}
        }
        self.active = None;

        Some(FlipEvent {
            hinge: transition.hinge_id(),
            direction: self.direction,
        })
    }

    fn begin(&mut self, transition: Transition, target: f32) {
        if let Some(hinge) = self.hinge_mut(transition.hinge_id()) {
            hinge.target = target;
            self.active = Some(transition);
        }
    }

    fn hinge_mut(&mut self, id: HingeId) -> Option<&mut Hinge> {
        match id {
            HingeId::FrontCover => Some(&mut self.front),
            HingeId::Page(i) => self.pages.get_mut(i),
            HingeId::BackCover => Some(&mut self.back),
        }
    }
}

impl Default for PageFlipController {
    fn default() -> Self {
        Self::new(FlipConfig::default())
    }
}
