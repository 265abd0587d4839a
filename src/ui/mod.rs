//! Immediate-mode overlay drawn on top of the book
//!
//! Rebuilt every frame from the window size; no retained widget state.

mod buttons;
mod rect;

pub use buttons::*;
pub use rect::*;
