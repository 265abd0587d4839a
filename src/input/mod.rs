//! Input handling
//!
//! Keyboard and on-screen buttons map onto a small action set; page-turn
//! actions are forwarded to the flip controller.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
