//! The book: hinges, the flip state machine, and geometry
//!
//! The controller owns all animation state; geometry and layout are pure
//! functions of the hinge angles and window size.

mod controller;
mod geometry;
mod hinge;
mod layout;

pub use controller::*;
pub use geometry::*;
pub use hinge::*;
pub use layout::*;
