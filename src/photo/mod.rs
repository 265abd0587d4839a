//! Photos on pages
//!
//! Choosing, decoding and fitting user photos onto the page sides.

mod album;
mod fit;
mod source;

pub use album::*;
pub use fit::CoverFit;
pub use source::*;
