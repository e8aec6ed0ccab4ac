//! Line and block reconstruction from raw glyphs.
//!
//! Glyphs arrive unordered from the page source; this module rebuilds
//! visual lines from their positions and condenses each line into a
//! [`TextBlock`](crate::model::TextBlock) with aggregate font attributes.

mod blocks;
mod lines;

pub use blocks::{build_block, clean_text};
pub use lines::LineAssembler;
