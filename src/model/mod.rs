//! Data model for outline extraction.
//!
//! The types here form the pipeline's currency: glyphs come in from a
//! page source, become text blocks grouped into page records, and leave
//! as headings in a document result.

mod block;
mod outline;

pub use block::{is_bold_font_name, Glyph, PageRecord, TextBlock};
pub use outline::{DocumentResult, Heading, HeadingLevel};
