//! Page sources: the supplied PDF-parsing capability.
//!
//! The pipeline consumes [`PageRecord`](crate::model::PageRecord)s and
//! does not care who produced them. [`GlyphSource`] is the full-fidelity
//! path with font and position signals; [`PlainTextSource`] is the
//! low-fidelity fallback used when the primary path fails.

mod fallback;
mod glyph;

pub use fallback::PlainTextSource;
pub use glyph::GlyphSource;

use crate::error::Result;
use crate::model::PageRecord;

/// A capability that yields a document's content-bearing pages in order.
pub trait PageSource {
    /// Produce the page records for the whole document.
    fn pages(&self) -> Result<Vec<PageRecord>>;
}
