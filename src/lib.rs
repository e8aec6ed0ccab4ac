//! # pdfoutline
//!
//! Heuristic extraction of a structured outline (document title plus
//! hierarchical H1/H2/H3 headings with page numbers) from a PDF's raw
//! page content.
//!
//! The pipeline reconstructs text lines from positioned glyphs, decides
//! which lines are headings with an ordered set of detectors (lexical
//! patterns, font statistics, structural keywords), and assembles a
//! deduplicated, hierarchy-consistent outline.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> pdfoutline::Result<()> {
//!     let result = pdfoutline::extract_file("report.pdf")?;
//!
//!     println!("{}", result.title);
//!     for heading in &result.outline {
//!         println!("{} {} (p. {})", heading.level, heading.text, heading.page);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **Two page sources**: a full-fidelity glyph path (font sizes,
//!   boldness, positions) and a plain-text fallback used when the
//!   primary fails. The classification pipeline is agnostic to which
//!   one supplied its input.
//! - **Conservative detection**: table-of-contents and reference pages
//!   are excluded wholesale, form fields and boilerplate are rejected
//!   per block, and every emitted heading needs a positive signal.
//! - **Well-formed output**: the result is always a valid
//!   [`DocumentResult`], possibly with an empty outline.

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod layout;
pub mod model;
pub mod outline;
pub mod source;

pub use config::ExtractConfig;
pub use error::{Error, Result};
pub use extract::OutlineExtractor;
pub use model::{DocumentResult, Glyph, Heading, HeadingLevel, PageRecord, TextBlock};
pub use source::{GlyphSource, PageSource, PlainTextSource};

use std::path::Path;

/// Extract the outline of a PDF file with default configuration.
///
/// # Example
///
/// ```no_run
/// let result = pdfoutline::extract_file("document.pdf").unwrap();
/// println!("{} headings", result.outline.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<DocumentResult> {
    OutlineExtractor::new().extract_file(path)
}

/// Extract the outline of an in-memory PDF with default configuration.
pub fn extract_bytes(data: &[u8]) -> Result<DocumentResult> {
    OutlineExtractor::new().extract_bytes(data)
}

/// Extract the outline of a PDF file with a custom configuration.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::ExtractConfig;
///
/// let config = ExtractConfig::new().with_y_tolerance(4.0);
/// let result = pdfoutline::extract_file_with_config("document.pdf", config).unwrap();
/// # let _ = result;
/// ```
pub fn extract_file_with_config<P: AsRef<Path>>(
    path: P,
    config: ExtractConfig,
) -> Result<DocumentResult> {
    OutlineExtractor::with_config(config).extract_file(path)
}
