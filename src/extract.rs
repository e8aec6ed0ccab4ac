//! The per-document extraction pipeline.

use std::path::Path;

use crate::classify::{HeadingClassifier, PageFilter, TitleSelector};
use crate::config::ExtractConfig;
use crate::error::Result;
use crate::model::{DocumentResult, PageRecord};
use crate::outline::assemble_outline;
use crate::source::{GlyphSource, PageSource, PlainTextSource};

/// Extracts a title and heading outline from one document.
///
/// Processing is synchronous and single-threaded per document; separate
/// documents can be handled by independent extractor instances since no
/// state is shared between calls.
pub struct OutlineExtractor {
    config: ExtractConfig,
    page_filter: PageFilter,
    classifier: HeadingClassifier,
    title_selector: TitleSelector,
}

impl OutlineExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self::with_config(ExtractConfig::default())
    }

    /// Create an extractor with a custom configuration.
    pub fn with_config(config: ExtractConfig) -> Self {
        Self {
            page_filter: PageFilter::new(&config),
            classifier: HeadingClassifier::new(&config),
            title_selector: TitleSelector::new(&config),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract the outline of a PDF file.
    ///
    /// Tries the full-fidelity glyph path first and switches to the
    /// plain-text fallback when it fails.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<DocumentResult> {
        let path = path.as_ref();
        match GlyphSource::open(path, &self.config).and_then(|s| s.pages()) {
            Ok(pages) => Ok(self.extract_from_pages(pages)),
            Err(err) => {
                log::warn!(
                    "glyph extraction failed for {}: {}; falling back to plain text",
                    path.display(),
                    err
                );
                self.extract_from_source(&PlainTextSource::open(path, &self.config)?)
            }
        }
    }

    /// Extract the outline of an in-memory PDF.
    pub fn extract_bytes(&self, data: &[u8]) -> Result<DocumentResult> {
        match GlyphSource::from_bytes(data, &self.config).and_then(|s| s.pages()) {
            Ok(pages) => Ok(self.extract_from_pages(pages)),
            Err(err) => {
                log::warn!("glyph extraction failed: {}; falling back to plain text", err);
                self.extract_from_source(&PlainTextSource::from_bytes(data, &self.config))
            }
        }
    }

    /// Extract the outline from any page source.
    pub fn extract_from_source<S: PageSource>(&self, source: &S) -> Result<DocumentResult> {
        Ok(self.extract_from_pages(source.pages()?))
    }

    /// Run the pipeline over already-materialized page records.
    ///
    /// The title is taken from the first page whether or not that page is
    /// later excluded from heading search.
    pub fn extract_from_pages(&self, pages: Vec<PageRecord>) -> DocumentResult {
        let title = self.title_selector.select(&pages);

        let mut candidates = Vec::new();
        for page in &pages {
            if self.page_filter.is_excluded(&page.raw_text) {
                log::debug!("skipping page {}: table of contents or junk", page.number);
                continue;
            }
            candidates.extend(self.classifier.detect(page));
        }

        DocumentResult::new(title, assemble_outline(candidates))
    }
}

impl Default for OutlineExtractor {
    fn default() -> Self {
        Self::new()
    }
}
