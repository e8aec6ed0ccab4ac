//! Page-level junk detection.

use crate::config::ExtractConfig;

use super::rules::{JUNK_PAGE_INDICATORS, LEADER_DOT_ROW, TOC_TITLES};

/// Flags whole pages as non-content before heading search.
///
/// Two independent checks: a table-of-contents check (title phrase or
/// many leader-dot rows) and a generic junk check (references,
/// bibliography, index and similar vocabulary). A page failing either is
/// excluded from heading extraction.
#[derive(Debug, Clone)]
pub struct PageFilter {
    toc_row_threshold: usize,
    junk_indicator_threshold: usize,
}

impl PageFilter {
    /// Create a filter from the pipeline configuration.
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            toc_row_threshold: config.toc_row_threshold,
            junk_indicator_threshold: config.junk_indicator_threshold,
        }
    }

    /// Check whether a page's raw text reads as a table of contents.
    pub fn is_toc_page(&self, raw_text: &str) -> bool {
        if raw_text.is_empty() {
            return false;
        }

        let text = raw_text.to_lowercase();
        let has_toc_title = TOC_TITLES.iter().any(|phrase| text.contains(phrase));
        let leader_rows = LEADER_DOT_ROW.find_iter(&text).count();

        has_toc_title || leader_rows > self.toc_row_threshold
    }

    /// Check whether a page's raw text reads as reference/index junk.
    pub fn is_junk_page(&self, raw_text: &str) -> bool {
        if raw_text.is_empty() {
            return true;
        }

        let text = raw_text.to_lowercase();
        let matches = JUNK_PAGE_INDICATORS
            .iter()
            .filter(|indicator| text.contains(*indicator))
            .count();

        matches >= self.junk_indicator_threshold
    }

    /// Check whether a page is excluded from heading extraction.
    pub fn is_excluded(&self, raw_text: &str) -> bool {
        self.is_toc_page(raw_text) || self.is_junk_page(raw_text)
    }
}
