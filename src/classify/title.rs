//! Best-guess title selection from the first page.

use std::cmp::Ordering;

use crate::config::ExtractConfig;
use crate::model::{PageRecord, TextBlock};

use super::rules::{FORM_CONTENT_WORDS, FORM_FIELD, HEADER_FOOTER_INDICATORS};

/// Placeholder returned when no candidate qualifies.
pub const UNTITLED: &str = "Untitled Document";

/// Picks the most title-like block from a document's first page.
///
/// Candidates come from the page's leading blocks; headers, footers, and
/// form content are discarded, the rest must reach the configured
/// font-size percentile, and survivors rank by size, boldness, then
/// length. Falls back to the first non-empty raw-text line.
#[derive(Debug, Clone)]
pub struct TitleSelector {
    block_count: usize,
    size_percentile: u8,
}

impl TitleSelector {
    /// Create a selector from the pipeline configuration.
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            block_count: config.title_block_count,
            size_percentile: config.title_size_percentile,
        }
    }

    /// Select a title from the document's pages.
    pub fn select(&self, pages: &[PageRecord]) -> String {
        let first = match pages.first() {
            Some(page) => page,
            None => return UNTITLED.to_string(),
        };

        let window = &first.blocks[..self.block_count.min(first.blocks.len())];
        let mut candidates: Vec<&TextBlock> = window
            .iter()
            .filter(|block| {
                block.char_count() > 5
                    && !looks_like_header_footer(&block.text)
                    && !looks_like_form_content(&block.text)
            })
            .collect();

        if !candidates.is_empty() {
            let threshold = percentile(
                candidates.iter().map(|b| b.font_size).collect(),
                self.size_percentile,
            );
            candidates.retain(|block| block.font_size >= threshold);
            candidates.sort_by(|a, b| {
                b.font_size
                    .partial_cmp(&a.font_size)
                    .unwrap_or(Ordering::Equal)
                    .then(b.bold.cmp(&a.bold))
                    .then(b.char_count().cmp(&a.char_count()))
            });
            if let Some(top) = candidates.first() {
                return top.text.clone();
            }
        }

        first
            .raw_text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(String::from)
            .unwrap_or_else(|| UNTITLED.to_string())
    }
}

/// Check for running header/footer vocabulary.
fn looks_like_header_footer(text: &str) -> bool {
    let lower = text.to_lowercase();
    HEADER_FOOTER_INDICATORS
        .iter()
        .any(|indicator| lower.contains(indicator))
}

/// Check for form-content vocabulary or a numbered form-field label.
fn looks_like_form_content(text: &str) -> bool {
    let lower = text.to_lowercase();
    FORM_FIELD.is_match(&lower) || FORM_CONTENT_WORDS.iter().any(|word| lower.contains(word))
}

/// Nearest-rank percentile of an unsorted sample.
fn percentile(mut values: Vec<f32>, p: u8) -> f32 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let rank = (p as f32 / 100.0 * values.len() as f32).ceil() as usize;
    values[rank.clamp(1, values.len()) - 1]
}
