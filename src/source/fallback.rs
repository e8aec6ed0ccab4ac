//! Low-fidelity fallback page source backed by pdf-extract.
//!
//! Used when the glyph path fails: plain text only, no font signals.
//! Every block gets the default font size, bold = false, and its
//! sequential index as vertical position.

use std::fs;
use std::path::Path;

use crate::config::ExtractConfig;
use crate::error::Result;
use crate::layout::clean_text;
use crate::model::{PageRecord, TextBlock};

use super::PageSource;

/// Separator pdf-extract emits between pages.
const PAGE_SEPARATOR: char = '\u{0C}';

/// Fallback page source: per-page plain text with default font signals.
pub struct PlainTextSource {
    data: Vec<u8>,
    config: ExtractConfig,
}

impl PlainTextSource {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P, config: &ExtractConfig) -> Result<Self> {
        Ok(Self {
            data: fs::read(path)?,
            config: config.clone(),
        })
    }

    /// Use an in-memory byte slice.
    pub fn from_bytes(data: &[u8], config: &ExtractConfig) -> Self {
        Self {
            data: data.to_vec(),
            config: config.clone(),
        }
    }
}

impl PageSource for PlainTextSource {
    fn pages(&self) -> Result<Vec<PageRecord>> {
        let text = pdf_extract::extract_text_from_mem(&self.data)?;

        let mut records = Vec::new();
        for (i, page_text) in text.split(PAGE_SEPARATOR).enumerate() {
            let page_num = (i + 1) as u32;

            let mut blocks = Vec::new();
            for line in page_text.lines() {
                let cleaned = clean_text(line);
                if cleaned.is_empty() {
                    continue;
                }
                let index = blocks.len();
                let block =
                    TextBlock::new(cleaned, self.config.default_font_size, false, index as f32)
                        .at(page_num, index);
                blocks.push(block);
            }

            if blocks.is_empty() {
                log::debug!("skipping page {}: no extractable text", page_num);
                continue;
            }

            records.push(PageRecord::new(page_num, blocks, page_text.trim()));
        }

        Ok(records)
    }
}
