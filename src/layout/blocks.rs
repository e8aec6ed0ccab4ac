//! Condensing a glyph line into a text block.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::model::{Glyph, TextBlock};

static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s\-.,;:()!?'"’]"#).unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize text: NFC, strip characters outside the allow-list,
/// collapse whitespace runs, trim.
pub fn clean_text(text: &str) -> String {
    let normalized: String = text.nfc().collect();
    let stripped = DISALLOWED_CHARS.replace_all(&normalized, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// Build a text block from one line's ordered glyphs.
///
/// Font size is the mean of the glyph sizes that report one, with
/// `default_font_size` substituted when none do. The block is bold when
/// any glyph is. Returns `None` when the cleaned text is empty.
pub fn build_block(line: &[Glyph], default_font_size: f32) -> Option<TextBlock> {
    let raw: String = line.iter().map(|g| g.ch).collect();
    let text = clean_text(&raw);
    if text.is_empty() {
        return None;
    }

    let sizes: Vec<f32> = line.iter().filter_map(|g| g.font_size).collect();
    let font_size = if sizes.is_empty() {
        default_font_size
    } else {
        sizes.iter().sum::<f32>() / sizes.len() as f32
    };
    let bold = line.iter().any(|g| g.bold);
    let y = line.first().map(|g| g.y).unwrap_or_default();

    Some(TextBlock::new(text, font_size, bold, y))
}
