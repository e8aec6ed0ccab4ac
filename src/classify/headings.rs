//! The multi-signal heading detection engine.

use crate::config::ExtractConfig;
use crate::model::{Heading, HeadingLevel, PageRecord, TextBlock};

use super::rules::{
    FORM_FIELD, HEADING_KEYWORDS, HEADING_PATTERNS, LEADING_NUMBER, NON_HEADING_WORDS,
    NUMBERED_SUBLEVEL, PAGE_REF, TOC_ENTRY_PATTERNS, TRAILING_DOTTED_PAGE, TRAILING_PAGE_NUM,
    WHITESPACE_RUN,
};

/// Classifies a page's text blocks into heading candidates.
///
/// Three detectors run in strict priority order per block: lexical
/// patterns, then font/format signal, then keyword signal. The first
/// that fires wins; a rejection gate short-circuits all of them.
#[derive(Debug, Clone)]
pub struct HeadingClassifier {
    config: ExtractConfig,
}

impl HeadingClassifier {
    /// Create a classifier from the pipeline configuration.
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Detect headings among a page's blocks.
    pub fn detect(&self, page: &PageRecord) -> Vec<Heading> {
        let mut headings = Vec::new();
        if page.blocks.is_empty() {
            return headings;
        }

        let sizes: Vec<f32> = page.blocks.iter().map(|b| b.font_size).collect();
        let mean_size = sizes.iter().sum::<f32>() / sizes.len() as f32;
        let max_size = sizes.iter().cloned().fold(f32::MIN, f32::max);
        let size_threshold = mean_size * self.config.heading_size_ratio;

        for block in &page.blocks {
            let text = block.text.as_str();
            let chars = block.char_count();
            if chars < self.config.min_heading_chars || chars > self.config.max_heading_chars {
                continue;
            }
            if contains_non_heading_indicators(text) {
                continue;
            }

            // Lexical patterns, strictest and highest priority.
            if let Some(level) = match_heading_pattern(text) {
                headings.push(self.heading(level, text, page.number, block));
                continue;
            }

            // Font size and formatting, only when the signal is clear.
            if block.font_size >= size_threshold && block.bold && looks_like_proper_heading(text) {
                let level = if block.font_size >= max_size * self.config.h1_max_size_ratio {
                    HeadingLevel::H1
                } else {
                    HeadingLevel::H2
                };
                headings.push(self.heading(level, text, page.number, block));
                continue;
            }

            // Structural keywords, most permissive.
            if contains_heading_keyword(text)
                && !is_toc_entry(text)
                && block.font_size > mean_size * self.config.keyword_size_ratio
            {
                headings.push(self.heading(HeadingLevel::H2, text, page.number, block));
            }
        }

        headings
    }

    fn heading(&self, level: HeadingLevel, text: &str, page: u32, block: &TextBlock) -> Heading {
        Heading::new(level, clean_heading_text(text), page, block.index)
    }
}

/// Match the lexical heading templates, first hit wins.
fn match_heading_pattern(text: &str) -> Option<HeadingLevel> {
    HEADING_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, level)| *level)
}

/// Rejection gate: form fields, boilerplate vocabulary, contact strings,
/// and page references disqualify a block outright.
fn contains_non_heading_indicators(text: &str) -> bool {
    let lower = text.to_lowercase();

    if FORM_FIELD.is_match(&lower) {
        return true;
    }
    if NON_HEADING_WORDS.iter().any(|word| lower.contains(word)) {
        return true;
    }
    if text.contains('@') || lower.contains("www.") || lower.contains(".com") {
        return true;
    }
    PAGE_REF.is_match(&lower)
}

/// Check the formatting shape the font detector requires: title case, or
/// short and fully upper-case, with no clause punctuation and no
/// sentence-like ending.
fn looks_like_proper_heading(text: &str) -> bool {
    let short_caps = is_all_uppercase(text) && text.chars().count() < 30;
    if !(is_title_case(text) || short_caps) {
        return false;
    }
    if text.contains(';') || text.contains(',') {
        return false;
    }
    !(text.ends_with('.') || text.ends_with(':') || text.ends_with('-') || text.ends_with('_'))
}

/// Case-insensitive structural keyword containment.
fn contains_heading_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    HEADING_KEYWORDS.iter().any(|word| lower.contains(word))
}

/// Check whether a line reads as a table-of-contents entry.
fn is_toc_entry(text: &str) -> bool {
    TOC_ENTRY_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}

/// Title case in the `str.istitle` sense: every cased run starts with an
/// uppercase letter and continues lowercase.
fn is_title_case(text: &str) -> bool {
    let mut prev_cased = false;
    let mut has_cased = false;

    for ch in text.chars() {
        if ch.is_uppercase() {
            if prev_cased {
                return false;
            }
            has_cased = true;
            prev_cased = true;
        } else if ch.is_lowercase() {
            if !prev_cased {
                return false;
            }
            has_cased = true;
            prev_cased = true;
        } else {
            prev_cased = false;
        }
    }

    has_cased
}

/// True when every alphabetic character is uppercase (and one exists).
fn is_all_uppercase(text: &str) -> bool {
    let mut has_alpha = false;
    for ch in text.chars().filter(|c| c.is_alphabetic()) {
        if !ch.is_uppercase() {
            return false;
        }
        has_alpha = true;
    }
    has_alpha
}

/// Normalize heading text for output.
///
/// Collapses whitespace, strips trailing leader-dot page references and
/// bare trailing page numbers, and drops a leading bare number unless it
/// is `N.N`-style numbering, which is preserved.
pub fn clean_heading_text(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let no_dotted = TRAILING_DOTTED_PAGE.replace(&collapsed, "");
    let no_page = TRAILING_PAGE_NUM.replace(&no_dotted, "");

    let stripped = if NUMBERED_SUBLEVEL.is_match(&no_page) {
        no_page.to_string()
    } else {
        LEADING_NUMBER.replace(&no_page, "").to_string()
    };

    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextBlock;

    fn page_with(blocks: Vec<TextBlock>) -> PageRecord {
        let blocks = blocks
            .into_iter()
            .enumerate()
            .map(|(i, b)| b.at(1, i))
            .collect();
        PageRecord::new(1, blocks, "body text for statistics")
    }

    fn classifier() -> HeadingClassifier {
        HeadingClassifier::new(&ExtractConfig::default())
    }

    #[test]
    fn test_numbered_heading_is_h1_at_any_size() {
        let page = page_with(vec![
            TextBlock::new("1. Introduction", 10.0, false, 700.0),
            TextBlock::new("ordinary paragraph text follows on", 10.0, false, 690.0),
        ]);

        let headings = classifier().detect(&page);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].level, HeadingLevel::H1);
        assert_eq!(headings[0].text, "Introduction");
    }

    #[test]
    fn test_sub_numbered_heading_keeps_prefix() {
        let page = page_with(vec![TextBlock::new("1.2 Background Research", 10.0, false, 700.0)]);

        let headings = classifier().detect(&page);
        assert_eq!(headings[0].level, HeadingLevel::H2);
        assert_eq!(headings[0].text, "1.2 Background Research");
    }

    #[test]
    fn test_font_detector_levels() {
        let mut blocks = vec![
            TextBlock::new("Project Overview", 24.0, true, 720.0),
            TextBlock::new("Delivery Milestones", 20.0, true, 680.0),
        ];
        for i in 0..6 {
            let text = format!("plain body sentence number {} in the text", i);
            blocks.push(TextBlock::new(text, 10.0, false, 660.0 - i as f32 * 14.0));
        }
        // Mean size 13, so the 1.5x cut is 19.5; max is 24, 0.9x cut 21.6.
        let page = page_with(blocks);

        let headings = classifier().detect(&page);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].level, HeadingLevel::H1);
        assert_eq!(headings[0].text, "Project Overview");
        assert_eq!(headings[1].level, HeadingLevel::H2);
        assert_eq!(headings[1].text, "Delivery Milestones");
    }

    #[test]
    fn test_font_detector_requires_bold() {
        let page = page_with(vec![
            TextBlock::new("Project Overview", 24.0, false, 720.0),
            TextBlock::new("plain body sentence one for the mean", 10.0, false, 640.0),
            TextBlock::new("plain body sentence two for the mean", 10.0, false, 620.0),
            TextBlock::new("plain body sentence ten for the mean", 10.0, false, 600.0),
        ]);

        assert!(classifier().detect(&page).is_empty());
    }

    #[test]
    fn test_form_field_rejected_regardless_of_size() {
        let page = page_with(vec![
            TextBlock::new("Name ____________", 30.0, true, 720.0),
            TextBlock::new("plain body text at regular size here", 12.0, false, 640.0),
        ]);

        assert!(classifier().detect(&page).is_empty());
    }

    #[test]
    fn test_keyword_detector_yields_h2() {
        // Mean size 11.33, so the 1.2x keyword cut is 13.6.
        let page = page_with(vec![
            TextBlock::new("Research Methodology Applied", 14.0, false, 720.0),
            TextBlock::new("plain body text at regular size one", 10.0, false, 640.0),
            TextBlock::new("plain body text at regular size two", 10.0, false, 620.0),
        ]);

        let headings = classifier().detect(&page);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].level, HeadingLevel::H2);
    }

    #[test]
    fn test_length_gate() {
        let long = "A ".repeat(80);
        let page = page_with(vec![
            TextBlock::new("Hi", 24.0, true, 720.0),
            TextBlock::new(long, 24.0, true, 700.0),
        ]);

        assert!(classifier().detect(&page).is_empty());
    }

    #[test]
    fn test_title_case() {
        assert!(is_title_case("Project Overview"));
        assert!(is_title_case("1.2 Background Research"));
        assert!(!is_title_case("Project overview"));
        assert!(!is_title_case("PROJECT OVERVIEW"));
    }

    #[test]
    fn test_clean_heading_text_strips_toc_tails() {
        assert_eq!(clean_heading_text("Scope.......12"), "Scope");
        assert_eq!(clean_heading_text("Delivery Plan 7"), "Delivery Plan");
    }

    #[test]
    fn test_clean_heading_text_idempotent() {
        let once = clean_heading_text("3)  Risk   Assessment .... 9");
        assert_eq!(clean_heading_text(&once), once);
    }
}
