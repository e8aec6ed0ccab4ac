//! Static rule tables for heading classification.
//!
//! All heuristic vocabulary and pattern knowledge lives here as fixed,
//! declarative lists evaluated in priority order by the detectors.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::HeadingLevel;

/// Lexical heading templates, tried in order; the first match decides
/// the level.
pub(crate) static HEADING_PATTERNS: Lazy<Vec<(Regex, HeadingLevel)>> = Lazy::new(|| {
    vec![
        // Numbered prefixes followed by a title-case-led word run.
        (
            Regex::new(r"^\d+\.\s+[A-Z][a-zA-Z0-9_ ]+$").unwrap(),
            HeadingLevel::H1,
        ),
        (
            Regex::new(r"^\d+\.\d+\s+[A-Z][a-zA-Z0-9_ ]+$").unwrap(),
            HeadingLevel::H2,
        ),
        (
            Regex::new(r"^\d+\.\d+\.\d+\s+[A-Z][a-zA-Z0-9_ ]+$").unwrap(),
            HeadingLevel::H3,
        ),
        // Chapter/Section/Part and appendix forms.
        (
            Regex::new(r"^(Chapter|Section|Part)\s+\d+[:.]?\s+[A-Z][a-zA-Z ]+$").unwrap(),
            HeadingLevel::H1,
        ),
        (
            Regex::new(r"^(Appendix|Annex)\s+[A-Z]?\d*[:.]?\s+[A-Z][a-zA-Z ]+$").unwrap(),
            HeadingLevel::H1,
        ),
        // Structural section names that stand alone.
        (
            Regex::new(r"^(Table of Contents|References|Bibliography|Index)$").unwrap(),
            HeadingLevel::H1,
        ),
    ]
});

/// Structural section names the keyword detector accepts.
pub(crate) const HEADING_KEYWORDS: &[&str] = &[
    "introduction",
    "background",
    "methodology",
    "results",
    "discussion",
    "conclusion",
    "recommendations",
    "abstract",
    "executive summary",
    "literature review",
    "findings",
    "limitations",
    "future work",
];

/// Vocabulary that disqualifies a block from being a heading.
pub(crate) const NON_HEADING_WORDS: &[&str] = &[
    "form",
    "application",
    "date",
    "name",
    "address",
    "phone",
    "email",
    "signature",
    "declaration",
    "particulars",
    "required",
    "closed",
    "parents",
    "guardians",
    "waiver",
    "page",
    "continued",
    "note:",
];

/// Headings whose full text is too generic to keep in the outline.
pub(crate) const GENERIC_TITLES: &[&str] = &["overview", "introduction", "conclusion"];

/// Vocabulary marking a page as table-of-contents/reference junk.
pub(crate) const JUNK_PAGE_INDICATORS: &[&str] = &[
    "table of contents",
    "contents",
    "references",
    "bibliography",
    "index",
    "acknowledgements",
    "revision history",
];

/// Phrases that title a table-of-contents page.
pub(crate) const TOC_TITLES: &[&str] = &["table of contents", "contents"];

/// Header/footer vocabulary excluded from title candidates.
pub(crate) const HEADER_FOOTER_INDICATORS: &[&str] = &[
    "page",
    "confidential",
    "copyright",
    "©",
    "proprietary",
    "draft",
    "version",
    "date:",
];

/// Form-content vocabulary excluded from title candidates.
pub(crate) const FORM_CONTENT_WORDS: &[&str] =
    &["rsvp:", "signature", "form", "application", "required"];

/// Leading numbered form-field label, e.g. "3. Name".
pub(crate) static FORM_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.?\s*(name|date|designation|whether|amount|address)").unwrap());

/// Leading "page N" / "pp. N" reference.
pub(crate) static PAGE_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(page|pp?\.?)\s*\d+").unwrap());

/// Patterns marking a single line as a table-of-contents entry.
pub(crate) static TOC_ENTRY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\.{3,}\s*\d+$").unwrap(),
        Regex::new(r"^\d+\s+[A-Z]").unwrap(),
        Regex::new(r"^[A-Z]\s+\d+$").unwrap(),
    ]
});

/// A leader-dot row anywhere in a page's raw text.
pub(crate) static LEADER_DOT_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3,}\s*\d+").unwrap());

/// Whitespace runs inside heading text.
pub(crate) static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Trailing leader dots plus page number.
pub(crate) static TRAILING_DOTTED_PAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\.{3,}\s*\d+$").unwrap());

/// Bare trailing page number.
pub(crate) static TRAILING_PAGE_NUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\d+$").unwrap());

/// `N.N`-style numbering prefix, preserved during cleanup.
pub(crate) static NUMBERED_SUBLEVEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d").unwrap());

/// Leading bare number, stripped during cleanup.
pub(crate) static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[\s.)]*").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_level(text: &str) -> Option<HeadingLevel> {
        HEADING_PATTERNS
            .iter()
            .find(|(re, _)| re.is_match(text))
            .map(|(_, level)| *level)
    }

    #[test]
    fn test_numbered_pattern_levels() {
        assert_eq!(pattern_level("1. Introduction"), Some(HeadingLevel::H1));
        assert_eq!(pattern_level("1.2 Background Research"), Some(HeadingLevel::H2));
        assert_eq!(pattern_level("2.4.1 Sampling Method"), Some(HeadingLevel::H3));
    }

    #[test]
    fn test_chapter_and_appendix_patterns() {
        assert_eq!(pattern_level("Chapter 3: Methods"), Some(HeadingLevel::H1));
        assert_eq!(pattern_level("Part 2 Planning Ahead"), Some(HeadingLevel::H1));
        assert_eq!(pattern_level("Appendix A: Data Tables"), Some(HeadingLevel::H1));
    }

    #[test]
    fn test_standalone_section_names() {
        assert_eq!(pattern_level("References"), Some(HeadingLevel::H1));
        assert_eq!(pattern_level("Table of Contents"), Some(HeadingLevel::H1));
        assert_eq!(pattern_level("reference list"), None);
    }

    #[test]
    fn test_non_matches() {
        assert_eq!(pattern_level("just a sentence here"), None);
        assert_eq!(pattern_level("1. lowercase start"), None);
        assert_eq!(pattern_level("3.14159 approximately"), None);
    }

    #[test]
    fn test_toc_entry_patterns() {
        assert!(TOC_ENTRY_PATTERNS.iter().any(|re| re.is_match("Intro.......3")));
        assert!(TOC_ENTRY_PATTERNS.iter().any(|re| re.is_match("12 Appendices")));
        assert!(!TOC_ENTRY_PATTERNS.iter().any(|re| re.is_match("Future Work")));
    }
}
