//! Integration tests for heading classification.

use pdfoutline::classify::HeadingClassifier;
use pdfoutline::{ExtractConfig, HeadingLevel, PageRecord, TextBlock};

/// A page where body text keeps the mean font size at 10.
fn page(number: u32, specials: &[(&str, f32, bool)]) -> PageRecord {
    let mut blocks: Vec<TextBlock> = specials
        .iter()
        .map(|(text, size, bold)| TextBlock::new(*text, *size, *bold, 0.0))
        .collect();
    for i in 0..8 {
        let text = format!("filler sentence {} keeps the body statistics honest", i);
        blocks.push(TextBlock::new(text, 10.0, false, 0.0));
    }
    let blocks = blocks
        .into_iter()
        .enumerate()
        .map(|(i, b)| b.at(number, i))
        .collect();
    PageRecord::new(number, blocks, "body text")
}

fn classify(specials: &[(&str, f32, bool)]) -> Vec<(HeadingLevel, String)> {
    let classifier = HeadingClassifier::new(&ExtractConfig::default());
    classifier
        .detect(&page(1, specials))
        .into_iter()
        .map(|h| (h.level, h.text))
        .collect()
}

#[test]
fn numbered_heading_is_h1_regardless_of_font() {
    // Small and unstyled, but the lexical pattern is decisive.
    let headings = classify(&[("1. Introduction", 10.0, false)]);
    assert_eq!(headings, vec![(HeadingLevel::H1, "Introduction".to_string())]);
}

#[test]
fn sub_numbered_heading_is_h2_and_keeps_prefix() {
    let headings = classify(&[("1.2 Background Research", 10.0, false)]);
    assert_eq!(
        headings,
        vec![(HeadingLevel::H2, "1.2 Background Research".to_string())]
    );
}

#[test]
fn double_sub_numbered_heading_is_h3() {
    let headings = classify(&[("2.4.1 Sampling Strategy", 10.0, false)]);
    assert_eq!(
        headings,
        vec![(HeadingLevel::H3, "2.4.1 Sampling Strategy".to_string())]
    );
}

#[test]
fn bold_oversized_title_case_line_is_h1() {
    // Twice the page mean and also the page maximum.
    let headings = classify(&[("Project Overview", 24.0, true)]);
    assert_eq!(headings, vec![(HeadingLevel::H1, "Project Overview".to_string())]);
}

#[test]
fn bold_oversized_below_page_max_is_h2() {
    let headings = classify(&[
        ("Migration Strategy", 30.0, true),
        ("Rollback Procedures", 20.0, true),
    ]);
    assert_eq!(headings.len(), 2);
    assert_eq!(headings[0].0, HeadingLevel::H1);
    assert_eq!(headings[1].0, HeadingLevel::H2);
}

#[test]
fn form_field_label_rejected_at_any_size() {
    let headings = classify(&[("Name: _____________", 40.0, true)]);
    assert!(headings.is_empty());
}

#[test]
fn email_and_url_lines_rejected() {
    assert!(classify(&[("Contact us at info@example.org", 24.0, true)]).is_empty());
    assert!(classify(&[("Visit www.example.org Today", 24.0, true)]).is_empty());
}

#[test]
fn trailing_punctuation_blocks_font_detector() {
    assert!(classify(&[("Delivery Milestones:", 24.0, true)]).is_empty());
    assert!(classify(&[("Delivery, Milestones", 24.0, true)]).is_empty());
}

#[test]
fn lexical_pattern_beats_font_detector() {
    // Bold and oversized, yet the N.N pattern fixes the level at H2.
    let headings = classify(&[("3.1 Capacity Planning", 30.0, true)]);
    assert_eq!(headings, vec![(HeadingLevel::H2, "3.1 Capacity Planning".to_string())]);
}

#[test]
fn keyword_line_needs_size_margin() {
    // At the body size the keyword detector must stay quiet.
    assert!(classify(&[("the methodology we used", 10.0, false)]).is_empty());

    // Moderately enlarged, it fires as H2.
    let headings = classify(&[("Evaluation Methodology Notes", 13.0, false)]);
    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].0, HeadingLevel::H2);
}

#[test]
fn keyword_detector_skips_toc_entries() {
    assert!(classify(&[("Methodology.......17", 13.0, false)]).is_empty());
}

#[test]
fn length_gate_applies_before_detectors() {
    let long = "Very ".repeat(30);
    assert!(classify(&[("Hi", 24.0, true)]).is_empty());
    assert!(classify(&[(long.as_str(), 24.0, true)]).is_empty());
}

#[test]
fn standalone_section_names_are_h1() {
    let headings = classify(&[("References", 10.0, false)]);
    assert_eq!(headings, vec![(HeadingLevel::H1, "References".to_string())]);
}
