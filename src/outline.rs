//! Outline assembly: ordering, deduplication, and hierarchy repair.

use std::collections::HashSet;

use crate::model::{Heading, HeadingLevel};

/// Generic one-word titles dropped from the final outline.
const GENERIC_TITLES: &[&str] = &["overview", "introduction", "conclusion"];

/// Normalize heading text for dedup comparison: lowercase with all
/// non-alphanumeric characters removed.
pub fn normalize_heading_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Assemble the final outline from raw heading candidates.
///
/// Headings are put in (page, position) order, deduplicated per page by
/// normalized text, stripped of weak or generic entries, and walked to
/// enforce the open-H1 invariant: an H2/H3 with no H1 open before it is
/// discarded, never promoted.
pub fn assemble_outline(mut headings: Vec<Heading>) -> Vec<Heading> {
    headings.sort_by_key(|h| (h.page, h.position));

    let mut seen: HashSet<(u32, String)> = HashSet::new();
    let mut open_h1 = false;
    let mut outline = Vec::new();

    for heading in headings {
        if !seen.insert((heading.page, normalize_heading_text(&heading.text))) {
            continue;
        }
        if is_weak(&heading) {
            continue;
        }

        match heading.level {
            HeadingLevel::H1 => {
                open_h1 = true;
                outline.push(heading);
            }
            _ if open_h1 => outline.push(heading),
            _ => {
                log::debug!(
                    "dropping {} \"{}\" on page {}: no open H1",
                    heading.level,
                    heading.text,
                    heading.page
                );
            }
        }
    }

    outline
}

/// Too short or too generic to be worth keeping.
fn is_weak(heading: &Heading) -> bool {
    let text = heading.text.as_str();
    if text.split_whitespace().count() < 2 || text.chars().count() < 5 {
        return true;
    }
    let lower = text.to_lowercase();
    GENERIC_TITLES.contains(&lower.as_str())
}
