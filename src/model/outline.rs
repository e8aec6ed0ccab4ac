//! Heading and result types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hierarchy level of a detected heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading.
    H1,
    /// Second-level heading.
    H2,
    /// Third-level heading.
    H3,
}

impl HeadingLevel {
    /// Numeric depth (1 for H1, 3 for H3).
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadingLevel::H1 => write!(f, "H1"),
            HeadingLevel::H2 => write!(f, "H2"),
            HeadingLevel::H3 => write!(f, "H3"),
        }
    }
}

/// A detected heading.
///
/// Serializes with exactly the `level`, `text`, and `page` keys; the
/// position index is internal ordering state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level.
    pub level: HeadingLevel,
    /// Cleaned heading text.
    pub text: String,
    /// Page number (1-indexed).
    pub page: u32,
    /// Position of the source block within its page.
    #[serde(skip)]
    pub position: usize,
}

impl Heading {
    /// Create a new heading.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32, position: usize) -> Self {
        Self {
            level,
            text: text.into(),
            page,
            position,
        }
    }
}

/// The terminal output artifact: a title plus the ordered outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Best-guess document title.
    pub title: String,
    /// Ordered heading outline.
    pub outline: Vec<Heading>,
}

impl DocumentResult {
    /// Create a new result.
    pub fn new(title: impl Into<String>, outline: Vec<Heading>) -> Self {
        Self {
            title: title.into(),
            outline,
        }
    }

    /// An empty result with the given title.
    pub fn empty(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }
}
