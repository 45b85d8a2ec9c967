//! Extraction result model.

use serde::Serialize;

/// Text extracted from a document part, one entry per paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Paragraph lines in document order. Empty paragraphs are kept.
    pub paragraphs: Vec<String>,
}

impl Extraction {
    /// Create an empty extraction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of paragraphs found.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if no paragraphs were found.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Paragraphs joined by a single newline, without a trailing one.
    pub fn text(&self) -> String {
        self.text_with("\n")
    }

    /// Paragraphs joined by `separator`.
    pub fn text_with(&self, separator: &str) -> String {
        self.paragraphs.join(separator)
    }
}

impl From<Vec<String>> for Extraction {
    fn from(paragraphs: Vec<String>) -> Self {
        Self { paragraphs }
    }
}
