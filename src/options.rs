//! Extraction options configuration.

use crate::wordml;

/// Options for extracting text.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Separator placed between paragraph lines
    pub separator: String,

    /// Namespace URI that paragraph and text elements must belong to
    pub namespace: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
            namespace: wordml::W_NS.to_string(),
        }
    }
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for strict-OOXML documents.
    pub fn strict() -> Self {
        Self::default().with_namespace(wordml::STRICT_NS)
    }

    /// Set the paragraph separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the namespace URI to match elements against.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}
