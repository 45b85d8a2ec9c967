//! # wordtext
//!
//! Plain-text extraction from the WordprocessingML main part of a Word
//! document (`word/document.xml` once unpacked from the `.docx` package).
//!
//! Every `w:p` paragraph becomes one line, built by concatenating the text
//! of the `w:t` elements it contains.
//!
//! ## Quick Start
//!
//! ```no_run
//! // Never fails: errors come back as their description.
//! let text = wordtext::extract_text("document.xml");
//! println!("{}", text);
//!
//! // Typed errors when the caller needs to tell failure apart.
//! match wordtext::try_extract_text("document.xml") {
//!     Ok(text) => println!("{}", text),
//!     Err(e) => eprintln!("extraction failed: {}", e),
//! }
//! ```
//!
//! ## Structured Access
//!
//! ```no_run
//! use wordtext::{ExtractOptions, TextExtractor};
//!
//! let extractor = TextExtractor::with_options(ExtractOptions::strict());
//! let extraction = extractor.extract_file("document.xml")?;
//! println!("Paragraphs: {}", extraction.paragraph_count());
//! # Ok::<(), wordtext::Error>(())
//! ```

pub mod error;
pub mod extract;
pub mod model;
pub mod options;
pub mod wordml;

// Re-exports
pub use error::{Error, Result};
pub use extract::TextExtractor;
pub use model::Extraction;
pub use options::ExtractOptions;

use std::path::Path;

/// Extract plain text from a `document.xml` file.
///
/// Paragraphs are joined with `\n`. Any failure (missing file, malformed
/// XML) is returned as its description instead of an error.
///
/// # Example
///
/// ```no_run
/// let text = wordtext::extract_text("document.xml");
/// println!("{}", text);
/// ```
pub fn extract_text(path: impl AsRef<Path>) -> String {
    try_extract_text(path).unwrap_or_else(|e| e.to_string())
}

/// Extract plain text from a `document.xml` file, reporting failures.
///
/// # Example
///
/// ```no_run
/// let text = wordtext::try_extract_text("document.xml")?;
/// # Ok::<(), wordtext::Error>(())
/// ```
pub fn try_extract_text(path: impl AsRef<Path>) -> Result<String> {
    TextExtractor::new().extract_text(path)
}

/// Extract paragraphs from an in-memory `document.xml`.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("document.xml")?;
/// let extraction = wordtext::extract_bytes(&data)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn extract_bytes(data: &[u8]) -> Result<Extraction> {
    TextExtractor::new().extract_bytes(data)
}
