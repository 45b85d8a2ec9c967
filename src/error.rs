//! Error types for the wordtext library.

use std::io;
use thiserror::Error;

/// Result type alias for wordtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting text from a document part.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Error during text encoding conversion.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(io_err) => {
                Error::Io(io::Error::new(io_err.kind(), io_err.to_string()))
            }
            other => Error::XmlParse(other.to_string()),
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<quick_xml::escape::EscapeError> for Error {
    fn from(err: quick_xml::escape::EscapeError) -> Self {
        Error::XmlParse(err.to_string())
    }
}
