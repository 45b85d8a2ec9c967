//! WordprocessingML namespace and element names.

/// Transitional WordprocessingML namespace, used by virtually every `.docx`.
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Strict (ISO/IEC 29500) WordprocessingML namespace.
pub const STRICT_NS: &str = "http://purl.oclc.org/ooxml/wordprocessingml/main";

/// Local name of a paragraph element (`w:p`).
pub const PARAGRAPH: &[u8] = b"p";

/// Local name of a text element (`w:t`).
pub const TEXT: &[u8] = b"t";
