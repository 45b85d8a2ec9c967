//! Paragraph text extraction from WordprocessingML.
//!
//! The walk mirrors a namespaced descendant search: every `{W}p` strictly
//! below the root becomes one output line, and every `{W}t` anywhere inside
//! an open paragraph contributes its direct text to it. Paragraphs that
//! nest inside each other each receive the runs they contain, so text in a
//! nested paragraph also appears in its ancestors.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::model::Extraction;
use crate::options::ExtractOptions;
use crate::wordml;

/// Extracts paragraph text from a WordprocessingML document part.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    options: ExtractOptions,
}

impl TextExtractor {
    /// Create an extractor for transitional WordprocessingML.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// The options this extractor was built with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract paragraphs from an XML file on disk.
    ///
    /// The file handle is owned by the reader and closed on every return
    /// path, including parse failures.
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<Extraction> {
        let path = path.as_ref();
        debug!(path = %path.display(), "extracting text");

        let file = File::open(path)?;
        let extraction = self.extract_reader(BufReader::new(file))?;

        debug!(
            path = %path.display(),
            paragraphs = extraction.paragraph_count(),
            "extraction finished"
        );
        Ok(extraction)
    }

    /// Extract paragraphs from XML bytes.
    pub fn extract_bytes(&self, data: &[u8]) -> Result<Extraction> {
        self.extract_reader(data)
    }

    /// Extract paragraphs from an XML string.
    pub fn extract_str(&self, xml: &str) -> Result<Extraction> {
        self.extract_bytes(xml.as_bytes())
    }

    /// Extract paragraphs from any buffered reader.
    ///
    /// ASCII-compatible encodings are decoded as declared. UTF-16 input is
    /// recognized by its byte order mark and transcoded up front, since the
    /// pull parser only scans ASCII-compatible bytes.
    pub fn extract_reader<R: BufRead>(&self, mut reader: R) -> Result<Extraction> {
        let utf16 = Encoding::for_bom(reader.fill_buf()?)
            .filter(|(encoding, _)| *encoding == UTF_16LE || *encoding == UTF_16BE);

        match utf16 {
            Some((encoding, bom_len)) => {
                let mut data = Vec::new();
                reader.read_to_end(&mut data)?;
                let utf8 = transcode_utf16(encoding, &data[bom_len..])?;
                self.walk(NsReader::from_reader(utf8.as_slice()))
            }
            None => self.walk(NsReader::from_reader(reader)),
        }
    }

    fn walk<R: BufRead>(&self, mut reader: NsReader<R>) -> Result<Extraction> {
        let namespace = self.options.namespace.as_bytes();

        let mut walker = Walker::default();
        let mut buf = Vec::new();

        loop {
            let (resolved, event) = reader.read_resolved_event_into(&mut buf)?;
            let kind = match &event {
                Event::Start(e) | Event::Empty(e) => {
                    classify(&resolved, e.local_name().as_ref(), namespace)?
                }
                _ => Kind::Other,
            };
            drop(resolved);

            match event {
                Event::Start(ref e) => {
                    check_attributes(&reader, e)?;
                    walker.open(kind)?;
                }
                Event::Empty(ref e) => {
                    check_attributes(&reader, e)?;
                    walker.open(kind)?;
                    walker.close();
                }
                Event::End(_) => walker.close(),
                Event::Text(ref e) => {
                    if walker.wants_text() {
                        let raw = decode(&reader, e)?;
                        walker.push_text(&unescape(&normalize_newlines(&raw))?);
                    } else if !walker.in_root() && !is_blank(e) {
                        return Err(walker.outside_root_error());
                    }
                }
                Event::CData(ref e) => {
                    if walker.wants_text() {
                        let raw = decode(&reader, e)?;
                        walker.push_text(&normalize_newlines(&raw));
                    } else if !walker.in_root() {
                        return Err(walker.outside_root_error());
                    }
                }
                Event::Eof => break,
                // Comments and processing instructions do not end a run's
                // direct text.
                _ => {}
            }
            buf.clear();
        }

        walker.finish()
    }

    /// Extract a file and render it with the configured separator.
    pub fn extract_text(&self, path: impl AsRef<Path>) -> Result<String> {
        let extraction = self.extract_file(path)?;
        Ok(self.render(&extraction))
    }

    /// Render an extraction with the configured separator.
    pub fn render(&self, extraction: &Extraction) -> String {
        extraction.text_with(&self.options.separator)
    }
}

/// Role of an element in the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Paragraph,
    Text,
    Other,
}

fn classify(resolved: &ResolveResult, local_name: &[u8], namespace: &[u8]) -> Result<Kind> {
    match resolved {
        ResolveResult::Bound(Namespace(ns)) if *ns == namespace => Ok(match local_name {
            wordml::PARAGRAPH => Kind::Paragraph,
            wordml::TEXT => Kind::Text,
            _ => Kind::Other,
        }),
        ResolveResult::Unknown(prefix) => Err(Error::XmlParse(format!(
            "unbound prefix: {}",
            String::from_utf8_lossy(prefix)
        ))),
        _ => Ok(Kind::Other),
    }
}

/// Reject malformed attributes and prefixes with no namespace binding.
fn check_attributes<R>(reader: &NsReader<R>, start: &BytesStart) -> Result<()> {
    for attr in start.attributes() {
        let attr = attr?;
        let Some(prefix) = attr.key.prefix() else {
            continue;
        };
        if matches!(prefix.as_ref(), b"xml" | b"xmlns") {
            continue;
        }
        if let (ResolveResult::Unknown(prefix), _) = reader.resolve_attribute(attr.key) {
            return Err(Error::XmlParse(format!(
                "unbound prefix: {}",
                String::from_utf8_lossy(&prefix)
            )));
        }
    }
    Ok(())
}

fn decode<'b, R>(reader: &NsReader<R>, raw: &'b [u8]) -> Result<Cow<'b, str>> {
    reader
        .decoder()
        .decode(raw)
        .map_err(|err| Error::Encoding(err.to_string()))
}

fn transcode_utf16(encoding: &'static Encoding, data: &[u8]) -> Result<Vec<u8>> {
    let (text, had_errors) = encoding.decode_without_bom_handling(data);
    if had_errors {
        return Err(Error::Encoding(format!(
            "malformed {} input",
            encoding.name()
        )));
    }
    // A UTF-8 byte order mark pins the parser's encoding, so the
    // `encoding="UTF-16"` declaration no longer applies.
    let mut utf8 = Vec::with_capacity(text.len() + 3);
    utf8.extend_from_slice(b"\xEF\xBB\xBF");
    utf8.extend_from_slice(text.as_bytes());
    Ok(utf8)
}

/// End-of-line handling: `\r\n` and a lone `\r` read as `\n`.
///
/// Applied to raw character data before references are expanded, so
/// `&#13;` still produces a carriage return.
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

fn is_blank(text: &[u8]) -> bool {
    text.iter().all(|&b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
}

#[derive(Debug)]
struct Frame {
    kind: Kind,
    /// Set once a child element starts; later text is the child's tail.
    child_seen: bool,
}

/// Tracks open elements and accumulates paragraph lines.
#[derive(Debug, Default)]
struct Walker {
    stack: Vec<Frame>,
    paragraphs: Vec<String>,
    /// Indices into `paragraphs` of every paragraph currently open.
    open: Vec<usize>,
    seen_root: bool,
    root_closed: bool,
}

impl Walker {
    fn open(&mut self, kind: Kind) -> Result<()> {
        if self.stack.is_empty() {
            if self.root_closed {
                return Err(Error::XmlParse("junk after document element".to_string()));
            }
            self.seen_root = true;
            // The root itself is never a match: the search starts below it.
            self.stack.push(Frame {
                kind: Kind::Other,
                child_seen: false,
            });
            return Ok(());
        }

        if let Some(parent) = self.stack.last_mut() {
            parent.child_seen = true;
        }
        if kind == Kind::Paragraph {
            self.open.push(self.paragraphs.len());
            self.paragraphs.push(String::new());
        }
        self.stack.push(Frame {
            kind,
            child_seen: false,
        });
        Ok(())
    }

    fn close(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        if frame.kind == Kind::Paragraph {
            if let Some(index) = self.open.pop() {
                trace!(
                    index,
                    len = self.paragraphs[index].len(),
                    "paragraph closed"
                );
            }
        }
        if self.stack.is_empty() {
            self.root_closed = true;
        }
    }

    fn in_root(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Direct text of a run inside at least one open paragraph.
    fn wants_text(&self) -> bool {
        !self.open.is_empty()
            && self
                .stack
                .last()
                .is_some_and(|top| top.kind == Kind::Text && !top.child_seen)
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        for &index in &self.open {
            self.paragraphs[index].push_str(text);
        }
    }

    fn outside_root_error(&self) -> Error {
        if self.root_closed {
            Error::XmlParse("junk after document element".to_string())
        } else {
            Error::XmlParse("text before document element".to_string())
        }
    }

    fn finish(self) -> Result<Extraction> {
        if !self.seen_root {
            return Err(Error::XmlParse("no element found".to_string()));
        }
        if !self.stack.is_empty() {
            return Err(Error::XmlParse(format!(
                "unclosed element at end of input ({} open)",
                self.stack.len()
            )));
        }
        Ok(Extraction::from(self.paragraphs))
    }
}
