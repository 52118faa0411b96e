//! Text extraction for binary documents (PDF, DOCX).
//!
//! Uploads supply bytes + declared media type; this module returns plain
//! UTF-8 text or a typed error. It never panics on malformed input.

use std::io::Read;

use crate::models::{Document, ExtractedText, MediaType};

/// Maximum decompressed bytes to read from a single ZIP entry (zip-bomb protection).
const MAX_XML_ENTRY_BYTES: u64 = 50 * 1024 * 1024;

/// Extraction failure. Callers decide whether it is fatal or a warning.
#[derive(Debug)]
pub enum ExtractError {
    /// The declared media type is not one we can extract from.
    UnsupportedType(String),
    /// The bytes claimed a supported type but could not be parsed, or
    /// parsed to nothing.
    Corrupt(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::UnsupportedType(t) => {
                write!(f, "unsupported media type: {}", t)
            }
            ExtractError::Corrupt(e) => write!(f, "could not read document: {}", e),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Extract plain text from a document.
///
/// Consumes the document: once text exists the raw bytes are no longer
/// needed. A parseable document that yields only whitespace is reported
/// as [`ExtractError::Corrupt`], never as empty text.
pub fn extract(document: Document) -> Result<ExtractedText, ExtractError> {
    let text = match document.media_type {
        MediaType::Pdf => extract_pdf(&document.bytes)?,
        MediaType::Docx => extract_docx(&document.bytes)?,
        MediaType::None => {
            return Err(ExtractError::UnsupportedType(
                document.media_type.label().to_string(),
            ))
        }
    };
    ExtractedText::new(text)
        .ok_or_else(|| ExtractError::Corrupt("document contains no extractable text".to_string()))
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Corrupt(e.to_string()))
}

/// DOCX is a ZIP containing `word/document.xml`; paragraph text lives in
/// `<w:t>` runs grouped under `<w:p>` elements.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes))
        .map_err(|e| ExtractError::Corrupt(e.to_string()))?;
    let xml = read_zip_entry_bounded(&mut archive, "word/document.xml", MAX_XML_ENTRY_BYTES)?;
    let paragraphs = paragraphs_from_xml(&xml)?;
    Ok(paragraphs.join("\n"))
}

fn read_zip_entry_bounded(
    archive: &mut zip::ZipArchive<std::io::Cursor<&[u8]>>,
    name: &str,
    max_bytes: u64,
) -> Result<Vec<u8>, ExtractError> {
    let entry = archive
        .by_name(name)
        .map_err(|e| ExtractError::Corrupt(format!("{}: {}", name, e)))?;
    let mut out = Vec::new();
    entry
        .take(max_bytes)
        .read_to_end(&mut out)
        .map_err(|e| ExtractError::Corrupt(e.to_string()))?;
    if out.len() as u64 >= max_bytes {
        return Err(ExtractError::Corrupt(format!(
            "ZIP entry {} exceeds size limit ({} bytes)",
            name, max_bytes
        )));
    }
    Ok(out)
}

/// Collect paragraph text from WordprocessingML, one string per `<w:p>`.
///
/// Runs inside a paragraph are concatenated without separators; paragraph
/// order follows document order, and an empty paragraph contributes an
/// empty string (a blank line after joining). Text outside any paragraph
/// is ignored.
fn paragraphs_from_xml(xml: &[u8]) -> Result<Vec<String>, ExtractError> {
    let mut reader = quick_xml::Reader::from_reader(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(e)) => match e.local_name().as_ref() {
                b"p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"t" => in_text = in_paragraph,
                _ => {}
            },
            Ok(quick_xml::events::Event::Empty(e)) => {
                if e.local_name().as_ref() == b"p" {
                    paragraphs.push(String::new());
                }
            }
            Ok(quick_xml::events::Event::Text(t)) => {
                if in_text {
                    let text = t
                        .unescape()
                        .map_err(|e| ExtractError::Corrupt(e.to_string()))?;
                    current.push_str(&text);
                }
            }
            Ok(quick_xml::events::Event::End(e)) => match e.local_name().as_ref() {
                b"p" => {
                    if in_paragraph {
                        paragraphs.push(std::mem::take(&mut current));
                        in_paragraph = false;
                    }
                }
                b"t" => in_text = false,
                _ => {}
            },
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => return Err(ExtractError::Corrupt(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
