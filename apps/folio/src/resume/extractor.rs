//! Document text extraction: PDF (per page) and DOCX (per paragraph).
//!
//! Legacy `.doc` is recognised so it can be rejected with a conversion hint;
//! there is no decoder for it.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;
use tracing::debug;

use crate::errors::{AppError, ExtractionCause};

/// Location of the main body part inside a DOCX container.
const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    /// Legacy binary Word format. Always rejected.
    Doc,
}

impl DocumentFormat {
    /// Resolves the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        extension.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Doc => "doc",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "doc" => Ok(DocumentFormat::Doc),
            other => Err(AppError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracts raw text from the document at `path`.
pub fn extract(path: &Path, format: DocumentFormat) -> Result<String, AppError> {
    let text = match format {
        DocumentFormat::Pdf => extract_pdf(path),
        DocumentFormat::Docx => extract_docx(path),
        DocumentFormat::Doc => return Err(AppError::LegacyFormat),
    }
    .map_err(|source| AppError::Extraction { format, source })?;

    debug!(
        "Extracted {} chars from {} document",
        text.chars().count(),
        format
    );
    Ok(text)
}

fn extract_pdf(path: &Path) -> Result<String, ExtractionCause> {
    let bytes = std::fs::read(path)?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)?;
    Ok(join_pages(pages))
}

/// Concatenates per-page text, each page terminated by a newline.
fn join_pages(pages: Vec<String>) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(&page);
        text.push('\n');
    }
    text
}

fn extract_docx(path: &Path) -> Result<String, ExtractionCause> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut xml = String::new();
    match archive.by_name(DOCX_BODY_PART) {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(ExtractionCause::MissingPart(DOCX_BODY_PART));
        }
        Err(e) => return Err(e.into()),
    }

    Ok(docx_paragraphs(&xml)?.join("\n"))
}

/// Walks WordprocessingML and returns the text of every `w:p`, in document order.
///
/// Run text lives in `w:t`; `w:tab` becomes `\t` and `w:br` / `w:cr` become `\n`.
/// A paragraph nested inside another (text boxes) becomes its own entry after the
/// enclosing one. DrawingML (`a:p`, `a:t`) is not body text and is skipped.
fn docx_paragraphs(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut paragraphs: Vec<String> = Vec::new();
    // Indices into `paragraphs` of the currently open `w:p` elements.
    let mut open: Vec<usize> = Vec::new();
    let mut in_text_run = false;
    // `w:tab` inside `w:tabs` is a tab-stop definition, not a character.
    let mut tab_stops = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    open.push(paragraphs.len());
                    paragraphs.push(String::new());
                }
                b"w:t" => in_text_run = true,
                b"w:tabs" => tab_stops += 1,
                _ => {}
            },
            Event::Empty(e) => {
                let ch = match e.name().as_ref() {
                    b"w:tab" if tab_stops == 0 => Some('\t'),
                    b"w:br" | b"w:cr" => Some('\n'),
                    b"w:p" => {
                        paragraphs.push(String::new());
                        None
                    }
                    _ => None,
                };
                if let (Some(ch), Some(&index)) = (ch, open.last()) {
                    paragraphs[index].push(ch);
                }
            }
            Event::Text(e) if in_text_run => {
                if let Some(&index) = open.last() {
                    paragraphs[index].push_str(&e.unescape()?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    open.pop();
                }
                b"w:t" => in_text_run = false,
                b"w:tabs" => tab_stops = tab_stops.saturating_sub(1),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
