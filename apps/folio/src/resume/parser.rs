//! Résumé parsing: extract, redact, detect sections.
//!
//! Flow: existence check → format from extension → size limit → extract →
//!       filter personal data → detect sections.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::resume::extractor::{extract, DocumentFormat};
use crate::resume::privacy::{filter_with_report, RedactionReport};
use crate::resume::sections::{detect_sections, SectionFlags};

/// The result of parsing one uploaded résumé.
///
/// Built once and never mutated. `raw_text` is kept for the caller but is never
/// serialised; only `filtered_text` and redaction counts may leave the process.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedDocument {
    #[serde(skip_serializing)]
    raw_text: String,
    filtered_text: String,
    sections: SectionFlags,
    has_content: bool,
    redactions: RedactionReport,
}

impl ParsedDocument {
    /// Runs the text stages of the pipeline over already-extracted text.
    pub fn from_raw_text(raw_text: String) -> Self {
        let (filtered_text, redactions) = filter_with_report(&raw_text);
        let sections = detect_sections(&filtered_text);
        let has_content = !filtered_text.trim().is_empty();

        Self {
            raw_text,
            filtered_text,
            sections,
            has_content,
            redactions,
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn filtered_text(&self) -> &str {
        &self.filtered_text
    }

    pub fn sections(&self) -> &SectionFlags {
        &self.sections
    }

    pub fn has_content(&self) -> bool {
        self.has_content
    }

    pub fn redactions(&self) -> RedactionReport {
        self.redactions
    }
}

/// Parses the résumé at `path`, rejecting files larger than `max_bytes`.
pub fn parse(path: &Path, max_bytes: u64) -> Result<ParsedDocument, AppError> {
    if !path.is_file() {
        return Err(AppError::NotFound(path.to_path_buf()));
    }

    let format = DocumentFormat::from_path(path)?;

    let size = std::fs::metadata(path)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("reading file metadata")))?
        .len();
    if size > max_bytes {
        return Err(AppError::FileTooLarge {
            size,
            limit: max_bytes,
        });
    }

    info!("Parsing {} résumé ({} bytes)", format, size);
    let raw_text = extract(path, format)?;
    let document = ParsedDocument::from_raw_text(raw_text);

    info!(
        "Parsed résumé: {} redactions, has_content={}",
        document.redactions.total(),
        document.has_content
    );
    debug!("Detected sections: {:?}", document.sections);

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::extractor::tests::{document_xml, pdf_bytes, write_docx};
    use crate::resume::sections::SectionLabel;

    const LIMIT: u64 = 16 * 1024 * 1024;

    #[test]
    fn test_from_raw_text_filters_and_flags() {
        let document = ParsedDocument::from_raw_text(
            "Summary\nCall 555-123-4567\n123 Main Street, 12345\nExperience: Acme".to_string(),
        );
        assert!(document.has_content());
        assert!(document.raw_text().contains("555-123-4567"));
        assert!(!document.filtered_text().contains("555-123-4567"));
        assert!(document.filtered_text().contains("[ADDRESS REMOVED]"));
        assert!(document.filtered_text().contains("[ZIP REMOVED]"));
        assert!(document.sections()[&SectionLabel::Summary]);
        assert!(document.sections()[&SectionLabel::Experience]);
        assert_eq!(document.redactions().total(), 3);
    }

    #[test]
    fn test_whitespace_only_has_no_content() {
        let document = ParsedDocument::from_raw_text(" \n\t\n".to_string());
        assert!(!document.has_content());
    }

    #[test]
    fn test_serialization_omits_raw_text() {
        let document = ParsedDocument::from_raw_text("Call 555-123-4567".to_string());
        let json = serde_json::to_string(&document).unwrap();
        assert!(!json.contains("555-123-4567"));
        assert!(!json.contains("raw_text"));
        assert!(json.contains("filtered_text"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["redactions"]["phone_numbers"], 1);
        assert_eq!(value["redactions"]["zip_codes"], 0);
    }

    #[test]
    fn test_parse_docx_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        write_docx(
            &path,
            &document_xml(&["Jane Doe", "Phone: (555) 123-4567", "Education", "BSc"]),
        );

        let document = parse(&path, LIMIT).unwrap();
        assert_eq!(
            document.filtered_text(),
            "Jane Doe\nPhone: [PHONE NUMBER REMOVED]\nEducation\nBSc"
        );
        assert!(document.sections()[&SectionLabel::Education]);
    }

    #[test]
    fn test_parse_pdf_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(
            &path,
            pdf_bytes(&["Experience at Acme, call 555-123-4567", "Education"]),
        )
        .unwrap();

        let document = parse(&path, LIMIT).unwrap();
        assert!(document.has_content());
        assert!(document.raw_text().ends_with('\n'));
        assert!(!document.filtered_text().contains("555-123-4567"));
        assert!(document.sections()[&SectionLabel::Experience]);
        assert!(document.sections()[&SectionLabel::Education]);
        assert!(!document.sections()[&SectionLabel::Skills]);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse(Path::new("/nonexistent/resume.pdf"), LIMIT).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_parse_unknown_extension_before_decoding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Experience").unwrap();

        let err = parse(&path, LIMIT).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_parse_legacy_doc_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.DOC");
        std::fs::write(&path, b"\xD0\xCF\x11\xE0").unwrap();

        let err = parse(&path, LIMIT).unwrap_err();
        assert!(matches!(err, AppError::LegacyFormat));
    }

    #[test]
    fn test_parse_rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, vec![0u8; 64]).unwrap();

        let err = parse(&path, 32).unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { size: 64, limit: 32 }));
    }
}
