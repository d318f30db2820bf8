use std::path::PathBuf;

use thiserror::Error;

use crate::resume::extractor::DocumentFormat;

/// Pipeline-level error type.
/// Extraction and filtering failures abort the pipeline with one of these;
/// generation failures arrive here only after being reported as a `GenerationResult`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Legacy .doc format is not supported. Please convert to .docx or .pdf format.")]
    LegacyFormat,

    #[error("File is {size} bytes, limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Error parsing {format}: {source}")]
    Extraction {
        format: DocumentFormat,
        #[source]
        source: ExtractionCause,
    },

    #[error("No text left after extraction and filtering")]
    EmptyContent,

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Failed to save portfolio to {}", .0.display())]
    Persistence(PathBuf),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Underlying decode failure carried by `AppError::Extraction`.
#[derive(Debug, Error)]
pub enum ExtractionCause {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    #[error("missing document part '{0}'")]
    MissingPart(&'static str),
}

impl AppError {
    /// Stable machine-readable code for the error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            AppError::LegacyFormat => "LEGACY_FORMAT",
            AppError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::Extraction { .. } => "EXTRACTION_ERROR",
            AppError::EmptyContent => "EMPTY_CONTENT",
            AppError::Generation(_) => "GENERATION_ERROR",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show the person who uploaded the résumé.
    /// Internal details are logged instead of returned.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(_) => "Resume file not found.".to_string(),
            AppError::UnsupportedFormat(_) => {
                "Invalid file format. Please upload PDF or DOCX file.".to_string()
            }
            AppError::LegacyFormat => self.to_string(),
            AppError::FileTooLarge { limit, .. } => {
                format!("File is too large. Maximum size is {} MB.", limit / (1024 * 1024))
            }
            AppError::Extraction { source, .. } => {
                tracing::error!("Extraction error: {source}");
                format!("Error processing resume: {self}")
            }
            AppError::EmptyContent => "Unable to extract content from resume.".to_string(),
            AppError::Generation(msg) => msg.clone(),
            AppError::Persistence(path) => {
                tracing::error!("Persistence error: {}", path.display());
                "Failed to save portfolio".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal error occurred".to_string()
            }
        }
    }
}
