//! Portfolio Pipeline: résumé file in, saved HTML page out.
//!
//! Flow: parse (extract → redact → sections) → resolve theme →
//!       generate → save.
//!
//! Parse errors abort before any network call. Generation failures arrive as a
//! `GenerationResult` and are turned into `AppError::Generation` here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::portfolio::generator::{save_portfolio, GenerationResult, PortfolioGenerator};
use crate::portfolio::themes::resolve_theme;
use crate::resume::parser::{parse, ParsedDocument};

/// What a successful run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioOutput {
    pub document: ParsedDocument,
    pub theme: &'static str,
    pub generation: GenerationResult,
    pub path: PathBuf,
}

pub struct PortfolioPipeline {
    generator: PortfolioGenerator,
    generated_dir: PathBuf,
    max_upload_bytes: u64,
}

impl PortfolioPipeline {
    pub fn new(generator: PortfolioGenerator, generated_dir: PathBuf, max_upload_bytes: u64) -> Self {
        Self {
            generator,
            generated_dir,
            max_upload_bytes,
        }
    }

    /// Default destination for a new page: `<generated_dir>/<uuid>_portfolio.html`.
    pub fn default_destination(&self) -> PathBuf {
        self.generated_dir
            .join(format!("{}_portfolio.html", Uuid::new_v4()))
    }

    pub async fn run(
        &self,
        resume_path: &Path,
        theme_name: &str,
        destination: Option<PathBuf>,
    ) -> Result<PortfolioOutput, AppError> {
        let document = parse(resume_path, self.max_upload_bytes)?;
        if !document.has_content() {
            return Err(AppError::EmptyContent);
        }
        debug!(
            "Sending {} of {} extracted chars ({} items redacted)",
            document.filtered_text().chars().count(),
            document.raw_text().chars().count(),
            document.redactions().total()
        );

        let (theme, colors) = resolve_theme(theme_name);
        if theme != theme_name {
            warn!("Unknown theme '{theme_name}', using '{theme}'");
        }

        let generation = self
            .generator
            .generate(document.filtered_text(), colors)
            .await;
        let html = generation
            .clone()
            .into_result()
            .map_err(AppError::Generation)?;

        let path = destination.unwrap_or_else(|| self.default_destination());
        if !save_portfolio(&html, &path) {
            return Err(AppError::Persistence(path));
        }

        info!("Portfolio ready at {}", path.display());
        Ok(PortfolioOutput {
            document,
            theme,
            generation,
            path,
        })
    }
}
