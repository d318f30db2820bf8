//! Portfolio Generation: prompt → LLM → cleanup → validation.
//!
//! Every failure is folded into a `GenerationResult`; nothing escapes `generate`.
//! Persisting the page is a separate step (`save_portfolio`) that callers run
//! only on a successful result.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::llm_client::{LlmClient, LlmError};
use crate::portfolio::html::{clean_html_response, validate_html};
use crate::portfolio::prompts::{build_portfolio_prompt, PORTFOLIO_SYSTEM};
use crate::portfolio::themes::ColorTheme;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Why a generation attempt failed. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Portfolio generation timed out. Please try again.")]
    Timeout,

    #[error("API request failed: {0}")]
    Transport(String),

    #[error("Invalid API response format: {0}")]
    ResponseFormat(String),

    #[error("Generated HTML failed validation")]
    Validation,

    #[error("Portfolio generation failed: {0}")]
    Unexpected(String),
}

impl From<LlmError> for GenerationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout(_) => GenerationError::Timeout,
            LlmError::Http(e) if e.is_builder() => GenerationError::Unexpected(e.to_string()),
            LlmError::Http(e) => GenerationError::Transport(e.to_string()),
            LlmError::Api { status, message } => {
                GenerationError::Transport(format!("status {status}: {message}"))
            }
            LlmError::Parse(e) => GenerationError::ResponseFormat(e.to_string()),
            LlmError::MissingContent => {
                GenerationError::ResponseFormat(LlmError::MissingContent.to_string())
            }
            LlmError::Client(e) => GenerationError::Unexpected(e.to_string()),
        }
    }
}

/// Outcome of one generation call.
///
/// `html` is present exactly when `success` is true, `error` exactly when it is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    success: bool,
    html: Option<String>,
    error: Option<String>,
}

impl GenerationResult {
    pub fn succeeded(html: String) -> Self {
        Self {
            success: true,
            html: Some(html),
            error: None,
        }
    }

    pub fn failed(error: &GenerationError) -> Self {
        Self {
            success: false,
            html: None,
            error: Some(error.to_string()),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Converts into a `Result`, carrying the user-facing message on failure.
    pub fn into_result(self) -> Result<String, String> {
        match (self.html, self.error) {
            (Some(html), None) => Ok(html),
            (None, Some(error)) => Err(error),
            _ => Err(GenerationError::Unexpected("inconsistent result".to_string()).to_string()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generator
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct PortfolioGenerator {
    llm: LlmClient,
}

impl PortfolioGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Generates a portfolio page from filtered résumé text.
    pub async fn generate(&self, resume_text: &str, theme: &ColorTheme) -> GenerationResult {
        info!(
            "Generating portfolio with model {} ({} chars of résumé text)",
            self.llm.model(),
            resume_text.chars().count()
        );

        match self.try_generate(resume_text, theme).await {
            Ok(html) => {
                info!("Portfolio generated ({} chars)", html.chars().count());
                GenerationResult::succeeded(html)
            }
            Err(e) => {
                warn!("Portfolio generation failed: {e}");
                GenerationResult::failed(&e)
            }
        }
    }

    async fn try_generate(
        &self,
        resume_text: &str,
        theme: &ColorTheme,
    ) -> Result<String, GenerationError> {
        let prompt = build_portfolio_prompt(resume_text, theme);
        let content = self.llm.call_text(PORTFOLIO_SYSTEM, &prompt).await?;

        let html = clean_html_response(&content);
        if !validate_html(&html) {
            warn!(
                "Generated content failed validation: {:?}",
                html.chars().take(80).collect::<String>()
            );
            return Err(GenerationError::Validation);
        }

        Ok(html)
    }
}

/// Writes an accepted page to `destination`, creating the parent directory.
/// Returns false (and logs the cause) on any I/O failure.
pub fn save_portfolio(html: &str, destination: &Path) -> bool {
    let result = destination
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|_| std::fs::write(destination, html));

    match result {
        Ok(()) => {
            info!("Saved portfolio to {}", destination.display());
            true
        }
        Err(e) => {
            error!("Error saving portfolio to {}: {e}", destination.display());
            false
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
