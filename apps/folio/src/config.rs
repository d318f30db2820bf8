use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_TIMEOUT;

pub const DEFAULT_API_URL: &str = "https://api.perplexity.ai/chat/completions";
pub const DEFAULT_MODEL: &str = "sonar";
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub generation_timeout: Duration,
    pub generated_dir: PathBuf,
    pub max_upload_bytes: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let generation_timeout = match lookup("GENERATION_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.parse::<u64>()
                    .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => DEFAULT_TIMEOUT,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(v) => v
                .parse::<u64>()
                .context("MAX_UPLOAD_BYTES must be a whole number of bytes")?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Config {
            api_key: require("PERPLEXITY_API_KEY")?,
            api_url: lookup("PERPLEXITY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: lookup("PERPLEXITY_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            generation_timeout,
            generated_dir: lookup("GENERATED_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join("generated")),
            max_upload_bytes,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_apply() {
        let config = Config::from_lookup(lookup_from(&[("PERPLEXITY_API_KEY", "pplx-test")]))
            .unwrap();
        assert_eq!(config.api_key, "pplx-test");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, "sonar");
        assert_eq!(config.generation_timeout, Duration::from_secs(120));
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
        assert!(config.generated_dir.ends_with("generated"));
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("PERPLEXITY_API_KEY"));
    }

    #[test]
    fn test_overrides_and_bad_numbers() {
        let config = Config::from_lookup(lookup_from(&[
            ("PERPLEXITY_API_KEY", "k"),
            ("PERPLEXITY_MODEL", "sonar-pro"),
            ("GENERATION_TIMEOUT_SECS", "30"),
            ("GENERATED_DIR", "/srv/folio"),
        ]))
        .unwrap();
        assert_eq!(config.model, "sonar-pro");
        assert_eq!(config.generation_timeout, Duration::from_secs(30));
        assert_eq!(config.generated_dir, PathBuf::from("/srv/folio"));

        let err = Config::from_lookup(lookup_from(&[
            ("PERPLEXITY_API_KEY", "k"),
            ("MAX_UPLOAD_BYTES", "lots"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("MAX_UPLOAD_BYTES"));
    }
}
