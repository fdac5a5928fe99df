//! Application configuration. API credentials, endpoints, export settings.

use crate::adapters::export::CsvQuoting;
use serde::Deserialize;

/// Gemini REST base URL (v1beta exposes search grounding and response schemas).
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for search-grounded extraction.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Generative Search Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Gemini API key. Read from LEAD_SCOUT_API_KEY (fallbacks: GEMINI_API_KEY, API_KEY).
    #[serde(default)]
    pub api_key: Option<String>,

    /// API base URL. Read from LEAD_SCOUT_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Model name. Read from LEAD_SCOUT_MODEL.
    #[serde(default)]
    pub model: Option<String>,

    /// Use the offline mock adapter instead of Gemini. Read from LEAD_SCOUT_MOCK_AI.
    #[serde(default)]
    pub mock_ai: Option<bool>,

    // ─────────────────────────────────────────────────────────────────────────
    // Export Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Directory CSV files are written to. Read from LEAD_SCOUT_EXPORT_DIR.
    #[serde(default)]
    pub export_dir: Option<String>,

    /// `standard` (quote-doubling) or `verbatim`. Read from LEAD_SCOUT_CSV_QUOTING.
    #[serde(default)]
    pub csv_quoting: Option<CsvQuoting>,
}

impl AppConfig {
    /// Build from the environment. `.env` must already be loaded by the caller.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("LEAD_SCOUT"));
        if let Ok(path) = std::env::var("LEAD_SCOUT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // Unprefixed keys, so an existing .env with GEMINI_API_KEY / API_KEY keeps working
        cfg.api_key = first_non_blank(
            std::iter::once(cfg.api_key.take()).chain(
                ["GEMINI_API_KEY", "API_KEY"]
                    .iter()
                    .map(|name| std::env::var(name).ok()),
            ),
        );
        Ok(cfg)
    }

    /// Returns the API key if configured and non-empty.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
    }

    /// Returns the API base URL. Defaults to the public Gemini endpoint.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Returns the model name. Defaults to DEFAULT_MODEL.
    pub fn model_or_default(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    /// Returns true if the mock adapter was requested.
    pub fn use_mock_ai(&self) -> bool {
        self.mock_ai.unwrap_or(false)
    }

    /// Returns the export directory. Defaults to the current directory.
    pub fn export_dir_or_default(&self) -> String {
        self.export_dir.clone().unwrap_or_else(|| ".".to_string())
    }

    /// Returns the CSV quoting mode. Defaults to standard quote-doubling.
    pub fn csv_quoting_or_default(&self) -> CsvQuoting {
        self.csv_quoting.unwrap_or_default()
    }
}

/// First candidate that is present and not blank. An empty `KEY=` line counts as unset.
fn first_non_blank(candidates: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_url_or_default(), DEFAULT_API_URL);
        assert_eq!(cfg.model_or_default(), DEFAULT_MODEL);
        assert_eq!(cfg.export_dir_or_default(), ".");
        assert_eq!(cfg.csv_quoting_or_default(), CsvQuoting::Standard);
        assert!(!cfg.use_mock_ai());
        assert!(cfg.api_key().is_none());
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let cfg = AppConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(cfg.api_key().is_none());
    }

    #[test]
    fn test_blank_prefixed_key_falls_through_to_fallback() {
        let key = first_non_blank([
            Some(String::new()),
            Some("real-key".to_string()),
            Some("other".to_string()),
        ]);
        assert_eq!(key.as_deref(), Some("real-key"));

        let key = first_non_blank([None, Some("  ".to_string()), Some("api".to_string())]);
        assert_eq!(key.as_deref(), Some("api"));

        assert_eq!(first_non_blank([Some(String::new()), None, None]), None);
    }

    #[test]
    fn test_deserialize_quoting() {
        let cfg: AppConfig =
            serde_json::from_str(r#"{"csv_quoting":"verbatim","mock_ai":true}"#).unwrap();
        assert_eq!(cfg.csv_quoting_or_default(), CsvQuoting::Verbatim);
        assert!(cfg.use_mock_ai());
    }
}
