//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Message shown for any failure calling or interpreting the search model.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch business data. Please try again.";

/// Message shown when no API key is configured.
pub const MISSING_API_KEY_MESSAGE: &str =
    "API Key is missing. Please check your environment configuration.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Fatal configuration problem (e.g. missing credential). Shown verbatim.
    #[error("{0}")]
    Config(String),

    /// Transport or parse failure talking to the search model.
    #[error("{0}")]
    Search(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Input error: {0}")]
    Input(String),
}

impl DomainError {
    /// The generic user-facing search failure.
    pub fn search_failed() -> Self {
        DomainError::Search(SEARCH_FAILED_MESSAGE.to_string())
    }

    pub fn missing_api_key() -> Self {
        DomainError::Config(MISSING_API_KEY_MESSAGE.to_string())
    }
}
