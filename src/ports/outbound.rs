//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;
use std::path::PathBuf;

/// One request to a search-grounded generative model.
#[derive(Debug, Clone)]
pub struct GroundedPrompt {
    /// User instruction.
    pub prompt: String,
    /// System instruction applied to the whole exchange.
    pub system_instruction: String,
    /// JSON schema the response must match (in the provider's schema dialect).
    pub response_schema: serde_json::Value,
}

/// Generative model with live web search grounding and structured JSON output.
#[async_trait::async_trait]
pub trait GroundedSearchPort: Send + Sync {
    /// Run the prompt with search grounding enabled and `application/json` output.
    ///
    /// Returns the raw response text, which may be empty. A missing credential is
    /// `DomainError::Config`; anything else that goes wrong is `DomainError::Search`
    /// carrying the root cause.
    async fn generate(&self, request: &GroundedPrompt) -> Result<String, DomainError>;
}

/// Export sink. Stores a finished file and reports where it went.
#[async_trait::async_trait]
pub trait ExportPort: Send + Sync {
    async fn write_file(&self, file_name: &str, contents: &str) -> Result<PathBuf, DomainError>;
}
