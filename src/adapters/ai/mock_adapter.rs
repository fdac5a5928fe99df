//! Mock search adapter for running without API calls.
//!
//! Returns hardcoded leads for development and testing purposes.

use crate::domain::DomainError;
use crate::ports::{GroundedPrompt, GroundedSearchPort};
use std::time::Duration;
use tracing::info;

const CANNED_LEADS: &str = r#"[
  {
    "name": "[MOCK] Northside Dental Studio",
    "website": "https://northside-dental.example",
    "phone": "(555) 010-0101",
    "email": "hello@northside-dental.example",
    "address": "101 Example Avenue, Springfield",
    "description": "Family and cosmetic dentistry practice."
  },
  {
    "name": "[MOCK] Ridgeline Roofing Co.",
    "website": "https://ridgeline-roofing.example",
    "phone": "(555) 010-0202",
    "email": null,
    "address": "22 Placeholder Road, Springfield",
    "description": "Residential roof repair and replacement."
  },
  {
    "name": "[MOCK] Lantern Coffee House",
    "website": "https://lantern-coffee.example",
    "phone": null,
    "email": null,
    "address": null,
    "description": "Independent cafe serving local roasts."
  }
]"#;

/// Mock generative-search adapter.
///
/// Returns a predetermined response without making API calls.
/// Simulates network latency with configurable delay.
pub struct MockSearchAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    response: String,
}

impl MockSearchAdapter {
    /// Create a new mock adapter with default delay (400ms) and canned leads.
    pub fn new() -> Self {
        Self {
            delay_ms: 400,
            response: CANNED_LEADS.to_string(),
        }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::new()
        }
    }

    /// Create a mock adapter that answers with the given raw text.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            delay_ms: 0,
            response: response.into(),
        }
    }
}

impl Default for MockSearchAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GroundedSearchPort for MockSearchAdapter {
    async fn generate(&self, request: &GroundedPrompt) -> Result<String, DomainError> {
        info!(
            prompt_len = request.prompt.len(),
            "[MOCK] Simulating grounded search"
        );

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(self.response.clone())
    }
}
