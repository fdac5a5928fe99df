//! Lead search service. Builds the grounded prompt, calls the model, parses leads.
//!
//! One request per search: no retries, no pagination, no partial results.

use crate::domain::{BusinessContact, DomainError, SearchParams};
use crate::ports::{GroundedPrompt, GroundedSearchPort};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

const SYSTEM_INSTRUCTION: &str =
    "You are a helpful data extraction assistant. You always output valid JSON.";

/// Service for finding leads through a search-grounded model.
pub struct LeadSearchService {
    ai: Arc<dyn GroundedSearchPort>,
}

impl LeadSearchService {
    pub fn new(ai: Arc<dyn GroundedSearchPort>) -> Self {
        Self { ai }
    }

    /// Find `params.count` businesses for the niche and location.
    ///
    /// Empty model output is zero results, not an error. Configuration errors are
    /// returned as-is; every other failure is logged and replaced by the generic
    /// search failure.
    pub async fn find_businesses(
        &self,
        params: &SearchParams,
    ) -> Result<Vec<BusinessContact>, DomainError> {
        let request = GroundedPrompt {
            prompt: build_prompt(params),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            response_schema: business_list_schema(),
        };

        info!(
            niche = %params.niche,
            location = %params.location,
            count = params.count,
            "searching for leads"
        );

        let text = match self.ai.generate(&request).await {
            Ok(text) => text,
            Err(e @ DomainError::Config(_)) => return Err(e),
            Err(e) => {
                error!(error = %e, "grounded search request failed");
                return Err(DomainError::search_failed());
            }
        };

        let leads = parse_contacts(&text).map_err(|e| {
            error!(
                error = %e,
                response = %text.chars().take(200).collect::<String>(),
                "failed to parse leads JSON"
            );
            DomainError::search_failed()
        })?;

        info!(found = leads.len(), requested = params.count, "lead search complete");
        Ok(leads)
    }
}

/// Natural-language instruction for the model.
pub fn build_prompt(params: &SearchParams) -> String {
    let SearchParams {
        niche,
        location,
        count,
    } = params;
    format!(
        r#"I need you to act as a lead generation research assistant.

Task: Find {count} real businesses for the niche "{niche}" located in or serving "{location}".

Instructions:
1. Use Google Search to find exactly {count} specific businesses matching this criteria.
2. For each business, extract the following details from the search results:
   - Business Name
   - Website URL
   - Phone Number (if visible in snippets/maps data)
   - Email Address (if visible in snippets)
   - Physical Address (if applicable)
   - Short description

Constraints:
- Return the data strictly as a JSON array matching the schema.
- If a specific field (like email) is not found in the search snippets, return null for that field.
- Ensure the websites are valid."#
    )
}

/// Response schema: array of businesses, `name`/`website`/`description` required.
pub fn business_list_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "description": "The name of the business" },
                "website": { "type": "STRING", "description": "The website URL of the business" },
                "phone": {
                    "type": "STRING",
                    "description": "Phone number if available, else null",
                    "nullable": true
                },
                "email": {
                    "type": "STRING",
                    "description": "Email address if available, else null",
                    "nullable": true
                },
                "address": {
                    "type": "STRING",
                    "description": "Physical address if available, else null",
                    "nullable": true
                },
                "description": {
                    "type": "STRING",
                    "description": "A brief 1 sentence description of what they do"
                }
            },
            "required": ["name", "website", "description"]
        }
    })
}

/// Parse model text into leads. Blank text is an empty list.
pub fn parse_contacts(raw_text: &str) -> Result<Vec<BusinessContact>, serde_json::Error> {
    let clean = sanitize_json(raw_text);
    if clean.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&clean)
}

/// Strip markdown code fences and surrounding chatter from a JSON array response.
fn sanitize_json(raw_text: &str) -> String {
    let trimmed = raw_text.trim();

    // Handle markdown code blocks: ```json ... ``` or ``` ... ```
    if let Some(rest) = trimmed.strip_prefix("```") {
        let without_prefix = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
        if let Some(end_idx) = without_prefix.rfind("```") {
            return without_prefix[..end_idx].trim().to_string();
        }
        return without_prefix.trim().to_string();
    }

    if let (Some(start), Some(end)) = (trimmed.find('['), trimmed.rfind(']')) {
        if start < end {
            return trimmed[start..=end].to_string();
        }
    }

    trimmed.to_string()
}
