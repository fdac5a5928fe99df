//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/UI types here; adapters map into these.

use serde::{Deserialize, Serialize};

/// Lower bound for the number of leads requested per search.
pub const MIN_RESULTS_COUNT: i64 = 1;
/// Upper bound for the number of leads requested per search.
pub const MAX_RESULTS_COUNT: i64 = 50;
/// Count used when the field is untouched or unparsable.
pub const DEFAULT_RESULTS_COUNT: i64 = 10;

/// A lead: one business found by the search pipeline.
///
/// Created only from the model's JSON response and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessContact {
    pub name: String,
    pub website: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub description: String,
}

/// Validated parameters handed to the search pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub niche: String,
    pub location: String,
    /// Always within [MIN_RESULTS_COUNT, MAX_RESULTS_COUNT].
    pub count: u32,
}

impl SearchParams {
    /// Build params from raw form values, clamping the count.
    pub fn new(niche: impl Into<String>, location: impl Into<String>, count: i64) -> Self {
        Self {
            niche: niche.into(),
            location: location.into(),
            count: clamp_results_count(count),
        }
    }
}

/// Clamp a requested count into [1, 50].
pub fn clamp_results_count(count: i64) -> u32 {
    count.clamp(MIN_RESULTS_COUNT, MAX_RESULTS_COUNT) as u32
}

/// Parse the count field the way the form does: take the leading integer,
/// fall back to the default when nothing parses or the value is zero.
///
/// No clamping happens here; that is done on submit.
pub fn parse_results_count(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let leading: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if leading.is_empty() {
        return DEFAULT_RESULTS_COUNT;
    }

    // Overlong inputs saturate; they get clamped on submit anyway.
    let magnitude = leading.parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };
    if value == 0 {
        DEFAULT_RESULTS_COUNT
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_results_count_bounds() {
        assert_eq!(clamp_results_count(1), 1);
        assert_eq!(clamp_results_count(0), 1);
        assert_eq!(clamp_results_count(-20), 1);
        assert_eq!(clamp_results_count(50), 50);
        assert_eq!(clamp_results_count(51), 50);
        assert_eq!(clamp_results_count(i64::MAX), 50);
        assert_eq!(clamp_results_count(25), 25);
    }

    #[test]
    fn test_clamp_always_in_range() {
        for n in -100..=200 {
            let c = clamp_results_count(n);
            assert!((1..=50).contains(&c), "{n} clamped to {c}");
        }
    }

    #[test]
    fn test_parse_results_count() {
        assert_eq!(parse_results_count("12"), 12);
        assert_eq!(parse_results_count("  7 leads"), 7);
        assert_eq!(parse_results_count("-3"), -3);
        assert_eq!(parse_results_count("3.9"), 3);
        assert_eq!(parse_results_count("+4"), 4);
        assert_eq!(parse_results_count(""), DEFAULT_RESULTS_COUNT);
        assert_eq!(parse_results_count("abc"), DEFAULT_RESULTS_COUNT);
        assert_eq!(parse_results_count("0"), DEFAULT_RESULTS_COUNT);
        assert_eq!(parse_results_count("-"), DEFAULT_RESULTS_COUNT);
    }

    #[test]
    fn test_search_params_clamps() {
        let params = SearchParams::new("Dentists", "Chicago", 120);
        assert_eq!(params.count, 50);
        assert_eq!(params.niche, "Dentists");
    }

    #[test]
    fn test_contact_deserialize_nulls_and_missing() {
        let json = r#"{"name":"Acme","website":"https://acme.com","phone":null,"description":"Widgets"}"#;
        let c: BusinessContact = serde_json::from_str(json).unwrap();
        assert_eq!(c.phone, None);
        assert_eq!(c.email, None);
        assert_eq!(c.address, None);
        assert_eq!(c.description, "Widgets");
    }
}
