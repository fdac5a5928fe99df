//! AI adapter module. Implements GroundedSearchPort for LLM integration.
//!
//! Provides the Gemini adapter and a mock adapter for offline runs.

pub mod gemini_adapter;
pub mod mock_adapter;

pub use gemini_adapter::GeminiAdapter;
pub use mock_adapter::MockSearchAdapter;
