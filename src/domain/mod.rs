//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod state;

pub use entities::{
    BusinessContact, DEFAULT_RESULTS_COUNT, MAX_RESULTS_COUNT, MIN_RESULTS_COUNT, SearchParams,
    clamp_results_count, parse_results_count,
};
pub use errors::DomainError;
pub use state::{SearchState, SearchView};
