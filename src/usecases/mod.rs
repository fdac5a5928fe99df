//! Application use cases. Orchestrate domain logic via ports.

pub mod export_service;
pub mod search_service;
pub mod session;

pub use export_service::ExportService;
pub use search_service::LeadSearchService;
pub use session::LeadSession;
