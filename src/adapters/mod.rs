//! Infrastructure adapters. Implement ports.
//!
//! Gemini, filesystem, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod export;
pub mod ui;
