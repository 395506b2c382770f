//! # testgen_core
//!
//! Core domain logic for testgen: OpenAPI endpoint extraction, review
//! sessions, file loading and the wire models shared with the HTTP client.

pub mod code;
pub mod demos;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod session;
pub mod upload;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
