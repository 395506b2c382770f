//! OpenAPI module: flattens an OpenAPI document into selectable endpoints.
//!
//! # Public API
//!
//! - [`parse`]: extract endpoint descriptors from JSON text or a parsed value
//! - [`skipped_entries`]: count method keys dropped by extraction
//! - [`is_valid_openapi`]: positive shape check (`openapi`, `info`, `paths`)
//!
//! Extraction is JSON-only. YAML documents must be converted before they
//! reach this module.

pub mod endpoint;
pub mod extract;
pub mod schema;
pub mod validate;

use thiserror::Error;

pub use endpoint::{EndpointDescriptor, HttpMethod, NO_DESCRIPTION};
pub use extract::{SpecInput, parse, skipped_entries};
pub use validate::is_valid_openapi;

/// Errors raised when a document cannot be turned into endpoints.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON in OpenAPI document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected OpenAPI document shape: {0}")]
    Shape(String),
}
