//! Serde-deserializable structs matching the OpenAPI subset we need.
//!
//! Only `paths` is traversed. `openapi` and `info` are kept as raw values
//! so their presence can be checked without constraining their shape.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Top-level OpenAPI document (subset).
#[derive(Debug, Default, Deserialize)]
pub struct OpenApiDoc {
    #[serde(default)]
    pub openapi: Option<Value>,
    #[serde(default)]
    pub info: Option<Value>,
    /// Path pattern → path item, in source order.
    #[serde(default)]
    pub paths: Option<IndexMap<String, PathItem>>,
}

/// A single path item: method name (any case) → raw operation value.
///
/// Kept untyped because path items may also carry non-method keys such as
/// `parameters` or `servers`, which have different shapes.
pub type PathItem = IndexMap<String, Value>;

/// An HTTP operation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub parameters: Option<Vec<Value>>,
    #[serde(default)]
    pub request_body: Option<Value>,
}
