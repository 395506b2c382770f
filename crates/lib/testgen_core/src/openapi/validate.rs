//! Minimal OpenAPI shape check.

use serde_json::Value;

use super::extract::SpecInput;

/// Returns `true` when the document carries non-empty `openapi`, `info`
/// and `paths` fields. Undecodable text is simply not valid.
pub fn is_valid_openapi<'a>(input: impl Into<SpecInput<'a>>) -> bool {
    match input.into() {
        SpecInput::Text(text) => match serde_json::from_str::<Value>(text) {
            Ok(value) => has_required_fields(&value),
            Err(_) => false,
        },
        SpecInput::Document(value) => has_required_fields(value),
    }
}

fn has_required_fields(value: &Value) -> bool {
    ["openapi", "info", "paths"]
        .iter()
        .all(|field| value.get(*field).is_some_and(is_set))
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
