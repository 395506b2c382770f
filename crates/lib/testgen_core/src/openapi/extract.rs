//! Endpoint extraction: walks `paths` and emits one descriptor per
//! recognized method, in document order.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use super::ParseError;
use super::endpoint::{EndpointDescriptor, HttpMethod, NO_DESCRIPTION};
use super::schema::{OpenApiDoc, Operation};

/// Raw input accepted by [`parse`].
#[derive(Debug, Clone, Copy)]
pub enum SpecInput<'a> {
    /// JSON text, decoded before extraction.
    Text(&'a str),
    /// An already-decoded document.
    Document(&'a Value),
}

impl<'a> From<&'a str> for SpecInput<'a> {
    fn from(text: &'a str) -> Self {
        SpecInput::Text(text)
    }
}

impl<'a> From<&'a String> for SpecInput<'a> {
    fn from(text: &'a String) -> Self {
        SpecInput::Text(text.as_str())
    }
}

impl<'a> From<&'a Value> for SpecInput<'a> {
    fn from(value: &'a Value) -> Self {
        SpecInput::Document(value)
    }
}

/// Extract endpoint descriptors from an OpenAPI document.
///
/// A document without `paths` yields an empty list. Methods outside
/// GET/POST/PUT/PATCH/DELETE are dropped without error.
pub fn parse<'a>(input: impl Into<SpecInput<'a>>) -> Result<Vec<EndpointDescriptor>, ParseError> {
    let doc = decode(input.into())?;
    let endpoints = from_doc(&doc)?;
    debug!(count = endpoints.len(), "extracted endpoints from OpenAPI document");
    Ok(endpoints)
}

/// Count method keys that [`parse`] would drop.
///
/// Path-level keys that are not methods (`parameters`, `servers`, ...)
/// are counted too, since they are indistinguishable by name alone.
pub fn skipped_entries<'a>(input: impl Into<SpecInput<'a>>) -> Result<usize, ParseError> {
    let doc = decode(input.into())?;
    let skipped = doc
        .paths
        .iter()
        .flat_map(|paths| paths.values())
        .flat_map(|item| item.keys())
        .filter(|key| HttpMethod::parse(key).is_none())
        .count();
    Ok(skipped)
}

/// Flatten an already-typed document.
pub fn from_doc(doc: &OpenApiDoc) -> Result<Vec<EndpointDescriptor>, ParseError> {
    let Some(paths) = &doc.paths else {
        return Ok(Vec::new());
    };

    let mut endpoints = Vec::new();
    for (path, item) in paths {
        for (method_key, raw) in item {
            let Some(method) = HttpMethod::parse(method_key) else {
                trace!(method = %method_key, path = %path, "skipping unrecognized method");
                continue;
            };

            let op = Operation::deserialize(raw)
                .map_err(|e| ParseError::Shape(format!("operation {method_key} {path}: {e}")))?;

            endpoints.push(EndpointDescriptor {
                key: EndpointDescriptor::make_key(method_key, path),
                method,
                path: path.clone(),
                summary: op
                    .summary
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                parameter_count: op.parameters.as_ref().map_or(0, Vec::len),
                has_body: op.request_body.is_some(),
            });
        }
    }

    Ok(endpoints)
}

fn decode(input: SpecInput<'_>) -> Result<OpenApiDoc, ParseError> {
    match input {
        SpecInput::Text(text) => {
            let value: Value = serde_json::from_str(text)?;
            decode_value(&value)
        }
        SpecInput::Document(value) => decode_value(value),
    }
}

fn decode_value(value: &Value) -> Result<OpenApiDoc, ParseError> {
    if !value.is_object() {
        return Err(ParseError::Shape(format!(
            "document must be a JSON object, found {}",
            kind(value)
        )));
    }
    OpenApiDoc::deserialize(value).map_err(|e| ParseError::Shape(e.to_string()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const USERS_DOC: &str = r#"{"paths":{"/users":{"get":{"summary":"List users"},"post":{"requestBody":{},"parameters":[{"name":"x"}]}}}}"#;

    #[test]
    fn empty_summary_falls_back_to_no_description() {
        let endpoints = parse(r#"{"paths":{"/a":{"get":{"summary":""}}}}"#).expect("parse");
        assert_eq!(endpoints[0].summary, NO_DESCRIPTION);
    }

    #[test]
    fn end_to_end_example() {
        let endpoints = parse(USERS_DOC).expect("parse");
        assert_eq!(
            endpoints,
            vec![
                EndpointDescriptor {
                    key: "get:/users".into(),
                    method: HttpMethod::Get,
                    path: "/users".into(),
                    summary: "List users".into(),
                    parameter_count: 0,
                    has_body: false,
                },
                EndpointDescriptor {
                    key: "post:/users".into(),
                    method: HttpMethod::Post,
                    path: "/users".into(),
                    summary: "No description".into(),
                    parameter_count: 1,
                    has_body: true,
                },
            ]
        );
    }

    #[test]
    fn parsing_twice_gives_equal_results() {
        let first = parse(USERS_DOC).expect("first");
        let second = parse(USERS_DOC).expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn unrecognized_methods_are_dropped() {
        let doc = r#"{"paths":{"/a":{"head":{},"get":{},"OPTIONS":{},"trace":{},"Delete":{}}}}"#;
        let endpoints = parse(doc).expect("parse");
        let keys: Vec<&str> = endpoints.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["get:/a", "Delete:/a"]);
        assert_eq!(endpoints[1].method, HttpMethod::Delete);
        assert_eq!(skipped_entries(doc).expect("skipped"), 3);
    }

    #[test]
    fn path_level_keys_are_not_operations() {
        let doc = r#"{"paths":{"/a":{"parameters":[{"name":"id"}],"summary":"x","put":{}}}}"#;
        let endpoints = parse(doc).expect("parse");
        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].method, HttpMethod::Put);
    }

    #[test]
    fn order_follows_the_document() {
        let doc = r#"{"paths":{
            "/zeta":{"post":{},"get":{}},
            "/alpha":{"delete":{},"patch":{}}
        }}"#;
        let keys: Vec<String> = parse(doc)
            .expect("parse")
            .into_iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(
            keys,
            vec!["post:/zeta", "get:/zeta", "delete:/alpha", "patch:/alpha"]
        );
    }

    #[test]
    fn parameters_are_counted() {
        let doc = r#"{"paths":{"/p":{"get":{"parameters":[{},{},{}]},"post":{}}}}"#;
        let endpoints = parse(doc).expect("parse");
        assert_eq!(endpoints[0].parameter_count, 3);
        assert_eq!(endpoints[1].parameter_count, 0);
    }

    #[test]
    fn request_body_presence_sets_has_body() {
        let doc = r#"{"paths":{"/b":{"post":{"requestBody":{"content":{}}},"put":{"requestBody":null},"patch":{}}}}"#;
        let endpoints = parse(doc).expect("parse");
        assert!(endpoints[0].has_body);
        assert!(!endpoints[1].has_body);
        assert!(!endpoints[2].has_body);
    }

    #[test]
    fn empty_paths_is_a_valid_empty_result() {
        let endpoints = parse(r#"{"openapi":"3.0.0","info":{},"paths":{}}"#).expect("parse");
        assert!(endpoints.is_empty());
    }

    #[test]
    fn missing_paths_is_a_valid_empty_result() {
        let endpoints = parse(r#"{"openapi":"3.0.0","info":{"title":"t"}}"#).expect("parse");
        assert!(endpoints.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse("{not valid json").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)), "got {err:?}");
    }

    #[test]
    fn non_object_document_is_a_shape_error() {
        let err = parse("[1, 2]").unwrap_err();
        assert!(matches!(err, ParseError::Shape(_)), "got {err:?}");
    }

    #[test]
    fn non_object_operation_is_a_shape_error() {
        let err = parse(r#"{"paths":{"/a":{"get":"nope"}}}"#).unwrap_err();
        match err {
            ParseError::Shape(msg) => assert!(msg.contains("get /a"), "unexpected message: {msg}"),
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn structured_input_is_not_mutated() {
        let doc = json!({"paths": {"/users": {"get": {"summary": "List users"}, "head": {}}}});
        let before = doc.clone();
        let endpoints = parse(&doc).expect("parse");
        assert_eq!(endpoints.len(), 1);
        assert_eq!(doc, before);
    }

    #[test]
    fn yaml_text_is_rejected_as_json() {
        let err = parse("openapi: 3.0.0\npaths: {}\n").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }
}
