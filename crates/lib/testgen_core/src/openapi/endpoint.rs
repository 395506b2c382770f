//! Endpoint descriptors: display-ready summaries of OpenAPI operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Summary used when an operation carries none.
pub const NO_DESCRIPTION: &str = "No description";

/// HTTP methods the extractor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Case-insensitive lookup; `None` for anything outside the recognized set.
    pub fn parse(name: &str) -> Option<Self> {
        let upper = name.to_ascii_uppercase();
        Self::ALL.into_iter().find(|m| m.as_str() == upper)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a method name is not one of the recognized five.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported HTTP method: {0}")]
pub struct UnsupportedMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnsupportedMethod(s.to_string()))
    }
}

/// One operation of an OpenAPI document, flattened for display and selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    /// `<method as written>:<path>`, unique within one extraction result.
    pub key: String,
    pub method: HttpMethod,
    pub path: String,
    pub summary: String,
    pub parameter_count: usize,
    pub has_body: bool,
}

impl EndpointDescriptor {
    /// Build the key for a method/path pair, preserving the method's source spelling.
    pub fn make_key(method_key: &str, path: &str) -> String {
        format!("{method_key}:{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(HttpMethod::parse("get"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::parse("Patch"), Some(HttpMethod::Patch));
        assert_eq!(HttpMethod::parse("DELETE"), Some(HttpMethod::Delete));
    }

    #[test]
    fn parse_rejects_other_methods() {
        for name in ["head", "OPTIONS", "trace", "parameters", ""] {
            assert_eq!(HttpMethod::parse(name), None, "{name} should be rejected");
        }
    }

    #[test]
    fn from_str_reports_the_offending_name() {
        let err = "connect".parse::<HttpMethod>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported HTTP method: connect");
    }

    #[test]
    fn descriptor_serializes_camel_case() {
        let descriptor = EndpointDescriptor {
            key: EndpointDescriptor::make_key("get", "/users"),
            method: HttpMethod::Get,
            path: "/users".into(),
            summary: NO_DESCRIPTION.into(),
            parameter_count: 2,
            has_body: false,
        };
        let json = serde_json::to_value(&descriptor).expect("serialize");
        assert_eq!(json["key"], "get:/users");
        assert_eq!(json["method"], "GET");
        assert_eq!(json["parameterCount"], 2);
        assert_eq!(json["hasBody"], false);
    }
}
