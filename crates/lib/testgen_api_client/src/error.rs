//! Client error types.

use thiserror::Error;

/// Convenience alias for client return types.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend could not be reached or did not answer in time.
    #[error("Network error. Please check your connection. ({0})")]
    Network(String),

    /// The backend rejected the credentials; the stored token was cleared.
    #[error("Unauthorized: stored token cleared, please log in again")]
    Unauthorized,

    /// Non-2xx response. `message` is passed through from the payload.
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Unexpected response from backend: {0}")]
    Decode(String),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("HTTP client setup failed: {0}")]
    Build(String),
}

impl ClientError {
    /// Whether retrying the same action might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}

/// Pick a human-readable message out of an error payload.
///
/// Looks at `message`, then `detail` (string or list of `{msg}` objects),
/// and falls back to the raw body.
pub(crate) fn error_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_string();
    };

    if let Some(msg) = json.get("message").and_then(|v| v.as_str()) {
        return msg.to_string();
    }

    match json.get("detail") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(|i| i.get("msg").and_then(|m| m.as_str()))
            .collect::<Vec<_>>()
            .join("; "),
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_wins() {
        assert_eq!(
            error_message(r#"{"message":"LLM quota exceeded","detail":"x"}"#),
            "LLM quota exceeded"
        );
    }

    #[test]
    fn detail_string_and_list() {
        assert_eq!(error_message(r#"{"detail":"Not Found"}"#), "Not Found");
        assert_eq!(
            error_message(r#"{"detail":[{"msg":"field required"},{"msg":"bad type"}]}"#),
            "field required; bad type"
        );
    }

    #[test]
    fn non_json_body_is_passed_through() {
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn only_network_errors_are_retryable() {
        assert!(ClientError::Network("timeout".into()).is_retryable());
        assert!(!ClientError::Unauthorized.is_retryable());
        assert!(
            !ClientError::Backend {
                status: 500,
                message: "boom".into()
            }
            .is_retryable()
        );
    }
}
