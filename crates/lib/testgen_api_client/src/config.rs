//! Client configuration.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the backend client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "http://localhost:8000").
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Token used in place of the token store. Held in memory, never persisted.
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token: None,
        }
    }
}

impl ClientConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable               | Default                 |
    /// |------------------------|-------------------------|
    /// | `TESTGEN_API_BASE_URL` | `http://localhost:8000` |
    /// | `TESTGEN_TIMEOUT_SECS` | `30`                    |
    /// | `TESTGEN_TOKEN`        | unset                   |
    pub fn from_env() -> Self {
        let timeout_secs = std::env::var("TESTGEN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url: std::env::var("TESTGEN_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            timeout: Duration::from_secs(timeout_secs),
            token: std::env::var("TESTGEN_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.token.is_none());
    }

    #[test]
    fn builders_override_fields() {
        let config = ClientConfig::default()
            .with_base_url("http://backend:9000")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://backend:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
