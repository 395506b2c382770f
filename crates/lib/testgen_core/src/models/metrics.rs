//! Metrics and health payloads.
//!
//! Every numeric field is optional: the backend omits them when it has no
//! data yet, and the display layer shows that distinctly from zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `GET /metrics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentMetrics {
    pub total_requests: Option<u64>,
    pub successful_requests: Option<u64>,
    pub failed_requests: Option<u64>,
    pub avg_generation_time_ms: Option<f64>,
    pub cache_hit_rate: Option<f64>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub successful: Option<u64>,
    pub failed: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /metrics/summary?hours=N`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSummary {
    pub requests_by_type: BTreeMap<String, u64>,
    pub success_rate: Option<f64>,
    pub avg_generation_time_ms: Option<f64>,
    pub p95_generation_time_ms: Option<f64>,
    pub avg_response_length: Option<f64>,
    /// Set instead of the figures when the window holds no data.
    pub message: Option<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_tolerate_missing_fields() {
        let m: AgentMetrics = serde_json::from_str(r#"{"total_requests":4,"extra_field":1}"#)
            .expect("parse");
        assert_eq!(m.total_requests, Some(4));
        assert!(m.cache_hit_rate.is_none());
        assert_eq!(m.extra["extra_field"], 1);
    }

    #[test]
    fn empty_summary_carries_message() {
        let s: MetricsSummary =
            serde_json::from_str(r#"{"message":"no data for period"}"#).expect("parse");
        assert!(s.requests_by_type.is_empty());
        assert_eq!(s.message.as_deref(), Some("no data for period"));
    }
}
