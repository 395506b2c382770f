//! Wire models shared by the core session logic and the HTTP client.
//!
//! Field names follow the backend's snake_case JSON.

pub mod generation;
pub mod metrics;
pub mod validation;

pub use generation::{
    GenerateAutotestRequest, GenerateCodeResponse, GenerateTestcaseRequest, Priority, TestType,
};
pub use metrics::{AgentMetrics, HealthStatus, MetricsSummary};
pub use validation::{Severity, ValidateTestcaseRequest, ValidationIssue, ValidationReport};
