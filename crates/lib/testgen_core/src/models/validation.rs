//! Generated-code validation models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /validate/testcase`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateTestcaseRequest {
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single finding reported by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
    pub severity: Severity,
}

impl ValidationIssue {
    /// `line:column` when known, for compact display.
    pub fn location(&self) -> Option<String> {
        match (self.line, self.column) {
            (Some(line), Some(col)) => Some(format!("{line}:{col}")),
            (Some(line), None) => Some(line.to_string()),
            _ => None,
        }
    }
}

/// Response of `POST /validate/testcase`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    #[serde(default)]
    pub issues: Vec<ValidationIssue>,
    #[serde(default)]
    pub stats: Map<String, Value>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }
}
