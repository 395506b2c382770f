//! Generation request/response models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::openapi::HttpMethod;

/// Kind of test to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    Ui,
    Api,
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Ui => "ui",
            TestType::Api => "api",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ui" => Ok(TestType::Ui),
            "api" => Ok(TestType::Api),
            other => Err(format!("unknown test type '{other}' (expected 'ui' or 'api')")),
        }
    }
}

/// Test case priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Normal,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Normal => "NORMAL",
            Priority::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CRITICAL" => Ok(Priority::Critical),
            "HIGH" => Ok(Priority::High),
            "NORMAL" => Ok(Priority::Normal),
            "LOW" => Ok(Priority::Low),
            other => Err(format!("unknown priority '{other}'")),
        }
    }
}

/// Body of `POST /generate/testcase`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateTestcaseRequest {
    pub test_type: TestType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Body of `POST /generate/autotest`.
///
/// `openapi_spec` is the raw document text; the backend re-derives any
/// endpoint details it needs from it plus `method` and `path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateAutotestRequest {
    pub target: TestType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
}

/// Response of both generation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateCodeResponse {
    pub code: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
