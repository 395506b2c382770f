//! # testgen_api_client
//!
//! Typed HTTP client for the test generation backend.
//!
//! Every request carries `Authorization: Bearer <token>` when the token
//! store holds one. A 401 clears the store. A token given in
//! [`ClientConfig`] replaces the store for that client and stays in memory.
//! There is no retry, no
//! cancellation and no deduplication: each call resolves exactly once.

pub mod config;
pub mod error;
pub mod token;

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use testgen_core::models::{
    AgentMetrics, GenerateAutotestRequest, GenerateCodeResponse, GenerateTestcaseRequest,
    HealthStatus, MetricsSummary, ValidateTestcaseRequest, ValidationReport,
};

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};

/// Backend route paths.
pub mod routes {
    pub const POST_GENERATE_TESTCASE: &str = "/generate/testcase";
    pub const POST_GENERATE_AUTOTEST: &str = "/generate/autotest";
    pub const POST_VALIDATE_TESTCASE: &str = "/validate/testcase";
    pub const GET_METRICS: &str = "/metrics";
    pub const GET_METRICS_SUMMARY: &str = "/metrics/summary";
    pub const GET_METRICS_PROMETHEUS: &str = "/metrics/prometheus";
    pub const GET_HEALTH: &str = "/health";
}

/// Client for the generation backend.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> ClientResult<Self> {
        url::Url::parse(&config.base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        // A configured token overrides the store for this client only and
        // is never written back to it.
        let tokens: Arc<dyn TokenStore> = match &config.token {
            Some(token) => {
                debug!("using configured token");
                Arc::new(MemoryTokenStore::new(Some(token.clone())))
            }
            None => tokens,
        };

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /generate/testcase`
    pub async fn generate_testcase(
        &self,
        request: &GenerateTestcaseRequest,
    ) -> ClientResult<GenerateCodeResponse> {
        let builder = self.http.post(self.url(routes::POST_GENERATE_TESTCASE)).json(request);
        self.send_json(builder).await
    }

    /// `POST /generate/autotest`
    pub async fn generate_autotest(
        &self,
        request: &GenerateAutotestRequest,
    ) -> ClientResult<GenerateCodeResponse> {
        let builder = self.http.post(self.url(routes::POST_GENERATE_AUTOTEST)).json(request);
        self.send_json(builder).await
    }

    /// `POST /validate/testcase`
    pub async fn validate_testcase(&self, code: &str) -> ClientResult<ValidationReport> {
        let body = ValidateTestcaseRequest {
            code: code.to_string(),
        };
        let builder = self.http.post(self.url(routes::POST_VALIDATE_TESTCASE)).json(&body);
        self.send_json(builder).await
    }

    /// `GET /metrics`
    pub async fn metrics(&self) -> ClientResult<AgentMetrics> {
        self.send_json(self.http.get(self.url(routes::GET_METRICS))).await
    }

    /// `GET /metrics/summary?hours=N`
    pub async fn metrics_summary(&self, hours: u32) -> ClientResult<MetricsSummary> {
        let builder = self
            .http
            .get(self.url(routes::GET_METRICS_SUMMARY))
            .query(&[("hours", hours)]);
        self.send_json(builder).await
    }

    /// `GET /metrics/prometheus`: exposition text, returned verbatim.
    ///
    /// Some deployments wrap the text in a JSON string; that wrapper is
    /// removed.
    pub async fn prometheus_metrics(&self) -> ClientResult<String> {
        let resp = self.execute(self.http.get(self.url(routes::GET_METRICS_PROMETHEUS))).await?;
        let text = resp
            .text()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(match serde_json::from_str::<String>(&text) {
            Ok(unwrapped) => unwrapped,
            Err(_) => text,
        })
    }

    /// `GET /health`
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.send_json(self.http.get(self.url(routes::GET_HEALTH))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let resp = self.execute(builder).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Attach the bearer token, send, and map non-2xx statuses to errors.
    async fn execute(&self, builder: RequestBuilder) -> ClientResult<Response> {
        let builder = match self.tokens.get() {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        };

        let resp = builder.send().await.map_err(|e| {
            error!(error = %e, "network error");
            ClientError::Network(e.to_string())
        })?;

        let status = resp.status();
        debug!(url = %resp.url(), status = status.as_u16(), "backend response");

        if status.is_success() {
            return Ok(resp);
        }

        if status == StatusCode::UNAUTHORIZED {
            warn!("backend returned 401, clearing stored token");
            self.tokens.clear();
            return Err(ClientError::Unauthorized);
        }

        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());
        error!(status = status.as_u16(), body = %body, "API error");

        let message = error::error_message(&body);
        Err(ClientError::Backend {
            status: status.as_u16(),
            message: if message.is_empty() {
                status.to_string()
            } else {
                message
            },
        })
    }
}
