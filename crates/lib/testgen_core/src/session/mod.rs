//! Review session: one parse-and-review cycle over an OpenAPI document.
//!
//! Holds the raw document text, the endpoints extracted from it, the single
//! selected endpoint and the state of the autotest generation request.
//! Nothing here is persisted; [`ReviewSession::reset`] drops it all.

pub mod state;

use thiserror::Error;

use crate::models::{GenerateAutotestRequest, TestType};
use crate::openapi::{self, EndpointDescriptor, HttpMethod, ParseError};

pub use state::{RequestState, RequestTicket, RequestTracker};

/// An action's preconditions are unmet. Blocks the action locally; no
/// request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    #[error("Load or paste an OpenAPI document first")]
    NoDocument,

    #[error("Select an endpoint first")]
    NoEndpointSelected,

    #[error("A generation request is already in progress")]
    RequestInFlight,

    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Errors raised by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Outcome of [`ReviewSession::finish_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The document was applied; holds the number of endpoints found.
    Applied(usize),
    /// A newer load was started; this one was discarded.
    Stale,
}

#[derive(Debug, Default)]
pub struct ReviewSession {
    document: Option<String>,
    endpoints: Vec<EndpointDescriptor>,
    selected: Option<EndpointDescriptor>,
    loads: RequestTracker<()>,
    generation: RequestTracker<String>,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document and re-extract its endpoints.
    ///
    /// Clears the selection and any generated code. On failure the session
    /// holds no document and no endpoints, so a parse failure can never be
    /// mistaken for an empty document.
    pub fn load_document(
        &mut self,
        text: impl Into<String>,
    ) -> Result<&[EndpointDescriptor], ParseError> {
        let text = text.into();
        self.clear_selection();
        self.generation.reset();

        match openapi::parse(text.as_str()) {
            Ok(endpoints) => {
                tracing::info!(count = endpoints.len(), "loaded OpenAPI document");
                self.endpoints = endpoints;
                self.document = Some(text);
                Ok(&self.endpoints)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse OpenAPI document");
                self.endpoints.clear();
                self.document = None;
                Err(e)
            }
        }
    }

    /// Start an asynchronous document load (e.g. a file read).
    pub fn begin_load(&mut self) -> RequestTicket {
        self.loads.begin()
    }

    /// Apply the text of a load started with [`begin_load`](Self::begin_load).
    ///
    /// Only the most recently started load is applied; older ones report
    /// [`LoadOutcome::Stale`] and leave the session untouched.
    pub fn finish_load(
        &mut self,
        ticket: RequestTicket,
        text: impl Into<String>,
    ) -> Result<LoadOutcome, ParseError> {
        if !self.loads.complete::<ParseError>(ticket, Ok(())) {
            return Ok(LoadOutcome::Stale);
        }
        let count = self.load_document(text)?.len();
        Ok(LoadOutcome::Applied(count))
    }

    /// Record that a load started with [`begin_load`](Self::begin_load)
    /// could not produce any text. The current document is kept. Returns
    /// `false` for a stale ticket.
    pub fn fail_load<E: std::fmt::Display>(&mut self, ticket: RequestTicket, error: E) -> bool {
        self.loads.complete::<E>(ticket, Err(error))
    }

    pub fn load_state(&self) -> &RequestState<()> {
        self.loads.state()
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn endpoints(&self) -> &[EndpointDescriptor] {
        &self.endpoints
    }

    pub fn selected(&self) -> Option<&EndpointDescriptor> {
        self.selected.as_ref()
    }

    /// Select an endpoint by key, replacing any previous selection.
    pub fn select(&mut self, key: &str) -> Result<&EndpointDescriptor, SessionError> {
        let endpoint = self
            .endpoints
            .iter()
            .find(|e| e.key == key)
            .cloned()
            .ok_or_else(|| SessionError::UnknownEndpoint(key.to_string()))?;
        Ok(self.selected.insert(endpoint))
    }

    /// Select an endpoint by method and path, replacing any previous selection.
    pub fn select_route(
        &mut self,
        method: HttpMethod,
        path: &str,
    ) -> Result<&EndpointDescriptor, SessionError> {
        let key = self
            .endpoints
            .iter()
            .find(|e| e.method == method && e.path == path)
            .map(|e| e.key.clone())
            .ok_or_else(|| SessionError::UnknownEndpoint(format!("{method} {path}")))?;
        self.select(&key)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Build the autotest request for the current selection.
    ///
    /// Only the raw document text and the selected method/path are sent.
    pub fn autotest_request(&self) -> Result<GenerateAutotestRequest, ValidationWarning> {
        let document = self.document.as_ref().ok_or(ValidationWarning::NoDocument)?;
        let selected = self
            .selected
            .as_ref()
            .ok_or(ValidationWarning::NoEndpointSelected)?;

        Ok(GenerateAutotestRequest {
            target: TestType::Api,
            openapi_spec: Some(document.clone()),
            method: Some(selected.method),
            path: Some(selected.path.clone()),
            scenario: None,
        })
    }

    /// Validate preconditions and mark generation as in flight.
    pub fn begin_generation(
        &mut self,
    ) -> Result<(RequestTicket, GenerateAutotestRequest), ValidationWarning> {
        if self.generation.is_busy() {
            return Err(ValidationWarning::RequestInFlight);
        }
        let request = self.autotest_request()?;
        Ok((self.generation.begin(), request))
    }

    /// Record the result of a generation request. Returns `false` for a
    /// stale ticket.
    pub fn finish_generation<E: std::fmt::Display>(
        &mut self,
        ticket: RequestTicket,
        result: Result<String, E>,
    ) -> bool {
        self.generation.complete(ticket, result)
    }

    pub fn generation(&self) -> &RequestState<String> {
        self.generation.state()
    }

    pub fn generated_code(&self) -> Option<&str> {
        self.generation.value().map(String::as_str)
    }

    /// Drop the document, endpoints, selection and generated code.
    pub fn reset(&mut self) {
        self.document = None;
        self.endpoints.clear();
        self.selected = None;
        self.loads.reset();
        self.generation.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"openapi":"3.0.0","info":{},"paths":{
        "/users":{"get":{"summary":"List users"},"post":{"requestBody":{}}},
        "/users/{id}":{"delete":{"parameters":[{"name":"id"}]}}
    }}"#;

    fn loaded() -> ReviewSession {
        let mut session = ReviewSession::new();
        session.load_document(DOC).expect("load");
        session
    }

    #[test]
    fn load_extracts_endpoints() {
        let session = loaded();
        assert_eq!(session.endpoints().len(), 3);
        assert_eq!(session.document(), Some(DOC));
        assert!(session.selected().is_none());
    }

    #[test]
    fn select_replaces_previous_selection() {
        let mut session = loaded();
        session.select("get:/users").expect("select get");
        session.select("post:/users").expect("select post");
        assert_eq!(session.selected().map(|e| e.key.as_str()), Some("post:/users"));
    }

    #[test]
    fn select_unknown_key_keeps_selection() {
        let mut session = loaded();
        session.select("get:/users").expect("select");
        let err = session.select("put:/nowhere").unwrap_err();
        assert!(matches!(err, SessionError::UnknownEndpoint(_)));
        assert_eq!(session.selected().map(|e| e.key.as_str()), Some("get:/users"));
    }

    #[test]
    fn select_route_matches_method_and_path() {
        let mut session = loaded();
        let endpoint = session
            .select_route(HttpMethod::Delete, "/users/{id}")
            .expect("select");
        assert_eq!(endpoint.parameter_count, 1);
    }

    #[test]
    fn loading_a_new_document_clears_selection() {
        let mut session = loaded();
        session.select("get:/users").expect("select");
        session
            .load_document(r#"{"paths":{"/x":{"get":{}}}}"#)
            .expect("reload");
        assert!(session.selected().is_none());
        assert_eq!(session.endpoints().len(), 1);
    }

    #[test]
    fn failed_load_is_distinct_from_empty_document() {
        let mut session = loaded();
        assert!(session.load_document("{not valid json").is_err());
        assert!(session.document().is_none());
        assert!(session.endpoints().is_empty());

        let endpoints = session.load_document(r#"{"paths":{}}"#).expect("empty ok");
        assert!(endpoints.is_empty());
        assert!(session.document().is_some());
    }

    #[test]
    fn generation_without_selection_is_rejected() {
        let mut session = loaded();
        assert_eq!(
            session.begin_generation().unwrap_err(),
            ValidationWarning::NoEndpointSelected
        );
        assert_eq!(session.generation(), &RequestState::Idle);
    }

    #[test]
    fn generation_without_document_is_rejected() {
        let mut session = ReviewSession::new();
        assert_eq!(
            session.autotest_request().unwrap_err(),
            ValidationWarning::NoDocument
        );
    }

    #[test]
    fn autotest_request_carries_raw_document_and_route_only() {
        let mut session = loaded();
        session.select("post:/users").expect("select");
        let req = session.autotest_request().expect("request");
        assert_eq!(req.target, TestType::Api);
        assert_eq!(req.openapi_spec.as_deref(), Some(DOC));
        assert_eq!(req.method, Some(HttpMethod::Post));
        assert_eq!(req.path.as_deref(), Some("/users"));

        let json = serde_json::to_value(&req).expect("serialize");
        assert!(json.get("summary").is_none());
        assert!(json.get("hasBody").is_none());
    }

    #[test]
    fn second_generation_is_refused_while_busy() {
        let mut session = loaded();
        session.select("get:/users").expect("select");
        let (ticket, _) = session.begin_generation().expect("begin");
        assert_eq!(
            session.begin_generation().unwrap_err(),
            ValidationWarning::RequestInFlight
        );
        assert!(session.finish_generation::<String>(ticket, Ok("def test(): pass".into())));
        assert_eq!(session.generated_code(), Some("def test(): pass"));
    }

    #[test]
    fn failed_generation_is_recorded() {
        let mut session = loaded();
        session.select("get:/users").expect("select");
        let (ticket, _) = session.begin_generation().expect("begin");
        assert!(session.finish_generation(ticket, Err("Network error")));
        assert_eq!(
            session.generation(),
            &RequestState::Failed("Network error".to_string())
        );
        assert!(session.generated_code().is_none());
    }

    #[test]
    fn generation_result_after_reload_is_dropped() {
        let mut session = loaded();
        session.select("get:/users").expect("select");
        let (ticket, _) = session.begin_generation().expect("begin");
        session.load_document(DOC).expect("reload");
        assert!(!session.finish_generation::<String>(ticket, Ok("late".into())));
        assert!(session.generated_code().is_none());
    }

    #[test]
    fn latest_load_wins() {
        let mut session = ReviewSession::new();
        let first = session.begin_load();
        let second = session.begin_load();

        let applied = session
            .finish_load(second, r#"{"paths":{"/second":{"get":{}}}}"#)
            .expect("second");
        assert_eq!(applied, LoadOutcome::Applied(1));

        let stale = session
            .finish_load(first, r#"{"paths":{"/first":{"get":{},"post":{}}}}"#)
            .expect("first");
        assert_eq!(stale, LoadOutcome::Stale);
        assert_eq!(session.endpoints()[0].path, "/second");
    }

    #[test]
    fn failed_read_ends_the_load() {
        let mut session = loaded();
        let ticket = session.begin_load();
        assert!(session.fail_load(ticket, "permission denied"));
        assert_eq!(
            session.load_state(),
            &RequestState::Failed("permission denied".into())
        );
        assert_eq!(session.endpoints().len(), 3);

        let next = session.begin_load();
        let applied = session
            .finish_load(next, r#"{"paths":{"/next":{"get":{}}}}"#)
            .expect("next");
        assert_eq!(applied, LoadOutcome::Applied(1));
    }

    #[test]
    fn failed_read_of_superseded_load_is_ignored() {
        let mut session = ReviewSession::new();
        let first = session.begin_load();
        let second = session.begin_load();
        assert!(!session.fail_load(first, "gone"));
        assert!(matches!(session.load_state(), RequestState::Loading(t) if *t == second));
    }

    #[test]
    fn reset_drops_everything() {
        let mut session = loaded();
        session.select("get:/users").expect("select");
        session.reset();
        assert!(session.document().is_none());
        assert!(session.endpoints().is_empty());
        assert!(session.selected().is_none());
        assert_eq!(session.generation(), &RequestState::Idle);
    }
}
