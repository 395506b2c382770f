//! Request lifecycle tracking: `Idle → Loading → Success | Failed`.
//!
//! Every `begin` issues a new ticket and supersedes the previous one.
//! Only the latest ticket may complete; completions carrying an older
//! ticket are dropped, so the most recently started request always wins.

use std::fmt;

/// Identifies one started request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Observable state of a tracked request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading(RequestTicket),
    Success(T),
    Failed(String),
}

/// Owns a [`RequestState`] and the ticket counter behind it.
#[derive(Debug, Clone)]
pub struct RequestTracker<T> {
    state: RequestState<T>,
    issued: u64,
}

impl<T> Default for RequestTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestTracker<T> {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            issued: 0,
        }
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, RequestState::Loading(_))
    }

    /// Start a request, superseding any request still in flight.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        let ticket = RequestTicket(self.issued);
        if let RequestState::Loading(previous) = self.state {
            tracing::debug!(
                previous = previous.id(),
                current = ticket.id(),
                "superseding in-flight request"
            );
        }
        self.state = RequestState::Loading(ticket);
        ticket
    }

    /// Apply a completion. Returns `false` (and changes nothing) when the
    /// ticket is not the latest one issued.
    pub fn complete<E: fmt::Display>(&mut self, ticket: RequestTicket, result: Result<T, E>) -> bool {
        if !matches!(self.state, RequestState::Loading(current) if current == ticket) {
            tracing::debug!(ticket = ticket.id(), "ignoring stale completion");
            return false;
        }
        self.state = match result {
            Ok(value) => RequestState::Success(value),
            Err(e) => RequestState::Failed(e.to_string()),
        };
        true
    }

    /// Back to `Idle`. Tickets issued before the reset become stale.
    pub fn reset(&mut self) {
        self.state = RequestState::Idle;
    }

    pub fn value(&self) -> Option<&T> {
        match &self.state {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
