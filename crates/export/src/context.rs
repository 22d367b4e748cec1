//! Session context for file name derivation.
//!
//! Responsibilities:
//! - Represent the read-only query/source snapshot of the current search
//!   session.
//! - Define the provider seam the surrounding application implements.
//!
//! Does NOT handle:
//! - Query sanitization (see `filename`).
//! - Any mutation of session state.

use serde::{Deserialize, Serialize};

/// Read-only snapshot of the current search session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Query as typed by the user, possibly containing arbitrary whitespace
    /// and punctuation.
    pub query: String,
    /// Identifier of the data source the results came from.
    pub source: String,
}

impl SessionContext {
    pub fn new(query: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            source: source.into(),
        }
    }
}

/// Source of the current session snapshot, implemented by the surrounding
/// application's state holder. Must answer synchronously at export time.
pub trait SessionContextProvider {
    /// Current session snapshot, or `None` when no session is available.
    fn current(&self) -> Option<SessionContext>;
}

/// Provider backed by a fixed snapshot, for callers that already hold the
/// context by value and for tests.
#[derive(Debug, Clone)]
pub struct FixedContext(pub SessionContext);

impl SessionContextProvider for FixedContext {
    fn current(&self) -> Option<SessionContext> {
        Some(self.0.clone())
    }
}
