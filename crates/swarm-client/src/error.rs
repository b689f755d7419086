//! Error taxonomy for consensus service calls.
//!
//! Every failure of a client call is represented here. The client core does
//! not retry or swallow failures; each variant propagates to the caller
//! exactly once, and the caller decides presentation.

use thiserror::Error;

/// Failure of a single call to the consensus service.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The network call could not complete (connect, DNS, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// Server reachable but returned a non-success status.
    ///
    /// `message` is the response body when the server sent one, otherwise
    /// `"HTTP <code>"`. Display renders the message alone so server-provided
    /// text (e.g. `"rate limited"`) reaches the user verbatim.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Success status but the body did not parse as a consensus result.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The cancellation token fired before an outcome arrived.
    #[error("request cancelled")]
    Cancelled,
}

impl RequestError {
    /// Build a `Status` error from a non-success response.
    ///
    /// An empty body degrades to a status-code-derived message, matching
    /// the service's original client contract.
    pub fn from_status(status: u16, body: String) -> Self {
        let message = if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body
        };
        Self::Status { status, message }
    }

    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` if this outcome was a cooperative cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
