//! Errors produced at the authentication collaborator boundary.
//!
//! ERROR HANDLING
//! ==============
//! Only these reach the user, and only as opaque text: the backend's own
//! `message` when it sent one, a generic fallback otherwise. Guard denials and
//! unknown roles are navigation outcomes, not errors.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::{Deserialize, Serialize};

pub const AUTH_REJECTED_FALLBACK: &str = "Login failed. Check your details and try again.";
pub const NETWORK_UNAVAILABLE_MESSAGE: &str = "Unable to reach the server. Please try again later.";

/// Failure body returned by the backend: `{ error, status, message }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiFailure {
    /// Parse a failure body, tolerating empty or non-JSON payloads.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The backend declined the request.
    #[error("{}", .message.as_deref().unwrap_or(AUTH_REJECTED_FALLBACK))]
    Rejected { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("Unable to reach the server. Please try again later.")]
    NetworkUnavailable,
}

impl AuthError {
    /// Build a rejection from an HTTP status and the raw response body.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = ApiFailure::from_body(body)
            .and_then(|failure| failure.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());
        Self::Rejected { status, message }
    }

    /// Text to show the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
