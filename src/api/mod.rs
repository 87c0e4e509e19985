//! HTTP access to the task gateway.
//!
//! [`ApiClient`] is the one place requests are built: it attaches the bearer
//! token, encodes JSON bodies, and classifies every outcome into a
//! [`FetchError`]. Providers turn those errors into a single message string.

pub mod client;

pub use client::ApiClient;
pub use reqwest::Method;

use crate::session::SessionError;
use crate::validation::ValidationError;

/// Everything that can go wrong between a provider and the gateway.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// An authorized call was attempted with no stored token. No request was sent.
    #[error("Authentication token not found")]
    Auth,

    /// The gateway answered with a non-2xx status.
    #[error("{}", .message.as_deref().unwrap_or("Request failed"))]
    Api { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body was not JSON, or not the expected shape.
    #[error("Invalid response: {0}")]
    Parse(String),

    #[error("Could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Session(#[from] SessionError),
}

impl FetchError {
    /// The single message a provider keeps in its error state: the gateway's
    /// own message when it sent one, `fallback` when it did not, and the
    /// error's description for local failures.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            FetchError::Api { message: Some(message), .. } => message.clone(),
            FetchError::Api { message: None, .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FetchError::Auth | FetchError::Api { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_prefers_server_text() {
        let err = FetchError::Api {
            status: 401,
            message: Some("Token expired".to_string()),
        };
        assert_eq!(err.message_or("Failed to fetch tasks"), "Token expired");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn message_falls_back_when_server_is_silent() {
        let err = FetchError::Api { status: 500, message: None };
        assert_eq!(err.message_or("Failed to fetch tasks"), "Failed to fetch tasks");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn local_errors_describe_themselves() {
        assert_eq!(FetchError::Auth.message_or("ignored"), "Authentication token not found");
        let err = FetchError::from(ValidationError::CategoryLength);
        assert_eq!(err.message_or("ignored"), "Category name must be between 3 and 25 characters");
    }
}
