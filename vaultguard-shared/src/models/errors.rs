use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The backend's error body: `{"detail": "..."}`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The human-readable error message.
    pub detail: String,
}

/// Failures surfaced by the API client. Every variant propagates to the
/// caller; the client never retries or swallows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// An authenticated operation was attempted with no stored token.
    /// Raised before any network I/O.
    #[error("not logged in")]
    Unauthenticated,

    /// The backend rejected the credentials or the bearer token.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The backend rejected a registration payload, e.g. a duplicate
    /// email or username.
    #[error("registration failed: {0}")]
    Registration(String),

    /// The requested vault entry does not exist (or belongs to someone else).
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status from the backend.
    #[error("request failed with status {status}: {detail}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The backend-provided message.
        detail: String,
    },

    /// The request never reached the backend.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Wrap a transport-level failure.
    #[must_use]
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{"detail":"Incorrect username or password"}"#;
        let deserialized: ErrorResponse = serde_json::from_str(json).unwrap();

        assert_eq!(deserialized.detail, "Incorrect username or password");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Authentication("Incorrect username or password".to_string());
        assert_eq!(
            err.to_string(),
            "authentication failed: Incorrect username or password"
        );

        let err = ApiError::Unauthenticated;
        assert_eq!(err.to_string(), "not logged in");

        let err = ApiError::Api {
            status: 500,
            detail: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "request failed with status 500: Internal Server Error"
        );
    }

    #[test]
    fn test_network_helper() {
        let err = ApiError::network("connection refused");
        assert_eq!(err, ApiError::Network("connection refused".to_string()));
    }
}
