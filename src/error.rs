//! Error types for the secret vault
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Vault Error Enum ==
/// Unified error type for the secret vault.
///
/// `NotFound` is a normal outcome of a lookup and is kept apart from
/// `Backend`, so an outage is never reported as a missing secret.
#[derive(Error, Debug)]
pub enum VaultError {
    /// Rejected input (missing payload, bad TTL, oversized body)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Token absent or expired
    #[error("Secret not found: {0}")]
    NotFound(String),

    /// The active backend could not complete an operation
    #[error("Backend failure: {0}")]
    Backend(String),

    /// The backend could not be initialised at process start
    #[error("Startup failure: {0}")]
    Startup(String),
}

impl From<redis::RedisError> for VaultError {
    fn from(err: redis::RedisError) -> Self {
        VaultError::Backend(err.to_string())
    }
}

/// Malformed or mistyped request bodies are client input errors.
impl From<JsonRejection> for VaultError {
    fn from(rejection: JsonRejection) -> Self {
        VaultError::InvalidInput(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for VaultError {
    fn into_response(self) -> Response {
        let status = match &self {
            VaultError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            VaultError::NotFound(_) => StatusCode::NOT_FOUND,
            VaultError::Backend(_) => StatusCode::SERVICE_UNAVAILABLE,
            VaultError::Startup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the secret vault.
pub type Result<T> = std::result::Result<T, VaultError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_status_codes() {
        let cases = vec![
            (VaultError::InvalidInput("ttl".into()), StatusCode::BAD_REQUEST),
            (VaultError::NotFound("abc".into()), StatusCode::NOT_FOUND),
            (VaultError::Backend("down".into()), StatusCode::SERVICE_UNAVAILABLE),
            (VaultError::Startup("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[tokio::test]
    async fn test_error_body_is_json() {
        let response = VaultError::Backend("connection refused".into()).into_response();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            json["error"].as_str().unwrap(),
            "Backend failure: connection refused"
        );
    }
}
