//! Response DTOs for the secret API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for POST /secret
#[derive(Debug, Clone, Serialize)]
pub struct CreateSecretResponse {
    /// Token naming the stored secret
    pub id: String,
}

impl CreateSecretResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Response body for GET /secret/:id
#[derive(Debug, Clone, Serialize)]
pub struct RevealResponse {
    /// The stored payload, or the previewer placeholder
    pub secret: String,
    /// True when `secret` is the placeholder served to link previewers
    pub preview: bool,
}

impl RevealResponse {
    pub fn secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            preview: false,
        }
    }

    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            secret: text.into(),
            preview: true,
        }
    }
}

/// Response body for DELETE /secret/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Active storage backend
    pub backend: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(backend: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            backend: backend.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
