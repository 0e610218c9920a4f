//! API Handlers
//!
//! HTTP request handlers for each secret vault endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{
        header::{CACHE_CONTROL, PRAGMA, USER_AGENT},
        HeaderMap, HeaderName,
    },
    response::{IntoResponse, Response},
    Json,
};
use tokio::task::JoinHandle;
use tracing::info;

use crate::api::crawler::is_link_previewer;
use crate::config::{BackendKind, Config};
use crate::error::{Result, VaultError};
use crate::models::{
    CreateSecretRequest, CreateSecretResponse, DeleteResponse, HealthResponse, RevealResponse,
};
use crate::store::{Backend, InMemoryBackend, RedisBackend, Reveal, SecretVault};
use crate::tasks::spawn_sweep_task;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Vault over the backend selected at startup
    pub vault: SecretVault,
    /// Largest accepted payload in bytes
    pub max_secret_size: usize,
}

impl AppState {
    /// Creates a new AppState over the given backend.
    pub fn new(backend: Arc<dyn Backend>, max_secret_size: usize) -> Self {
        Self {
            vault: SecretVault::new(backend),
            max_secret_size,
        }
    }

    /// Builds the backend named by the configuration.
    ///
    /// For the in-memory backend the expiry sweeper is started and its handle
    /// returned. For Redis the connection is opened here; failing to reach
    /// Redis is a `Startup` error.
    pub async fn from_config(config: &Config) -> Result<(Self, Option<JoinHandle<()>>)> {
        let (backend, sweep_handle): (Arc<dyn Backend>, Option<JoinHandle<()>>) =
            match config.backend {
                BackendKind::Memory => {
                    let backend = InMemoryBackend::new();
                    let handle = spawn_sweep_task(backend.clone(), config.sweep_interval);
                    (Arc::new(backend) as Arc<dyn Backend>, Some(handle))
                }
                BackendKind::Redis => {
                    let backend = RedisBackend::connect(&config.redis_url).await?;
                    (Arc::new(backend) as Arc<dyn Backend>, None)
                }
            };

        info!("Using {} backend", backend.name());
        Ok((Self::new(backend, config.max_secret_size), sweep_handle))
    }
}

/// Handler for POST /secret
///
/// Stores an encrypted secret and returns its token.
///
/// Body rejections (bad JSON, wrong content type, mistyped fields) are
/// reported as `InvalidInput` with the usual JSON error body.
pub async fn create_secret_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<CreateSecretRequest>, JsonRejection>,
) -> Result<Json<CreateSecretResponse>> {
    let Json(req) = body?;
    let (payload, lifetime) = req.into_parts(state.max_secret_size)?;

    let id = state.vault.create(payload, lifetime).await?;

    Ok(Json(CreateSecretResponse::new(id)))
}

/// Headers discouraging indexing, previews and caching of secret pages.
fn no_preview_headers() -> [(HeaderName, &'static str); 3] {
    [
        (HeaderName::from_static("x-robots-tag"), "noindex, nofollow"),
        (
            CACHE_CONTROL,
            "no-store, no-cache, must-revalidate, max-age=0",
        ),
        (PRAGMA, "no-cache"),
    ]
}

/// Handler for GET /secret/:id
///
/// Reveals a secret, unless the requester looks like a link previewer, in
/// which case a placeholder is returned and storage is not consulted.
/// Reading does not destroy the secret; clients call DELETE once viewed.
pub async fn reveal_secret_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let allow_reveal = !is_link_previewer(user_agent);

    let result = state
        .vault
        .reveal(&id, allow_reveal)
        .await
        .and_then(|outcome| match outcome {
            Reveal::Secret(payload) => Ok(Json(RevealResponse::secret(
                String::from_utf8_lossy(&payload).into_owned(),
            ))),
            Reveal::Placeholder(text) => Ok(Json(RevealResponse::placeholder(text))),
            Reveal::NotFound => Err(VaultError::NotFound(id.clone())),
        });

    (no_preview_headers(), result).into_response()
}

/// Handler for DELETE /secret/:id
///
/// Destroys a secret. Succeeds even if it is already gone.
pub async fn delete_secret_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    state.vault.destroy(&id).await?;

    Ok(Json(DeleteResponse::ok()))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.vault.backend_name()))
}
