//! API Routes
//!
//! Configures the Axum router with all secret vault endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_secret_handler, delete_secret_handler, health_handler, reveal_secret_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /secret` - Store an encrypted secret
/// - `GET /secret/:id` - Reveal a secret
/// - `DELETE /secret/:id` - Destroy a secret
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/secret", post(create_secret_handler))
        .route(
            "/secret/:id",
            get(reveal_secret_handler).delete(delete_secret_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
