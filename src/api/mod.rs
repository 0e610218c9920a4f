//! API Module
//!
//! HTTP handlers and routing for the secret vault JSON API.
//!
//! # Endpoints
//! - `POST /secret` - Store an encrypted secret, returns its token
//! - `GET /secret/:id` - Reveal a secret (placeholder for link previewers)
//! - `DELETE /secret/:id` - Destroy a secret
//! - `GET /health` - Health check endpoint

pub mod crawler;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
