//! OTS Vault - A one-time secret server
//!
//! Stores opaque, client-encrypted blobs behind short-lived tokens, on either
//! an in-process table or a shared Redis instance.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::{BackendKind, Config};
pub use error::VaultError;
pub use store::{Backend, InMemoryBackend, Lifetime, RedisBackend, Reveal, SecretVault};
pub use tasks::spawn_sweep_task;
