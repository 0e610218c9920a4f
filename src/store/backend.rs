//! Backend Contract
//!
//! The uniform storage interface every backend satisfies.

use async_trait::async_trait;

use crate::error::Result;

/// A TTL-aware key/value store over a single flat token namespace.
///
/// Implementations are responsible for enforcing expiry: an entry past its
/// deadline must read as absent even if it has not been reclaimed yet.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Short name used in logs (e.g. "memory", "redis").
    fn name(&self) -> &'static str;

    /// Stores `payload` under `token` for `ttl_seconds`.
    ///
    /// Overwriting an existing token replaces it. `ttl_seconds` must be positive.
    async fn set(&self, token: &str, payload: Vec<u8>, ttl_seconds: u64) -> Result<()>;

    /// Returns the payload, or `None` for unknown or expired tokens.
    async fn get(&self, token: &str) -> Result<Option<Vec<u8>>>;

    /// Removes the entry. Deleting an absent token succeeds.
    async fn delete(&self, token: &str) -> Result<()>;
}
