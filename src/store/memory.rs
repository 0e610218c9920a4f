//! In-Memory Backend
//!
//! Lock-guarded HashMap holding secrets for single-node deployments.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{Result, VaultError};
use crate::store::{Backend, StoredSecret};

// == In-Memory Backend ==
/// Process-local backend with lazy expiry on read.
///
/// Eager reclamation is done by the sweep task (see `tasks::spawn_sweep_task`),
/// which calls [`InMemoryBackend::sweep_expired`] under the same lock as request
/// handling. Cloning shares the underlying table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    entries: Arc<RwLock<HashMap<String, StoredSecret>>>,
}

impl InMemoryBackend {
    // == Constructor ==
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the table.
    ///
    /// Returns the number of entries removed.
    pub async fn sweep_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    // == Length ==
    /// Returns the number of physically present entries, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Inserts a prepared entry, bypassing TTL computation.
    #[cfg(test)]
    pub(crate) async fn insert_raw(&self, token: &str, entry: StoredSecret) {
        self.entries.write().await.insert(token.to_string(), entry);
    }
}

#[async_trait]
impl Backend for InMemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn set(&self, token: &str, payload: Vec<u8>, ttl_seconds: u64) -> Result<()> {
        if ttl_seconds == 0 {
            return Err(VaultError::InvalidInput(
                "TTL must be a positive number of seconds".to_string(),
            ));
        }

        let entry = StoredSecret::new(payload, ttl_seconds);
        self.entries.write().await.insert(token.to_string(), entry);

        debug!(ttl_seconds, "memory backend stored entry");
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.read().await;

        // Stale entries stay put until the next sweep but read as absent.
        Ok(entries
            .get(token)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.payload.clone()))
    }

    async fn delete(&self, token: &str) -> Result<()> {
        self.entries.write().await.remove(token);
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::entry::current_timestamp_ms;
    use std::time::Duration;

    #[tokio::test]
    async fn test_set_and_get() {
        let backend = InMemoryBackend::new();

        backend.set("t1", b"payload".to_vec(), 60).await.unwrap();

        assert_eq!(backend.get("t1").await.unwrap(), Some(b"payload".to_vec()));
        assert_eq!(backend.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_is_absent() {
        let backend = InMemoryBackend::new();

        assert_eq!(backend.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_overwrite_replaces_payload() {
        let backend = InMemoryBackend::new();

        backend.set("t1", b"first".to_vec(), 60).await.unwrap();
        backend.set("t1", b"second".to_vec(), 60).await.unwrap();

        assert_eq!(backend.get("t1").await.unwrap(), Some(b"second".to_vec()));
        assert_eq!(backend.len().await, 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_rejected() {
        let backend = InMemoryBackend::new();

        let result = backend.set("t1", b"x".to_vec(), 0).await;
        assert!(matches!(result, Err(VaultError::InvalidInput(_))));
        assert_eq!(backend.len().await, 0);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let backend = InMemoryBackend::new();

        backend.set("t1", b"x".to_vec(), 60).await.unwrap();
        backend.delete("t1").await.unwrap();
        backend.delete("t1").await.unwrap();
        backend.delete("never-existed").await.unwrap();

        assert_eq!(backend.get("t1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_lazy_expiry_before_sweep() {
        let backend = InMemoryBackend::new();
        let now = current_timestamp_ms();
        backend
            .insert_raw(
                "stale",
                StoredSecret {
                    payload: b"x".to_vec(),
                    expires_at: now - 1,
                },
            )
            .await;

        // Still physically present, but invisible to reads
        assert_eq!(backend.len().await, 1);
        assert_eq!(backend.get("stale").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sweep_removes_only_expired() {
        let backend = InMemoryBackend::new();

        backend.set("short", b"a".to_vec(), 1).await.unwrap();
        backend.set("long", b"b".to_vec(), 3600).await.unwrap();

        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert_eq!(backend.sweep_expired().await, 1);
        assert_eq!(backend.len().await, 1);
        assert_eq!(backend.get("long").await.unwrap(), Some(b"b".to_vec()));
    }

    #[tokio::test]
    async fn test_clones_share_table() {
        let backend = InMemoryBackend::new();
        let other = backend.clone();

        backend.set("t1", b"x".to_vec(), 60).await.unwrap();

        assert_eq!(other.get("t1").await.unwrap(), Some(b"x".to_vec()));
    }
}
