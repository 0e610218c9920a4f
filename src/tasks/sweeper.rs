//! Expiry Sweep Task
//!
//! Background task that periodically reclaims expired secrets from the
//! in-memory backend. Reads already hide expired entries; the sweep bounds
//! memory held by secrets nobody ever opens or destroys.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::InMemoryBackend;

/// Spawns a background task that sweeps `backend` every `interval_secs` seconds.
///
/// Each pass takes the backend's write lock, so it never interleaves with a
/// request mutating the same table. The returned handle is aborted during
/// graceful shutdown.
///
/// # Example
/// ```ignore
/// let backend = InMemoryBackend::new();
/// let sweep_handle = spawn_sweep_task(backend.clone(), 60);
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(backend: InMemoryBackend, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = backend.sweep_expired().await;

            if removed > 0 {
                info!("Expiry sweep: removed {} expired secrets", removed);
            } else {
                debug!("Expiry sweep: no expired secrets found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Backend;

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let backend = InMemoryBackend::new();
        backend.set("expire_soon", b"x".to_vec(), 1).await.unwrap();

        let handle = spawn_sweep_task(backend.clone(), 1);

        // Wait for entry to expire and a sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(backend.len().await, 0, "Expired entry should have been swept");

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_live_entries() {
        let backend = InMemoryBackend::new();
        backend.set("long_lived", b"x".to_vec(), 3600).await.unwrap();

        let handle = spawn_sweep_task(backend.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            backend.get("long_lived").await.unwrap(),
            Some(b"x".to_vec()),
            "Live entry should not be removed"
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let handle = spawn_sweep_task(InMemoryBackend::new(), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
