//! Redis Backend
//!
//! Thin adapter over a shared Redis instance for multi-instance deployments.
//! Expiry is delegated to Redis' native key TTL, so no local bookkeeping is kept.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{debug, error, info};

use crate::error::{Result, VaultError};
use crate::store::Backend;

// == Redis Backend ==
/// Backend delegating to Redis `SET .. EX`, `GET` and `DEL`.
///
/// The connection manager is cloned per operation; clones share one
/// multiplexed connection that reconnects on its own after a drop.
#[derive(Clone)]
pub struct RedisBackend {
    conn: ConnectionManager,
}

impl RedisBackend {
    // == Connect ==
    /// Opens the shared connection.
    ///
    /// Called once at startup. Any failure here is a `Startup` error and the
    /// process must not start serving.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| VaultError::Startup(format!("invalid Redis URL: {}", e)))?;

        // Probe once without retries so an unreachable server fails fast;
        // the manager below retries with backoff on its own.
        client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                error!("Could not connect to Redis: {}", e);
                VaultError::Startup(format!("could not connect to Redis: {}", e))
            })?;

        let conn = ConnectionManager::new(client).await.map_err(|e| {
            error!("Could not connect to Redis: {}", e);
            VaultError::Startup(format!("could not connect to Redis: {}", e))
        })?;

        info!("Connected to Redis");
        Ok(Self { conn })
    }
}

#[async_trait]
impl Backend for RedisBackend {
    fn name(&self) -> &'static str {
        "redis"
    }

    async fn set(&self, token: &str, payload: Vec<u8>, ttl_seconds: u64) -> Result<()> {
        if ttl_seconds == 0 {
            return Err(VaultError::InvalidInput(
                "TTL must be a positive number of seconds".to_string(),
            ));
        }

        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(token, payload, ttl_seconds).await?;

        debug!(ttl_seconds, "redis backend stored entry");
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let payload: Option<Vec<u8>> = conn.get(token).await?;
        Ok(payload)
    }

    async fn delete(&self, token: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(token).await?;
        Ok(())
    }
}
