//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::store::MAX_SECRET_SIZE;

/// Which storage backend the vault runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Process-local table, for single-node and development deployments
    #[default]
    Memory,
    /// Shared Redis instance, for multi-instance deployments
    Redis,
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => Ok(BackendKind::Memory),
            "redis" => Ok(BackendKind::Redis),
            other => Err(format!("unknown backend '{}'", other)),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Memory => write!(f, "memory"),
            BackendKind::Redis => write!(f, "redis"),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Active storage backend
    pub backend: BackendKind,
    /// Redis connection URL, only used with `BackendKind::Redis`
    pub redis_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// In-memory sweep interval in seconds
    pub sweep_interval: u64,
    /// Largest accepted secret payload in bytes
    pub max_secret_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `STORE_BACKEND` - `memory` or `redis` (default: memory)
    /// - `REDIS_URL` - Redis address (default: redis://127.0.0.1:6379)
    /// - `PORT` - HTTP server port (default: 8088)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60)
    /// - `MAX_SECRET_SIZE` - Payload limit in bytes (default: 1 MB)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let backend = match env::var("STORE_BACKEND") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to {}", e, defaults.backend);
                defaults.backend
            }),
            Err(_) => defaults.backend,
        };

        Self {
            backend,
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.sweep_interval),
            max_secret_size: env::var("MAX_SECRET_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_secret_size),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::Memory,
            redis_url: "redis://127.0.0.1:6379".to_string(),
            server_port: 8088,
            sweep_interval: 60,
            max_secret_size: MAX_SECRET_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.backend, BackendKind::Memory);
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.server_port, 8088);
        assert_eq!(config.sweep_interval, 60);
        assert_eq!(config.max_secret_size, 1024 * 1024);
    }

    #[test]
    fn test_backend_kind_parse() {
        assert_eq!("redis".parse::<BackendKind>().unwrap(), BackendKind::Redis);
        assert_eq!("Memory".parse::<BackendKind>().unwrap(), BackendKind::Memory);
        assert!("memcached".parse::<BackendKind>().is_err());
    }

    #[test]
    fn test_config_from_env() {
        // Env vars are process-global, so defaults and overrides share one test.
        env::remove_var("STORE_BACKEND");
        env::remove_var("REDIS_URL");
        env::remove_var("PORT");
        env::remove_var("SWEEP_INTERVAL");
        env::remove_var("MAX_SECRET_SIZE");

        let config = Config::from_env();
        assert_eq!(config.backend, BackendKind::Memory);
        assert_eq!(config.server_port, 8088);
        assert_eq!(config.sweep_interval, 60);

        env::set_var("STORE_BACKEND", "redis");
        env::set_var("REDIS_URL", "redis://cache:6379");
        env::set_var("SWEEP_INTERVAL", "0");

        let config = Config::from_env();
        assert_eq!(config.backend, BackendKind::Redis);
        assert_eq!(config.redis_url, "redis://cache:6379");
        assert_eq!(config.sweep_interval, 60, "Zero interval falls back to default");

        env::set_var("STORE_BACKEND", "bogus");
        assert_eq!(Config::from_env().backend, BackendKind::Memory);

        env::remove_var("STORE_BACKEND");
        env::remove_var("REDIS_URL");
        env::remove_var("SWEEP_INTERVAL");
    }
}
