//! Secret Vault
//!
//! Façade over the active backend exposing the token lifecycle:
//! create, reveal and destroy.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{Result, VaultError};
use crate::store::{Backend, Lifetime, TokenMinter};

/// Text returned instead of a secret when the requester is a link-preview crawler.
pub const CRAWLER_PLACEHOLDER: &str = "Please open this link directly in your browser";

// == Reveal Outcome ==
/// Result of a reveal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reveal {
    /// The stored payload, verbatim
    Secret(Vec<u8>),
    /// Fixed text served to automated previewers; the backend was not consulted
    Placeholder(&'static str),
    /// Token unknown, expired or destroyed
    NotFound,
}

// == Secret Vault ==
/// Owns exactly one backend, chosen at startup and never switched.
///
/// Cheap to clone; clones share the backend.
#[derive(Clone)]
pub struct SecretVault {
    backend: Arc<dyn Backend>,
    minter: TokenMinter,
}

impl SecretVault {
    // == Constructor ==
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            minter: TokenMinter::new(),
        }
    }

    /// Name of the active backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    // == Create ==
    /// Stores `payload` under a freshly minted token and returns the token.
    ///
    /// Token collisions are treated as impossible (128 random bits), so no
    /// retry is attempted.
    pub async fn create(&self, payload: Vec<u8>, lifetime: Lifetime) -> Result<String> {
        if payload.is_empty() {
            return Err(VaultError::InvalidInput("secret payload is empty".to_string()));
        }

        lifetime.validate()?;
        let ttl_seconds = lifetime.as_secs();

        let token = self.minter.mint();
        self.backend
            .set(&token, payload, ttl_seconds)
            .await
            .inspect_err(|e| {
                warn!(backend = self.backend.name(), "Could not store secret: {}", e);
            })?;

        info!(%lifetime, ttl_seconds, "Stored secret");
        Ok(token)
    }

    // == Reveal ==
    /// Looks up a secret.
    ///
    /// With `allow_reveal == false` the backend is never touched and the
    /// crawler placeholder is returned, leaving the entry intact for the
    /// real recipient. Reading does not remove the entry.
    pub async fn reveal(&self, token: &str, allow_reveal: bool) -> Result<Reveal> {
        if !allow_reveal {
            debug!("Served placeholder to automated previewer");
            return Ok(Reveal::Placeholder(CRAWLER_PLACEHOLDER));
        }

        let payload = self
            .backend
            .get(token)
            .await
            .inspect_err(|e| {
                warn!(backend = self.backend.name(), "Error getting secret: {}", e);
            })?;

        Ok(match payload {
            Some(payload) => Reveal::Secret(payload),
            None => Reveal::NotFound,
        })
    }

    // == Destroy ==
    /// Removes a secret. Succeeds whether or not the token still exists.
    pub async fn destroy(&self, token: &str) -> Result<()> {
        self.backend
            .delete(token)
            .await
            .inspect_err(|e| {
                warn!(backend = self.backend.name(), "Error deleting secret: {}", e);
            })?;

        debug!("Destroyed secret");
        Ok(())
    }
}
