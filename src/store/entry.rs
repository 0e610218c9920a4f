//! Stored Secret Module
//!
//! Defines the unit held per token by the in-memory backend.

use std::time::{SystemTime, UNIX_EPOCH};

// == Stored Secret ==
/// An opaque payload together with its absolute expiry.
#[derive(Debug, Clone)]
pub struct StoredSecret {
    /// The payload, stored verbatim
    pub payload: Vec<u8>,
    /// Expiration timestamp (Unix milliseconds), fixed at creation
    pub expires_at: u64,
}

impl StoredSecret {
    // == Constructor ==
    /// Creates a new entry that expires `ttl_seconds` from now.
    pub fn new(payload: Vec<u8>, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            payload,
            expires_at: now.saturating_add(ttl_seconds.saturating_mul(1000)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches `expires_at`, so a
    /// read issued exactly at the deadline already sees it as absent.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Expiry check against an explicit clock reading.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
