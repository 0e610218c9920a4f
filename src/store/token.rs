//! Token Minting
//!
//! Unguessable identifiers naming stored secrets.

use uuid::Uuid;

/// Length of a minted token in characters.
pub const TOKEN_LENGTH: usize = 32;

/// Generates fresh tokens from the OS CSPRNG.
///
/// A token is 128 random bits (a v4 UUID) rendered as lowercase hex with no
/// separators, so it can be dropped straight into a URL path segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMinter;

impl TokenMinter {
    pub fn new() -> Self {
        Self
    }

    /// Mints a new token.
    pub fn mint(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Returns true if `token` has the shape of a minted token.
    pub fn is_well_formed(token: &str) -> bool {
        token.len() == TOKEN_LENGTH
            && token
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }
}
