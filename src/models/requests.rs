//! Request DTOs for the secret API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::error::VaultError;
use crate::store::Lifetime;

/// TTL as posted by a client: a JSON number, or a string such as `"24"` or `"week"`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TtlInput {
    Hours(i64),
    Text(String),
}

impl TryFrom<TtlInput> for Lifetime {
    type Error = VaultError;

    fn try_from(input: TtlInput) -> Result<Self, Self::Error> {
        match input {
            TtlInput::Hours(hours) => Lifetime::from_hours(hours),
            TtlInput::Text(text) => text.parse(),
        }
    }
}

/// Request body for storing a secret (POST /secret)
///
/// # Fields
/// - `encryptedSecret`: client-side encrypted payload, stored verbatim
/// - `ttl`: lifetime in hours, or `"week"`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSecretRequest {
    /// The already-encrypted secret
    #[serde(rename = "encryptedSecret", default)]
    pub encrypted_secret: Option<String>,
    /// Requested lifetime
    #[serde(default)]
    pub ttl: Option<TtlInput>,
}

impl CreateSecretRequest {
    /// Validates the request and splits it into payload bytes and lifetime.
    pub fn into_parts(self, max_size: usize) -> Result<(Vec<u8>, Lifetime), VaultError> {
        let secret = match self.encrypted_secret {
            Some(s) if !s.is_empty() => s,
            _ => {
                return Err(VaultError::InvalidInput(
                    "encryptedSecret missing".to_string(),
                ))
            }
        };

        if secret.len() > max_size {
            return Err(VaultError::InvalidInput(format!(
                "encryptedSecret exceeds maximum size of {} bytes",
                max_size
            )));
        }

        let lifetime = self
            .ttl
            .ok_or_else(|| VaultError::InvalidInput("ttl missing".to_string()))?
            .try_into()?;

        Ok((secret.into_bytes(), lifetime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CreateSecretRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numeric_ttl() {
        let req = parse(r#"{"encryptedSecret": "abc", "ttl": 24}"#);
        let (payload, lifetime) = req.into_parts(1024).unwrap();

        assert_eq!(payload, b"abc");
        assert_eq!(lifetime, Lifetime::Hours(24));
    }

    #[test]
    fn test_string_ttl() {
        let req = parse(r#"{"encryptedSecret": "abc", "ttl": "1"}"#);
        assert_eq!(req.into_parts(1024).unwrap().1, Lifetime::Hours(1));
    }

    #[test]
    fn test_week_ttl() {
        let req = parse(r#"{"encryptedSecret": "abc", "ttl": "week"}"#);
        assert_eq!(req.into_parts(1024).unwrap().1.as_secs(), 604_800);
    }

    #[test]
    fn test_missing_secret() {
        let req = parse(r#"{"ttl": 1}"#);
        assert!(matches!(req.into_parts(1024), Err(VaultError::InvalidInput(_))));

        let req = parse(r#"{"encryptedSecret": "", "ttl": 1}"#);
        assert!(matches!(req.into_parts(1024), Err(VaultError::InvalidInput(_))));
    }

    #[test]
    fn test_bad_ttl() {
        for body in [
            r#"{"encryptedSecret": "abc"}"#,
            r#"{"encryptedSecret": "abc", "ttl": 0}"#,
            r#"{"encryptedSecret": "abc", "ttl": -3}"#,
            r#"{"encryptedSecret": "abc", "ttl": "soon"}"#,
        ] {
            assert!(
                matches!(parse(body).into_parts(1024), Err(VaultError::InvalidInput(_))),
                "{} should be rejected",
                body
            );
        }
    }

    #[test]
    fn test_oversized_secret() {
        let req = parse(r#"{"encryptedSecret": "abcdef", "ttl": 1}"#);
        assert!(matches!(req.into_parts(5), Err(VaultError::InvalidInput(_))));
    }
}
