//! Secret Lifetime
//!
//! Normalizes the caller-facing TTL (whole hours, or the symbol "week") into
//! the seconds count handed to backends.

use std::fmt;
use std::str::FromStr;

use crate::error::VaultError;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Hours in the symbolic "week" lifetime.
pub const WEEK_HOURS: u64 = 168;

/// Longest accepted lifetime (one year). Keeps every `as_secs` value well
/// inside what Redis accepts for `SET .. EX`.
pub const MAX_LIFETIME_HOURS: u64 = 365 * 24;

// == Lifetime ==
/// Validated lifetime of a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// A positive number of hours
    Hours(u64),
    /// The symbolic one-week lifetime
    Week,
}

impl Lifetime {
    /// Builds a lifetime from a signed hour count, rejecting non-positive
    /// values and anything above [`MAX_LIFETIME_HOURS`].
    pub fn from_hours(hours: i64) -> Result<Self, VaultError> {
        if hours <= 0 {
            return Err(VaultError::InvalidInput(format!(
                "TTL must be a positive number of hours, got {}",
                hours
            )));
        }
        let lifetime = Lifetime::Hours(hours as u64);
        lifetime.validate()?;
        Ok(lifetime)
    }

    /// Checks the bounds of a lifetime built directly from a variant.
    pub fn validate(&self) -> Result<(), VaultError> {
        match self.hours() {
            0 => Err(VaultError::InvalidInput(
                "TTL must be a positive number of hours".to_string(),
            )),
            h if h > MAX_LIFETIME_HOURS => Err(VaultError::InvalidInput(format!(
                "TTL must not exceed {} hours, got {}",
                MAX_LIFETIME_HOURS, h
            ))),
            _ => Ok(()),
        }
    }

    /// Lifetime in hours.
    pub fn hours(&self) -> u64 {
        match self {
            Lifetime::Hours(h) => *h,
            Lifetime::Week => WEEK_HOURS,
        }
    }

    /// Lifetime in seconds, as passed to a backend.
    pub fn as_secs(&self) -> u64 {
        self.hours().saturating_mul(SECONDS_PER_HOUR)
    }
}

impl FromStr for Lifetime {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("week") {
            return Ok(Lifetime::Week);
        }

        let hours: i64 = s
            .parse()
            .map_err(|_| VaultError::InvalidInput(format!("TTL is not a number: '{}'", s)))?;
        Lifetime::from_hours(hours)
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifetime::Hours(h) => write!(f, "{}h", h),
            Lifetime::Week => write!(f, "week"),
        }
    }
}
