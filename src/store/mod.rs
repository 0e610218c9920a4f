//! Store Module
//!
//! Ephemeral keyed blob storage: a backend contract, in-memory and Redis
//! implementations, and the vault façade that mints tokens on top of them.

mod backend;
mod entry;
mod lifetime;
mod memory;
mod redis_backend;
mod token;
mod vault;


// Re-export public types
pub use backend::Backend;
pub use entry::StoredSecret;
pub use lifetime::{Lifetime, MAX_LIFETIME_HOURS, SECONDS_PER_HOUR, WEEK_HOURS};
pub use memory::InMemoryBackend;
pub use redis_backend::RedisBackend;
pub use token::{TokenMinter, TOKEN_LENGTH};
pub use vault::{Reveal, SecretVault, CRAWLER_PLACEHOLDER};

// == Public Constants ==
/// Default maximum accepted payload size in bytes
pub const MAX_SECRET_SIZE: usize = 1024 * 1024; // 1 MB
