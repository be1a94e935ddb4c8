//! LRU TTL Cache - A thread-safe in-process key-value cache
//!
//! Fixed capacity, least-recently-used eviction and lazy per-entry TTL expiration.
//!
//! ```
//! use std::time::Duration;
//! use lru_ttl_cache::{generate_id, Cache};
//!
//! # fn main() -> lru_ttl_cache::Result<()> {
//! let cache = Cache::new(100)?;
//! let key = generate_id()?;
//!
//! cache.set(key.clone(), 42, Duration::from_secs(60));
//! assert_eq!(cache.get(&key), Some(42));
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod id;
pub mod tasks;

pub use cache::Cache;
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use id::generate_id;
pub use tasks::{spawn_configured_sweeper, spawn_sweeper};
