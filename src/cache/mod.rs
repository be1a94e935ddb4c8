//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and LRU eviction.

use std::time::Duration;

mod entry;
mod lru;
mod shared;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::{NodeId, RecencyList};
pub use shared::Cache;
pub use store::CacheStore;

// == Public Constants ==
/// TTL used by [`Cache::insert`] when none is configured
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 1000;
