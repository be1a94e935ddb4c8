//! Shared Cache Module
//!
//! Thread-safe handle over a [`CacheStore`], the type callers work with.

use std::time::{Duration, Instant};

use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use crate::cache::{CacheStore, DEFAULT_TTL};
use crate::config::CacheConfig;
use crate::error::Result;

// == Cache ==
/// Fixed-capacity key-value cache with LRU eviction and per-entry TTL.
///
/// The key index and recency list sit behind a single `RwLock`, so no caller
/// can observe them disagreeing. Anything that changes recency order (including
/// a successful `get`) takes the lock exclusively. Share it between threads
/// with an `Arc`.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use lru_ttl_cache::Cache;
///
/// let cache = Cache::new(2).unwrap();
/// cache.set("k1", "v1", Duration::from_secs(60));
/// cache.set("k2", "v2", Duration::from_secs(60));
/// cache.set("k3", "v3", Duration::from_secs(60));
///
/// assert_eq!(cache.get("k1"), None);
/// assert_eq!(cache.get("k3"), Some("v3"));
/// ```
#[derive(Debug)]
pub struct Cache<V> {
    store: RwLock<CacheStore<V>>,
    /// TTL applied by [`Cache::insert`]
    default_ttl: Duration,
}

impl<V> Cache<V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_default_ttl(capacity, DEFAULT_TTL)
    }

    /// Creates an empty cache whose [`insert`](Cache::insert) uses `default_ttl`.
    pub fn with_default_ttl(capacity: usize, default_ttl: Duration) -> Result<Self> {
        Ok(Self {
            store: RwLock::new(CacheStore::new(capacity)?),
            default_ttl,
        })
    }

    /// Creates an empty cache from loaded configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::with_default_ttl(config.capacity, config.default_ttl)
    }

    // == Set ==
    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// Rewriting an existing key replaces its value, restarts its TTL and makes
    /// it most recently used without evicting anything. A new key arriving at a
    /// full cache evicts the least recently used entry first.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        self.store.write().set(key.into(), value, ttl);
    }

    /// Stores `value` under `key` with the cache's default TTL.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        self.set(key, value, self.default_ttl);
    }

    // == Get ==
    /// Looks up `key` and hands the live value to `f`.
    ///
    /// Returns None if the key is missing or expired; an expired entry is
    /// removed. A hit makes the entry most recently used. `f` runs while the
    /// cache is exclusively locked, so it should be short.
    pub fn get_with<R, F>(&self, key: &str, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        let store = self.store.upgradable_read();
        if !store.contains_key(key) {
            return None;
        }

        // Both outcomes mutate: promotion on a hit, removal on expiry
        let mut store = RwLockUpgradableReadGuard::upgrade(store);
        // Expiry is judged once the lock is held, not when the caller arrived
        let now = Instant::now();
        store.get_at(key, now).map(f)
    }

    /// Returns a copy of the live value for `key`.
    ///
    /// Wrap large payloads in `Arc` to keep the copy cheap.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.get_with(key, V::clone)
    }

    /// Returns true if `key` holds a live entry.
    ///
    /// Unlike `get`, this neither promotes the entry nor removes it when expired.
    pub fn contains(&self, key: &str) -> bool {
        let store = self.store.read();
        store.peek_at(key, Instant::now()).is_some()
    }

    // == Delete ==
    /// Removes `key`. Returns whether an entry was present.
    pub fn delete(&self, key: &str) -> bool {
        self.store.write().remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry. Capacity is preserved.
    pub fn clear(&self) {
        self.store.write().clear();
    }

    // == Cleanup Expired ==
    /// Removes all expired entries now and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        self.store.write().purge_expired()
    }

    // == Introspection ==
    /// Number of stored entries, counting expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.store.read().capacity()
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.store.read().is_consistent()
    }
}
