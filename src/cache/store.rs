//! Cache Store Module
//!
//! Main cache engine combining a key index with a recency list and TTL expiration.
//! The store itself is not synchronized; [`Cache`](crate::cache::Cache) wraps it
//! in a lock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheEntry, NodeId, RecencyList};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Fixed-capacity storage with LRU eviction and lazy TTL expiration.
///
/// `index` and `order` always describe the same set of entries: every key in
/// the index names exactly one node in the list, and that node carries the key.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key to recency list handle
    index: HashMap<String, NodeId>,
    /// Entries ordered from most to least recently used
    order: RecencyList<CacheEntry<V>>,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            index: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            capacity,
        })
    }

    // == Set ==
    /// Stores a key-value pair that expires `ttl` from now.
    ///
    /// If the key already exists (expired or not), the value is replaced, the
    /// TTL restarts and the entry becomes most recently used. Otherwise, when
    /// the store is full, the least recently used entry is evicted first
    /// whether or not it has expired.
    pub fn set(&mut self, key: String, value: V, ttl: Duration) {
        self.set_at(key, value, ttl, Instant::now());
    }

    pub(crate) fn set_at(&mut self, key: String, value: V, ttl: Duration, now: Instant) {
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(id) {
                entry.refresh(value, ttl, now);
            }
            self.order.move_to_front(id);
            return;
        }

        if self.order.len() >= self.capacity {
            self.evict_oldest();
        }

        let entry = CacheEntry::new(key.clone(), value, ttl, now);
        let id = self.order.push_front(entry);
        self.index.insert(key, id);
    }

    // == Get ==
    /// Retrieves a value by key and marks it most recently used.
    ///
    /// An expired entry is removed and reported as missing.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        self.get_at(key, Instant::now())
    }

    pub(crate) fn get_at(&mut self, key: &str, now: Instant) -> Option<&V> {
        let id = *self.index.get(key)?;

        let expired = self
            .order
            .get(id)
            .map_or(true, |entry| entry.is_expired_at(now));
        if expired {
            self.index.remove(key);
            self.order.remove(id);
            debug!(key, "Removed expired entry on read");
            return None;
        }

        self.order.move_to_front(id);
        self.order.get(id).map(|entry| &entry.value)
    }

    // == Peek ==
    /// Returns a live value without touching recency or removing expired entries.
    pub fn peek(&self, key: &str) -> Option<&V> {
        self.peek_at(key, Instant::now())
    }

    pub(crate) fn peek_at(&self, key: &str, now: Instant) -> Option<&V> {
        let id = self.index.get(key)?;
        self.order
            .get(*id)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| &entry.value)
    }

    /// Returns true if the key is indexed, expired or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Delete ==
    /// Removes an entry by key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let id = self.index.remove(key)?;
        self.order.remove(id).map(|entry| entry.value)
    }

    // == Clear ==
    /// Removes every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed. Survivors keep their relative order.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    pub(crate) fn purge_expired_at(&mut self, now: Instant) -> usize {
        let expired: Vec<NodeId> = self
            .order
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(id, _)| id)
            .collect();

        for id in &expired {
            if let Some(entry) = self.order.remove(*id) {
                self.index.remove(&entry.key);
            }
        }

        expired.len()
    }

    // == Length ==
    /// Returns the current number of entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|(_, entry)| entry.key.as_str())
    }

    fn evict_oldest(&mut self) {
        if let Some(entry) = self.order.pop_back() {
            self.index.remove(&entry.key);
            debug!(key = %entry.key, capacity = self.capacity, "Evicted least recently used entry");
        }
    }

    /// Checks that the index and recency list agree with each other.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        if self.index.len() != self.order.len() || self.order.len() > self.capacity {
            return false;
        }

        let index_resolves = self.index.iter().all(|(key, id)| {
            self.order
                .get(*id)
                .map_or(false, |entry| &entry.key == key)
        });
        let order_resolves = self
            .order
            .iter()
            .all(|(id, entry)| self.index.get(&entry.key) == Some(&id));

        index_resolves && order_resolves && self.order.iter().count() == self.order.len()
    }
}
