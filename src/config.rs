//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_TTL};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// TTL applied by `Cache::insert`
    pub default_ttl: Duration,
    /// Interval for the optional background sweeper, None = lazy expiration only
    pub sweep_interval: Option<Duration>,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `CACHE_SWEEP_INTERVAL` - Sweep frequency in seconds (default: unset, 0 disables)
    ///
    /// Values that fail to parse fall back to their defaults. A capacity of 0 is
    /// passed through and rejected when the cache is built.
    pub fn from_env() -> Self {
        Self {
            capacity: parse_var("CACHE_CAPACITY").unwrap_or(DEFAULT_CAPACITY),
            default_ttl: parse_var("CACHE_DEFAULT_TTL")
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TTL),
            sweep_interval: parse_var::<u64>("CACHE_SWEEP_INTERVAL")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            default_ttl: DEFAULT_TTL,
            sweep_interval: None,
        }
    }
}
