//! TTL Sweeper Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Expiration is lazy by default; the sweeper only reclaims slots held by
//! expired entries that nobody reads. It never changes which entry a full
//! cache evicts on `set`.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Cache;
use crate::config::CacheConfig;

/// Shortest interval the sweeper will sleep between passes
const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task runs until aborted, sleeping for `interval` between passes. Each
/// pass holds the cache's exclusive lock only while it purges.
///
/// Must be called from within a tokio runtime.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(Cache::<String>::new(1000)?);
/// let sweeper = spawn_sweeper(Arc::clone(&cache), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweeper<V>(cache: Arc<Cache<V>>, interval: Duration) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    let interval = interval.max(MIN_SWEEP_INTERVAL);

    tokio::spawn(async move {
        info!(?interval, "Starting TTL sweeper task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired();

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}

/// Spawns the sweeper if `config.sweep_interval` is set.
///
/// Returns None when the configuration leaves expiration purely lazy.
pub fn spawn_configured_sweeper<V>(
    cache: Arc<Cache<V>>,
    config: &CacheConfig,
) -> Option<JoinHandle<()>>
where
    V: Send + Sync + 'static,
{
    config
        .sweep_interval
        .map(|interval| spawn_sweeper(cache, interval))
}
