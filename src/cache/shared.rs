//! Shared Cache Handle
//!
//! Cloneable async handle over a [`TtlCache`] that adds fetch-on-miss
//! memoization (`get_or_set`) and best-effort warm-up (`preload`).
//!
//! The lock is only held for the synchronous cache operations, never while a
//! fetcher is awaited. Two concurrent misses on the same key therefore both
//! run their fetcher and the last one to finish wins; there is no
//! single-flight de-duplication.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{join_all, BoxFuture, FutureExt};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{CacheStats, TtlCache};
use crate::error::{CacheError, Result};

// == Preload Entry ==
/// One warm-up job for [`SharedCache::preload`].
pub struct PreloadEntry<'a, V> {
    /// Key the fetched value is stored under
    pub key: String,
    /// Pending fetch; it is not polled until `preload` runs
    pub fetcher: BoxFuture<'a, anyhow::Result<V>>,
    /// TTL override, cache default when `None`
    pub ttl: Option<Duration>,
}

impl<'a, V> PreloadEntry<'a, V> {
    pub fn new<Fut>(key: impl Into<String>, fetcher: Fut) -> Self
    where
        Fut: Future<Output = anyhow::Result<V>> + Send + 'a,
    {
        Self {
            key: key.into(),
            fetcher: fetcher.boxed(),
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// Outcome of a preload run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreloadReport {
    /// Keys whose fetcher succeeded and whose value was stored
    pub loaded: Vec<String>,
    /// Keys whose fetcher (or store) failed
    pub failed: Vec<String>,
}

// == Shared Cache ==
/// Thread-safe handle to a cache; clones share the same entries.
#[derive(Debug)]
pub struct SharedCache<V> {
    inner: Arc<RwLock<TtlCache<V>>>,
}

impl<V> Clone for SharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> SharedCache<V>
where
    V: Clone + Serialize + Send + Sync,
{
    /// Creates a handle over a fresh cache.
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self::from_cache(TtlCache::new(max_entries, default_ttl))
    }

    pub fn from_cache(cache: TtlCache<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    // == Basic Operations ==
    pub async fn get(&self, key: &str) -> Option<V> {
        // Write lock: a read may lazily delete an expired entry
        self.inner.write().await.get(key)
    }

    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) -> Result<()> {
        self.inner.write().await.set(key, value, ttl)
    }

    pub async fn delete(&self, key: &str) -> bool {
        self.inner.write().await.delete(key)
    }

    pub async fn invalidate(&self, pattern: &str) -> Result<usize> {
        self.inner.write().await.invalidate(pattern)
    }

    pub async fn cleanup(&self) -> usize {
        self.inner.write().await.cleanup()
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn contains_key(&self, key: &str) -> bool {
        self.inner.read().await.contains_key(key)
    }

    pub async fn default_ttl(&self) -> Duration {
        self.inner.read().await.default_ttl()
    }

    // == Batch Helpers ==
    pub async fn get_batch<I, K>(&self, keys: I) -> HashMap<String, Option<V>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.inner.write().await.get_batch(keys)
    }

    pub async fn set_batch<I>(&self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, V, Option<Duration>)>,
    {
        self.inner.write().await.set_batch(entries)
    }

    // == Get Or Set ==
    /// Returns the cached value for `key`, or runs `fetcher` once and caches
    /// its result.
    ///
    /// The TTL is validated before `fetcher` runs. A fetcher error is
    /// returned unchanged and nothing is stored.
    pub async fn get_or_set<F, Fut, E>(
        &self,
        key: &str,
        fetcher: F,
        ttl: Option<Duration>,
    ) -> std::result::Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<V, E>>,
        E: From<CacheError>,
    {
        let ttl = {
            let mut cache = self.inner.write().await;
            if let Some(value) = cache.get(key) {
                return Ok(value);
            }
            cache.resolve_ttl(ttl)?
        };

        debug!(key, "cache miss, fetching");
        let value = fetcher().await?;

        self.inner
            .write()
            .await
            .set(key, value.clone(), Some(ttl))?;
        Ok(value)
    }

    // == Preload ==
    /// Runs every fetcher concurrently and stores each success as it lands.
    ///
    /// Failures are logged and reported per key; they never abort the other
    /// entries and never surface as an error.
    pub async fn preload(&self, entries: Vec<PreloadEntry<'_, V>>) -> PreloadReport {
        let outcomes = join_all(entries.into_iter().map(|entry| async move {
            let PreloadEntry { key, fetcher, ttl } = entry;
            let stored = match fetcher.await {
                Ok(value) => self
                    .set(key.clone(), value, ttl)
                    .await
                    .map_err(anyhow::Error::from),
                Err(e) => Err(e),
            };
            if let Err(e) = &stored {
                warn!(key = %key, error = %e, "failed to preload cache entry");
            }
            (key, stored.is_ok())
        }))
        .await;

        let mut report = PreloadReport::default();
        for (key, ok) in outcomes {
            if ok {
                report.loaded.push(key);
            } else {
                report.failed.push(key);
            }
        }
        report
    }
}
