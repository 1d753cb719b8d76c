//! TTL Cache Module
//!
//! Main cache engine combining HashMap storage with insertion-order eviction,
//! lazy TTL expiration and glob-pattern invalidation.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;
use tracing::debug;

use crate::cache::{
    CacheEntry, CacheStats, GlobPattern, InsertionOrder, DEFAULT_MAX_ENTRIES, DEFAULT_TTL,
    ENTRY_OVERHEAD_BYTES,
};
use crate::error::{CacheError, Result};

// == TTL Cache ==
/// Size-bounded key-value store with per-entry time-to-live.
///
/// Expired entries behave exactly like missing ones and are dropped the next
/// time they are read. When an insert of a new key would exceed
/// `max_entries`, the entry inserted longest ago is evicted first; ties are
/// impossible because each insert gets a unique, increasing sequence number.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Eviction order
    order: InsertionOrder,
    /// Running hit/miss/eviction counters
    counters: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL applied when `set` is called without one
    default_ttl: Duration,
}

impl<V: Clone + Serialize> TtlCache<V> {
    // == Constructor ==
    /// Creates a new cache with the given capacity and default TTL.
    ///
    /// A capacity of zero is raised to one. A zero `default_ttl` is accepted
    /// here but every `set` relying on it will fail with `InvalidTtl`.
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            counters: CacheStats::new(),
            max_entries: max_entries.max(1),
            default_ttl,
        }
    }

    // == Get ==
    /// Returns a clone of the live value stored under `key`.
    ///
    /// An expired entry is removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            None => {
                self.counters.record_miss();
                return None;
            }
            Some(entry) => entry.is_expired(),
        };

        if expired {
            self.remove_entry(key);
            self.counters.record_miss();
            self.counters.record_expirations(1);
            debug!(key, "lazily expired cache entry");
            return None;
        }

        self.counters.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// Uses the cache default when `ttl` is `None`. Inserting a new key into
    /// a full cache evicts the oldest entry first; overwriting never evicts.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) -> Result<()> {
        let key = key.into();
        let ttl = self.resolve_ttl(ttl)?;

        if let Some(previous) = self.entries.get(&key) {
            self.order.remove(previous.seq);
        } else if self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }

        let seq = self.order.record(&key);
        self.entries.insert(key, CacheEntry::new(value, ttl, seq));
        Ok(())
    }

    /// Returns the TTL a `set` with this override would use, rejecting zero.
    pub fn resolve_ttl(&self, ttl: Option<Duration>) -> Result<Duration> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        if ttl.is_zero() {
            return Err(CacheError::InvalidTtl(
                "TTL must be greater than zero".to_string(),
            ));
        }
        Ok(ttl)
    }

    // == Delete ==
    /// Removes `key`, returning whether an entry was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove_entry(key).is_some()
    }

    // == Invalidate ==
    /// Removes every key matching the `*`-glob `pattern`.
    ///
    /// Returns the number of keys removed.
    pub fn invalidate(&mut self, pattern: &str) -> Result<usize> {
        let pattern = GlobPattern::new(pattern)?;
        Ok(self.invalidate_matching(&pattern))
    }

    /// Removes every key matching an already compiled pattern.
    pub fn invalidate_matching(&mut self, pattern: &GlobPattern) -> usize {
        let keys: Vec<String> = self
            .entries
            .keys()
            .filter(|key| pattern.is_match(key))
            .cloned()
            .collect();

        for key in &keys {
            self.remove_entry(key);
        }

        debug!(pattern = pattern.as_str(), removed = keys.len(), "invalidated cache keys");
        keys.len()
    }

    // == Cleanup ==
    /// Removes all currently expired entries.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup(&mut self) -> usize {
        let now = Instant::now();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.remove_entry(key);
        }

        self.counters.record_expirations(expired.len());
        expired.len()
    }

    // == Stats ==
    /// Scans every entry and returns a diagnostic snapshot.
    pub fn stats(&self) -> CacheStats {
        let now = Instant::now();
        let mut stats = self.counters.clone();
        stats.total = self.entries.len();
        stats.expired = self
            .entries
            .values()
            .filter(|entry| entry.is_expired_at(now))
            .count();
        stats.active = stats.total - stats.expired;
        stats.approximate_memory_bytes = self
            .entries
            .iter()
            .map(|(key, entry)| estimate_entry_size(key, &entry.value))
            .sum();
        stats
    }

    // == Batch Helpers ==
    /// Looks up each key with [`get`](Self::get) semantics.
    pub fn get_batch<I, K>(&mut self, keys: I) -> HashMap<String, Option<V>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        keys.into_iter()
            .map(|key| {
                let key = key.as_ref();
                (key.to_string(), self.get(key))
            })
            .collect()
    }

    /// Stores each entry with [`set`](Self::set) semantics.
    ///
    /// Not atomic: entries before a failing one stay stored.
    pub fn set_batch<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, V, Option<Duration>)>,
    {
        for (key, value, ttl) in entries {
            self.set(key, value, ttl)?;
        }
        Ok(())
    }

    // == Inspection ==
    /// Whether `key` holds a live entry. Unlike `get`, this has no side effects.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired())
    }

    /// Remaining TTL of a live entry.
    pub fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.ttl_remaining())
    }

    /// Live keys, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        let now = Instant::now();
        self.entries
            .iter()
            .filter(|(_, entry)| !entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Drops every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Number of entries physically present, including expired ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // == Internals ==
    fn remove_entry(&mut self, key: &str) -> Option<CacheEntry<V>> {
        let entry = self.entries.remove(key)?;
        self.order.remove(entry.seq);
        Some(entry)
    }

    fn evict_oldest(&mut self) {
        if let Some(evicted) = self.order.pop_oldest() {
            self.entries.remove(&evicted);
            self.counters.record_eviction();
            debug!(key = %evicted, "evicted oldest cache entry");
        }
    }
}

impl<V: Clone + Serialize> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, DEFAULT_TTL)
    }
}

/// Rough size of one entry. Values that fail to serialize count as empty.
fn estimate_entry_size<V: Serialize>(key: &str, value: &V) -> usize {
    let value_len = serde_json::to_vec(value).map(|v| v.len()).unwrap_or(0);
    key.len() + value_len + ENTRY_OVERHEAD_BYTES
}
