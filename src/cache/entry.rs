//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The memoized value, opaque to the cache
    pub value: V,
    /// Monotonic creation time
    pub inserted_at: Instant,
    /// Entry-specific time-to-live
    pub ttl: Duration,
    /// Insertion sequence number, strictly increasing per cache
    pub seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Time-to-live for this entry
    /// * `seq` - Insertion sequence number assigned by the owning cache
    pub fn new(value: V, ttl: Duration, seq: u64) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
            ttl,
            seq,
        }
    }

    // == Age ==
    /// Time elapsed since the entry was inserted.
    pub fn age(&self) -> Duration {
        self.inserted_at.elapsed()
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is live while its age is less than or equal to its TTL, so it
    /// expires only once the TTL has been strictly exceeded.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Same as [`is_expired`](Self::is_expired) against a caller-supplied
    /// instant, so a scan can evaluate every entry against one clock reading.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.inserted_at) > self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining TTL, or `Duration::ZERO` once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.age())
    }
}
