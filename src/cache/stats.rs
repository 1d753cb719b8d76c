//! Cache Statistics Module
//!
//! Diagnostic snapshot of a cache: entry counts computed by scanning against
//! the current time, an approximate memory footprint, and running counters
//! for hits, misses, evictions and lazy expirations.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of a cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Entries physically present, live or not
    pub total: usize,
    /// Entries whose TTL has not elapsed
    pub active: usize,
    /// Entries past their TTL but not yet swept
    pub expired: usize,
    /// Estimated size of keys and serialized values plus per-entry overhead
    pub approximate_memory_bytes: usize,
    /// Lookups that returned a value
    pub hits: u64,
    /// Lookups that returned nothing (absent or expired)
    pub misses: u64,
    /// Entries dropped to respect the capacity cap
    pub evictions: u64,
    /// Entries removed because they were found expired
    pub expirations: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(CacheStats::new().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_record_eviction_and_expirations() {
        let mut stats = CacheStats::new();
        stats.record_eviction();
        stats.record_eviction();
        stats.record_expirations(3);
        assert_eq!(stats.evictions, 2);
        assert_eq!(stats.expirations, 3);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = CacheStats {
            total: 2,
            active: 1,
            expired: 1,
            ..CacheStats::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["active"], 1);
        assert_eq!(json["expired"], 1);
        assert!(json.get("approximate_memory_bytes").is_some());
    }
}
