//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, oldest-first capacity
//! eviction and glob-pattern invalidation.

mod entry;
mod order;
mod pattern;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use pattern::GlobPattern;
pub use shared::{PreloadEntry, PreloadReport, SharedCache};
pub use stats::CacheStats;
pub use store::TtlCache;

use std::time::Duration;

// == Public Constants ==
/// Default entry cap per cache
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Default TTL for the general-purpose cache
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Fixed per-entry bookkeeping added to the memory estimate
pub const ENTRY_OVERHEAD_BYTES: usize = 64;
