//! VirtualFit Cache - In-process TTL caching for catalog and recommendation queries
//!
//! Provides a size-bounded TTL cache with glob-pattern invalidation,
//! fetch-on-miss memoization, and namespaced wrappers for the clothing
//! catalog and personalised recommendations.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{PreloadEntry, PreloadReport, SharedCache, TtlCache};
pub use catalog::{ClothingItemCache, RecommendationCache};
pub use config::Config;
pub use context::{CacheContext, Namespace};
pub use error::{CacheError, Result};
pub use tasks::CleanupTask;
