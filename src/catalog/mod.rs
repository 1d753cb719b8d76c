//! Catalog Caches
//!
//! Namespaced wrappers over [`SharedCache`](crate::cache::SharedCache) that
//! build deterministic keys from query structs and pick a TTL per data type.

mod clothing;
mod recommendations;

pub use clothing::{ClothingItemCache, CLOTHING_NAMESPACE, DEFAULT_CLOTHING_TTL};
pub use recommendations::{
    RecommendationCache, DEFAULT_RECOMMENDATION_TTL, RECOMMENDATION_NAMESPACE,
};
