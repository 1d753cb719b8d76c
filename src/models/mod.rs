//! Data models
//!
//! Catalog types memoized by the catalog caches, plus the DTOs used for
//! serializing/deserializing admin API request and response bodies.

pub mod catalog;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use catalog::{ClothingFilters, ClothingItem, Recommendation, RecommendationPreferences};
pub use requests::{InvalidateRequest, SetRequest};
pub use responses::{
    CleanupResponse, DeleteResponse, ErrorResponse, GetResponse, HealthResponse,
    InvalidateResponse, SetResponse, StatsResponse,
};
