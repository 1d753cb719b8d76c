//! Response DTOs for the admin API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;
use crate::context::Namespace;

/// Response body for GET /get/:namespace/:key
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub namespace: Namespace,
    pub key: String,
    pub value: Value,
}

impl GetResponse {
    pub fn new(namespace: Namespace, key: impl Into<String>, value: Value) -> Self {
        Self {
            namespace,
            key: key.into(),
            value,
        }
    }
}

/// Response body for PUT /set
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
}

impl SetResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
        }
    }
}

/// Response body for DELETE /del/:namespace/:key
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub namespace: Namespace,
    pub key: String,
}

impl DeleteResponse {
    pub fn new(namespace: Namespace, key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            namespace,
            key,
        }
    }
}

/// Response body for POST /invalidate
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    pub namespace: Namespace,
    pub pattern: String,
    /// Number of keys removed
    pub removed: usize,
}

/// Response body for POST /cleanup
#[derive(Debug, Clone, Serialize)]
pub struct CleanupResponse {
    /// Expired entries removed, per namespace
    pub removed: BTreeMap<Namespace, usize>,
    pub total_removed: usize,
}

impl CleanupResponse {
    pub fn new(removed: BTreeMap<Namespace, usize>) -> Self {
        let total_removed = removed.values().sum();
        Self {
            removed,
            total_removed,
        }
    }
}

/// One namespace's entry in the stats endpoint
#[derive(Debug, Clone, Serialize)]
pub struct NamespaceStats {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

/// Response body for GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub namespaces: BTreeMap<Namespace, NamespaceStats>,
}

impl StatsResponse {
    pub fn new(stats: BTreeMap<Namespace, CacheStats>) -> Self {
        let namespaces = stats
            .into_iter()
            .map(|(namespace, stats)| {
                let hit_rate = stats.hit_rate();
                (namespace, NamespaceStats { stats, hit_rate })
            })
            .collect();
        Self { namespaces }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
