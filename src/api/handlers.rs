//! API Handlers
//!
//! HTTP request handlers for each admin endpoint.

use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::context::{CacheContext, Namespace};
use crate::error::{CacheError, Result};
use crate::models::{
    CleanupResponse, DeleteResponse, GetResponse, HealthResponse, InvalidateRequest,
    InvalidateResponse, SetRequest, SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Wraps the process-wide [`CacheContext`]; cloning is cheap and shares the
/// same caches.
#[derive(Clone, Default)]
pub struct AppState {
    pub caches: CacheContext,
}

impl AppState {
    pub fn new(caches: CacheContext) -> Self {
        Self { caches }
    }

    /// Creates a new AppState with fresh caches built from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(CacheContext::from_config(config))
    }
}

/// Handler for PUT /set
///
/// Stores a JSON value in the general-purpose cache with optional TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = req.ttl_ms.map(Duration::from_millis);
    state.caches.global.set(req.key.clone(), req.value, ttl).await?;

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:namespace/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path((namespace, key)): Path<(String, String)>,
) -> Result<Json<GetResponse>> {
    let namespace: Namespace = namespace.parse()?;
    let value = state
        .caches
        .lookup(namespace, &key)
        .await
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(namespace, key, value)))
}

/// Handler for DELETE /del/:namespace/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path((namespace, key)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>> {
    let namespace: Namespace = namespace.parse()?;
    if !state.caches.delete(namespace, &key).await {
        return Err(CacheError::NotFound(key));
    }

    Ok(Json(DeleteResponse::new(namespace, key)))
}

/// Handler for POST /invalidate
///
/// Removes every key of one namespace matching a `*`-glob.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Json(req): Json<InvalidateRequest>,
) -> Result<Json<InvalidateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let namespace: Namespace = req.namespace.parse()?;
    let removed = state.caches.invalidate(namespace, &req.pattern).await?;
    info!(%namespace, pattern = %req.pattern, removed, "invalidated via admin API");

    Ok(Json(InvalidateResponse {
        namespace,
        pattern: req.pattern,
        removed,
    }))
}

/// Handler for POST /cleanup
///
/// Runs an immediate expiry sweep over every namespace.
pub async fn cleanup_handler(State(state): State<AppState>) -> Json<CleanupResponse> {
    Json(CleanupResponse::new(state.caches.cleanup_all().await))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.caches.stats_all().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
