//! API Routes
//!
//! Configures the Axum router with all admin endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cleanup_handler, delete_handler, get_handler, health_handler, invalidate_handler,
    set_handler, stats_handler, AppState,
};

/// Creates the admin router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /set` - Store a JSON value in the general-purpose cache
/// - `GET /get/:namespace/:key` - Retrieve a value
/// - `DELETE /del/:namespace/:key` - Delete a key
/// - `POST /invalidate` - Remove keys matching a glob
/// - `POST /cleanup` - Sweep expired entries now
/// - `GET /stats` - Per-namespace statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/set", put(set_handler))
        .route("/get/:namespace/:key", get(get_handler))
        .route("/del/:namespace/:key", delete(delete_handler))
        .route("/invalidate", post(invalidate_handler))
        .route("/cleanup", post(cleanup_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
