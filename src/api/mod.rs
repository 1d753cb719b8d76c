//! API Module
//!
//! Admin and diagnostic HTTP surface over the process caches.
//!
//! # Endpoints
//! - `PUT /set` - Store a JSON value in the general-purpose cache
//! - `GET /get/:namespace/:key` - Retrieve a value by key
//! - `DELETE /del/:namespace/:key` - Delete a key
//! - `POST /invalidate` - Remove keys matching a glob pattern
//! - `POST /cleanup` - Sweep expired entries
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
