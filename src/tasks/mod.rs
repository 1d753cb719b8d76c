//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the caches.
//!
//! # Tasks
//! - TTL Cleanup: Removes expired entries from every cache at a fixed interval

mod cleanup;

pub use cleanup::CleanupTask;
