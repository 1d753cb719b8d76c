//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired entries out of every
//! cache in a [`CacheContext`]. Reads already expire entries lazily, so the
//! sweep only bounds memory held by keys nobody asks for again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::context::CacheContext;

/// Handle to a running cleanup loop.
///
/// The loop is tied to this handle: call [`stop`](Self::stop) on shutdown.
/// Dropping the handle also aborts the loop.
#[derive(Debug)]
pub struct CleanupTask {
    handle: JoinHandle<()>,
}

impl CleanupTask {
    /// Spawns the cleanup loop on the current Tokio runtime.
    ///
    /// The first sweep runs one `interval` after start.
    pub fn start(context: CacheContext, interval: Duration) -> Self {
        let handle = tokio::spawn(async move {
            info!(
                "Starting TTL cleanup task with interval of {:?}",
                interval
            );

            loop {
                tokio::time::sleep(interval).await;

                let removed = context.cleanup_all().await;
                let total: usize = removed.values().sum();

                if total > 0 {
                    info!(?removed, "TTL cleanup: removed {} expired entries", total);
                } else {
                    debug!("TTL cleanup: no expired entries found");
                }
            }
        });

        Self { handle }
    }

    /// Aborts the loop. A sweep in progress is cancelled at its next await.
    pub fn stop(self) {
        self.handle.abort();
        warn!("Cleanup task stopped");
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CleanupTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
