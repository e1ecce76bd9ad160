//! Toast Sweep Task
//!
//! Background task that periodically removes expired toast notifications.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::notify::ToastQueue;

/// Spawns a background task that periodically drops expired toasts.
///
/// The task sleeps for `interval_secs` between sweeps and takes a write lock
/// on the queue only for the sweep itself.
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let toasts = Arc::new(RwLock::new(ToastQueue::new(3000)));
/// let sweeper = spawn_toast_sweeper(toasts.clone(), 1);
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_toast_sweeper(toasts: Arc<RwLock<ToastQueue>>, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!("Starting toast sweeper with interval of {} seconds", interval.as_secs());

        loop {
            tokio::time::sleep(interval).await;

            let removed = toasts.write().await.cleanup_expired();

            if removed > 0 {
                debug!("Toast sweep: removed {} expired toasts", removed);
            }
        }
    })
}
