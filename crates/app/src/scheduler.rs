//! Refresh scheduler — the periodic trigger, with the "exactly one active
//! timer" invariant made explicit.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::ports::{GridView, SnapshotSource};
use crate::refresh::RefreshService;

/// Default cadence of the periodic refresh.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Arms and cancels the periodic refresh task.
///
/// Two states: stopped (no task) and running (one task). `start` is
/// idempotent — any existing task is cancelled before a new one is armed,
/// so two timers never coexist. Manual refreshes bypass the scheduler
/// entirely and do not affect its cadence.
pub struct RefreshScheduler {
    interval: Duration,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl RefreshScheduler {
    /// Create a stopped scheduler with the given cadence.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            task: Mutex::new(None),
        }
    }

    /// Arm the periodic refresh, cancelling any timer already armed.
    pub fn start<S, V>(&self, service: Arc<RefreshService<S, V>>)
    where
        S: SnapshotSource + 'static,
        V: GridView + 'static,
    {
        let mut task = self.lock_task();
        if let Some(previous) = task.take() {
            previous.abort();
        }

        let interval = self.interval;
        *task = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                tracing::debug!("periodic refresh tick");
                service.refresh().await;
            }
        }));
    }

    /// Cancel the periodic refresh. Must be called at component teardown;
    /// a leaked timer would keep invoking the fetcher against a dead view.
    pub fn stop(&self) {
        if let Some(task) = self.lock_task().take() {
            task.abort();
        }
    }

    /// Whether a periodic task is currently armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.lock_task().is_some()
    }

    fn lock_task(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.task.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
