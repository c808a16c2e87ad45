//! Refresh service — single-flight fetch, atomic snapshot replacement,
//! error routing, and the teardown liveness guard.
//!
//! Every refresh trigger (initial load, periodic tick, manual button)
//! funnels through [`RefreshService::refresh`]; the in-flight guard it owns
//! is what serializes the effects of all other components.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use slotboard_domain::error::FetchError;
use slotboard_domain::snapshot::Snapshot;

use crate::notifier::ErrorNotifier;
use crate::ports::{GridView, SnapshotSource};
use crate::snapshot_cell::SnapshotCell;

/// Generic message shown for transport-class failures, where the data
/// source provided no text of its own.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Failed to load occupancy data. Please try again.";

/// What a single refresh call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A new snapshot was fetched, stored, and rendered.
    Rendered,
    /// The fetch failed; the previous snapshot stays rendered and the
    /// error notifier was invoked.
    Failed,
    /// Another fetch was already in flight; this trigger was dropped
    /// without making a request.
    AlreadyRunning,
    /// The component was destroyed; nothing was touched.
    Dead,
}

/// Coordinates fetching and rendering of occupancy snapshots.
pub struct RefreshService<S, V> {
    source: S,
    view: Arc<V>,
    cell: Arc<SnapshotCell>,
    notifier: ErrorNotifier<V>,
    in_flight: AtomicBool,
    alive: AtomicBool,
}

impl<S, V> RefreshService<S, V>
where
    S: SnapshotSource,
    V: GridView + 'static,
{
    /// Create a service over the given source, view, snapshot cell, and
    /// notifier.
    #[must_use]
    pub fn new(
        source: S,
        view: Arc<V>,
        cell: Arc<SnapshotCell>,
        notifier: ErrorNotifier<V>,
    ) -> Self {
        Self {
            source,
            view,
            cell,
            notifier,
            in_flight: AtomicBool::new(false),
            alive: AtomicBool::new(true),
        }
    }

    /// Fetch one snapshot and update the display.
    ///
    /// Single-flight: when a fetch is already in progress the call resolves
    /// immediately as [`RefreshOutcome::AlreadyRunning`] without making a
    /// request or altering any state. On failure the previously held
    /// snapshot and its rendering stay untouched; stale data is preferred
    /// over blanking the grid.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> RefreshOutcome {
        if !self.alive.load(Ordering::SeqCst) {
            return RefreshOutcome::Dead;
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("refresh already in flight, dropping trigger");
            return RefreshOutcome::AlreadyRunning;
        }

        self.view.set_loading(true);
        let result = self.source.fetch_snapshot().await;

        // The completion path of a fetch that outlived destroy() must not
        // touch view state.
        let outcome = if self.alive.load(Ordering::SeqCst) {
            let outcome = self.apply(result);
            self.view.set_loading(false);
            outcome
        } else {
            RefreshOutcome::Dead
        };

        // Cleared before control returns to the scheduler, so no trigger
        // ever observes a stale in-flight flag.
        self.in_flight.store(false, Ordering::SeqCst);
        outcome
    }

    fn apply(&self, result: Result<Snapshot, FetchError>) -> RefreshOutcome {
        match result {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                self.cell.replace(Arc::clone(&snapshot));
                self.view.render(&snapshot);
                tracing::debug!(
                    locations = snapshot.location_count(),
                    "snapshot rendered"
                );
                RefreshOutcome::Rendered
            }
            Err(FetchError::Domain(message)) => {
                tracing::warn!(%message, "occupancy source reported failure");
                self.notifier.notify(&message);
                RefreshOutcome::Failed
            }
            Err(FetchError::Transport(reason)) => {
                tracing::warn!(%reason, "snapshot fetch failed");
                self.notifier.notify(TRANSPORT_ERROR_MESSAGE);
                RefreshOutcome::Failed
            }
        }
    }

    /// Mark the component dead. Fetches completing after this point no-op.
    pub fn shutdown(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    /// Whether the component is still live.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}
