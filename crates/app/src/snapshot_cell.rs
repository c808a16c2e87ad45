//! Shared snapshot slot — the single piece of shared state in the core.
//!
//! The held snapshot is replaced wholesale, never mutated in place, so
//! readers (render, lookup) always see either the old or the new snapshot
//! and never a partially updated one.

use std::sync::{Arc, PoisonError, RwLock};

use slotboard_domain::snapshot::Snapshot;

/// Holds the currently displayed snapshot, if any.
#[derive(Debug, Default)]
pub struct SnapshotCell {
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl SnapshotCell {
    /// Create an empty cell (no snapshot fetched yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the held snapshot. The previous one becomes
    /// garbage-eligible as soon as the last reader drops its `Arc`.
    pub fn replace(&self, snapshot: Arc<Snapshot>) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(snapshot);
    }

    /// The currently held snapshot, or `None` before the first successful
    /// fetch.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotboard_domain::snapshot::Summary;

    fn snapshot(total: u32) -> Arc<Snapshot> {
        Arc::new(Snapshot {
            rows: Vec::new(),
            summary: Summary {
                total,
                free: total,
                reserved: 0,
                occupied: 0,
            },
        })
    }

    #[test]
    fn should_start_empty() {
        let cell = SnapshotCell::new();
        assert!(cell.current().is_none());
    }

    #[test]
    fn should_replace_previous_snapshot_wholesale() {
        let cell = SnapshotCell::new();
        cell.replace(snapshot(1));
        let old = cell.current().unwrap();
        cell.replace(snapshot(2));
        let new = cell.current().unwrap();
        assert_eq!(old.summary.total, 1);
        assert_eq!(new.summary.total, 2);
    }

    #[test]
    fn should_keep_old_reader_arc_valid_after_replacement() {
        let cell = SnapshotCell::new();
        cell.replace(snapshot(1));
        let held = cell.current().unwrap();
        cell.replace(snapshot(2));
        // A reader that grabbed the old snapshot keeps a consistent view.
        assert_eq!(held.summary.total, 1);
    }
}
