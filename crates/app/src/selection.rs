//! Selection channel and dispatcher — routes slot selections from the view
//! to lookup and the detail presenter.
//!
//! Rendering emits selection events onto a typed channel instead of binding
//! coordination logic into the presentation layer; this dispatcher is the
//! only consumer.

use std::sync::Arc;

use tokio::sync::mpsc;

use slotboard_domain::id::LocationId;

use crate::detail::{DetailHandle, DetailPresenter};
use crate::ports::GridView;
use crate::snapshot_cell::SnapshotCell;

/// A user interaction with the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A rendered slot was activated.
    Select(LocationId),
    /// The open detail view was closed.
    CloseDetail,
}

/// Sender half handed to view adapters and the host.
#[derive(Debug, Clone)]
pub struct SelectionSender {
    tx: mpsc::UnboundedSender<SelectionEvent>,
}

impl SelectionSender {
    /// Emit a slot selection. Dropped silently if the dispatcher is gone.
    pub fn select(&self, id: LocationId) {
        let _ = self.tx.send(SelectionEvent::Select(id));
    }

    /// Emit a close signal for the open detail view.
    pub fn close_detail(&self) {
        let _ = self.tx.send(SelectionEvent::CloseDetail);
    }
}

/// Receiver half consumed by the dispatcher task.
pub struct SelectionReceiver {
    rx: mpsc::UnboundedReceiver<SelectionEvent>,
}

/// Create a connected selection channel.
#[must_use]
pub fn selection_channel() -> (SelectionSender, SelectionReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SelectionSender { tx }, SelectionReceiver { rx })
}

/// Resolves selection events against the current snapshot and drives the
/// detail presenter.
pub struct SelectionDispatcher<V> {
    cell: Arc<SnapshotCell>,
    presenter: DetailPresenter<V>,
}

impl<V: GridView + 'static> SelectionDispatcher<V> {
    /// Create a dispatcher over the shared snapshot cell and presenter.
    #[must_use]
    pub fn new(cell: Arc<SnapshotCell>, presenter: DetailPresenter<V>) -> Self {
        Self { cell, presenter }
    }

    /// Consume selection events until the channel closes.
    ///
    /// A lookup miss is diagnostics-only: selections originate from
    /// elements rendered out of the currently held snapshot, so a miss
    /// should be unreachable in normal operation.
    pub async fn run(self, mut events: SelectionReceiver) {
        let mut open: Option<DetailHandle<V>> = None;
        while let Some(event) = events.rx.recv().await {
            match event {
                SelectionEvent::Select(id) => {
                    let Some(snapshot) = self.cell.current() else {
                        tracing::warn!(%id, "slot selected before any snapshot was fetched");
                        continue;
                    };
                    match snapshot.find_location(id) {
                        Some(location) => {
                            // Close the previous detail before opening the
                            // replacement, so the close cannot clobber it.
                            if let Some(previous) = open.take() {
                                previous.close();
                            }
                            open = Some(self.presenter.show(location));
                        }
                        None => {
                            tracing::warn!(%id, "selected slot not present in current snapshot");
                        }
                    }
                }
                SelectionEvent::CloseDetail => {
                    if let Some(handle) = open.take() {
                        handle.close();
                    }
                }
            }
        }
    }
}
