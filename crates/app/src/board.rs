//! Occupancy board — the dashboard component itself.
//!
//! An explicit component with constructor-injected collaborators and an
//! externally driven lifecycle: the host calls [`start`](OccupancyBoard::start)
//! once when the component is shown and [`destroy`](OccupancyBoard::destroy)
//! exactly once at teardown.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use slotboard_domain::snapshot::Snapshot;

use crate::detail::DetailPresenter;
use crate::notifier::ErrorNotifier;
use crate::ports::{GridView, SnapshotSource};
use crate::refresh::{RefreshOutcome, RefreshService};
use crate::scheduler::RefreshScheduler;
use crate::selection::{
    SelectionDispatcher, SelectionReceiver, SelectionSender, selection_channel,
};
use crate::snapshot_cell::SnapshotCell;

/// Tuning knobs for an [`OccupancyBoard`].
#[derive(Debug, Clone, Copy)]
pub struct BoardConfig {
    /// Cadence of the periodic refresh.
    pub refresh_interval: Duration,
    /// How long an error banner stays up before dismissing itself.
    pub error_dismiss_after: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            refresh_interval: crate::scheduler::DEFAULT_REFRESH_INTERVAL,
            error_dismiss_after: crate::notifier::DEFAULT_DISMISS_AFTER,
        }
    }
}

/// The occupancy dashboard component.
///
/// Owns the refresh service, the scheduler, the selection dispatcher, and
/// the error notifier; the view and snapshot source are injected.
pub struct OccupancyBoard<S, V> {
    service: Arc<RefreshService<S, V>>,
    scheduler: RefreshScheduler,
    notifier: ErrorNotifier<V>,
    cell: Arc<SnapshotCell>,
    selection: SelectionSender,
    pending_receiver: Mutex<Option<SelectionReceiver>>,
    pending_dispatcher: Mutex<Option<SelectionDispatcher<V>>>,
    dispatcher_task: Mutex<Option<JoinHandle<()>>>,
}

impl<S, V> OccupancyBoard<S, V>
where
    S: SnapshotSource + 'static,
    V: GridView + 'static,
{
    /// Wire a board from its injected collaborators.
    #[must_use]
    pub fn new(source: S, view: Arc<V>, config: BoardConfig) -> Self {
        let cell = Arc::new(SnapshotCell::new());
        let notifier = ErrorNotifier::new(Arc::clone(&view), config.error_dismiss_after);
        let service = Arc::new(RefreshService::new(
            source,
            Arc::clone(&view),
            Arc::clone(&cell),
            notifier.clone(),
        ));
        let presenter = DetailPresenter::new(view);
        let dispatcher = SelectionDispatcher::new(Arc::clone(&cell), presenter);
        let (selection, receiver) = selection_channel();

        Self {
            service,
            scheduler: RefreshScheduler::new(config.refresh_interval),
            notifier,
            cell,
            selection,
            pending_receiver: Mutex::new(Some(receiver)),
            pending_dispatcher: Mutex::new(Some(dispatcher)),
            dispatcher_task: Mutex::new(None),
        }
    }

    /// Bring the component up: initial fetch-and-render, then arm the
    /// periodic refresh and the selection dispatcher.
    ///
    /// Returns what the initial refresh did. Host hooks call this once;
    /// repeated calls re-arm the scheduler without duplicating it and leave
    /// the dispatcher untouched.
    pub async fn start(&self) -> RefreshOutcome {
        let outcome = self.service.refresh().await;

        self.scheduler.start(Arc::clone(&self.service));

        let receiver = lock(&self.pending_receiver).take();
        let dispatcher = lock(&self.pending_dispatcher).take();
        if let (Some(receiver), Some(dispatcher)) = (receiver, dispatcher) {
            *lock(&self.dispatcher_task) = Some(tokio::spawn(dispatcher.run(receiver)));
        }

        outcome
    }

    /// Manually triggered refresh, independent of the timer. Does not
    /// reset the periodic cadence.
    pub async fn refresh_now(&self) -> RefreshOutcome {
        self.service.refresh().await
    }

    /// Sender for slot selection and detail-close signals, for the view
    /// adapter or host to emit on.
    #[must_use]
    pub fn selection(&self) -> SelectionSender {
        self.selection.clone()
    }

    /// Manually dismiss the error banner.
    pub fn dismiss_error(&self) {
        self.notifier.dismiss();
    }

    /// The currently held snapshot, if any.
    #[must_use]
    pub fn current_snapshot(&self) -> Option<Arc<Snapshot>> {
        self.cell.current()
    }

    /// Tear the component down: mark it dead, cancel the periodic timer,
    /// stop the dispatcher, and cancel any pending banner auto-dismiss.
    ///
    /// In-flight fetches are not cancelled; their completion observes the
    /// dead flag and no-ops.
    pub fn destroy(&self) {
        self.service.shutdown();
        self.scheduler.stop();
        self.notifier.shutdown();
        if let Some(task) = lock(&self.dispatcher_task).take() {
            task.abort();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
