//! Detail presenter — transient detail view for one location.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use slotboard_domain::snapshot::Location;

use crate::ports::GridView;

/// Opens detail views and hands out self-closing handles.
pub struct DetailPresenter<V> {
    view: Arc<V>,
}

impl<V: GridView> DetailPresenter<V> {
    /// Create a presenter over the given view.
    #[must_use]
    pub fn new(view: Arc<V>) -> Self {
        Self { view }
    }

    /// Show the detail view for `location`, replacing any detail already
    /// open, and return the handle that closes it.
    #[must_use]
    pub fn show(&self, location: &Location) -> DetailHandle<V> {
        self.view.open_detail(location);
        DetailHandle {
            view: Arc::clone(&self.view),
            closed: AtomicBool::new(false),
        }
    }
}

/// Handle to one open detail view.
///
/// Closes the view exactly once, whether [`close`](Self::close) is called
/// explicitly or the handle is dropped; duplicate closes are no-ops. Callers
/// never need a separate cleanup step.
pub struct DetailHandle<V: GridView> {
    view: Arc<V>,
    closed: AtomicBool,
}

impl<V: GridView> DetailHandle<V> {
    /// Close the detail view. Idempotent.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.view.close_detail();
        }
    }
}

impl<V: GridView> Drop for DetailHandle<V> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingView, location};
    use std::sync::atomic::Ordering;

    #[test]
    fn should_open_detail_for_location() {
        let view = Arc::new(RecordingView::default());
        let presenter = DetailPresenter::new(Arc::clone(&view));

        let _handle = presenter.show(&location(7, slotboard_domain::status::SlotStatus::Occupied));

        assert_eq!(view.detail_opened.load(Ordering::SeqCst), 1);
        assert_eq!(view.open_detail_id(), Some(7.into()));
    }

    #[test]
    fn should_close_exactly_once_when_closed_then_dropped() {
        let view = Arc::new(RecordingView::default());
        let presenter = DetailPresenter::new(Arc::clone(&view));

        let handle = presenter.show(&location(7, slotboard_domain::status::SlotStatus::Free));
        handle.close();
        handle.close();
        drop(handle);

        assert_eq!(view.detail_closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn should_close_on_drop_without_explicit_close() {
        let view = Arc::new(RecordingView::default());
        let presenter = DetailPresenter::new(Arc::clone(&view));

        {
            let _handle = presenter.show(&location(3, slotboard_domain::status::SlotStatus::Reserved));
        }

        assert_eq!(view.detail_closed.load(Ordering::SeqCst), 1);
    }
}
