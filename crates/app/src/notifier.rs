//! Error notifier — a single transient error banner with auto-dismiss.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::ports::GridView;

/// Default delay before an error banner dismisses itself.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Shows at most one error banner at a time.
///
/// A new message replaces the current banner and cancels its pending
/// auto-dismiss, so a stale timer can never clear a newer message. Manual
/// dismissal cancels the pending auto-dismiss the same way.
pub struct ErrorNotifier<V> {
    view: Arc<V>,
    dismiss_after: Duration,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl<V> Clone for ErrorNotifier<V> {
    fn clone(&self) -> Self {
        Self {
            view: Arc::clone(&self.view),
            dismiss_after: self.dismiss_after,
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<V: GridView + 'static> ErrorNotifier<V> {
    /// Create a notifier over the given view.
    #[must_use]
    pub fn new(view: Arc<V>, dismiss_after: Duration) -> Self {
        Self {
            view,
            dismiss_after,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Show `message`, replacing any banner currently visible, and arm the
    /// auto-dismiss timer.
    pub fn notify(&self, message: &str) {
        let mut pending = self.lock_pending();
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        self.view.show_error_banner(message);

        let view = Arc::clone(&self.view);
        let dismiss_after = self.dismiss_after;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;
            view.clear_error_banner();
        }));
    }

    /// Dismiss the banner now and cancel the pending auto-dismiss.
    pub fn dismiss(&self) {
        if let Some(previous) = self.lock_pending().take() {
            previous.abort();
        }
        self.view.clear_error_banner();
    }

    /// Cancel the pending auto-dismiss without touching the view. Used at
    /// component teardown so no timer outlives the board.
    pub fn shutdown(&self) {
        if let Some(previous) = self.lock_pending().take() {
            previous.abort();
        }
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingView;
    use std::sync::atomic::Ordering;

    #[tokio::test(start_paused = true)]
    async fn should_show_banner_with_message() {
        let view = Arc::new(RecordingView::default());
        let notifier = ErrorNotifier::new(Arc::clone(&view), DEFAULT_DISMISS_AFTER);

        notifier.notify("rack scanner offline");

        assert_eq!(view.banner(), Some("rack scanner offline".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn should_auto_dismiss_after_delay() {
        let view = Arc::new(RecordingView::default());
        let notifier = ErrorNotifier::new(Arc::clone(&view), DEFAULT_DISMISS_AFTER);

        notifier.notify("boom");
        tokio::time::sleep(Duration::from_secs(6)).await;

        assert_eq!(view.banner(), None);
        assert_eq!(view.banner_cleared.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_auto_dismiss_again_after_manual_dismissal() {
        let view = Arc::new(RecordingView::default());
        let notifier = ErrorNotifier::new(Arc::clone(&view), DEFAULT_DISMISS_AFTER);

        notifier.notify("boom");
        notifier.dismiss();
        tokio::time::sleep(Duration::from_secs(10)).await;

        // Only the manual dismissal cleared the banner; the cancelled timer
        // never acted on the already-removed banner.
        assert_eq!(view.banner_cleared.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_replace_banner_and_cancel_previous_timer() {
        let view = Arc::new(RecordingView::default());
        let notifier = ErrorNotifier::new(Arc::clone(&view), DEFAULT_DISMISS_AFTER);

        notifier.notify("first");
        tokio::time::sleep(Duration::from_secs(3)).await;
        notifier.notify("second");
        // The first timer would have fired at t=5s; it must not clear the
        // replacement banner shown at t=3s.
        tokio::time::sleep(Duration::from_secs(3)).await;

        assert_eq!(view.banner(), Some("second".to_string()));
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(view.banner(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_touch_view_when_shut_down() {
        let view = Arc::new(RecordingView::default());
        let notifier = ErrorNotifier::new(Arc::clone(&view), DEFAULT_DISMISS_AFTER);

        notifier.notify("boom");
        notifier.shutdown();
        tokio::time::sleep(Duration::from_secs(10)).await;

        // Banner text stays as-is; nothing cleared it after teardown.
        assert_eq!(view.banner(), Some("boom".to_string()));
        assert_eq!(view.banner_cleared.load(Ordering::SeqCst), 0);
    }
}
