//! Grid view port — the presentation surface the core drives.

use slotboard_domain::snapshot::{Location, Snapshot};

/// Presentation surface for the occupancy grid.
///
/// All methods are synchronous with respect to the cooperative scheduler;
/// only the snapshot fetch suspends. Implementations fully replace their
/// grid content on each [`render`](Self::render) call rather than diffing —
/// a deliberate simplicity tradeoff, not an oversight.
pub trait GridView: Send + Sync {
    /// Rebuild the visual tree from a snapshot: summary, rows, levels,
    /// slots, and a "last refreshed" stamp taken at call time.
    ///
    /// Must be idempotent: rendering the same snapshot twice produces an
    /// observably identical result.
    fn render(&self, snapshot: &Snapshot);

    /// Toggle the loading indicator. Active strictly while a fetch is in
    /// flight.
    fn set_loading(&self, active: bool);

    /// Show an error banner, replacing any banner currently visible.
    fn show_error_banner(&self, message: &str);

    /// Remove the error banner. A no-op when none is visible.
    fn clear_error_banner(&self);

    /// Open the detail panel for one location, replacing any open detail.
    fn open_detail(&self, location: &Location);

    /// Close the detail panel. A no-op when none is open.
    fn close_detail(&self);
}
