//! Time formatting port — locale-specific rendering of refresh times.

use slotboard_domain::time::Timestamp;

/// External collaborator producing a human-readable time string for the
/// "last refreshed" display. Locale handling lives entirely behind this
/// boundary.
pub trait TimeFormatter: Send + Sync {
    /// Format a timestamp for display.
    fn format(&self, ts: Timestamp) -> String;
}
