//! # slotboard-app
//!
//! Application layer — port definitions (traits) and the refresh/render
//! coordination logic.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - [`SnapshotSource`](ports::SnapshotSource) — fetch one occupancy snapshot
//!   - [`GridView`](ports::GridView) — present grid, banner, loading, detail
//!   - [`TimeFormatter`](ports::TimeFormatter) — locale time formatting
//! - Provide the coordination components:
//!   - [`RefreshService`](refresh::RefreshService) — single-flight fetch,
//!     atomic snapshot replacement, error routing, liveness guard
//!   - [`RefreshScheduler`](scheduler::RefreshScheduler) — periodic refresh,
//!     never more than one active timer
//!   - [`SelectionDispatcher`](selection::SelectionDispatcher) — routes slot
//!     selections through lookup to the detail presenter
//!   - [`ErrorNotifier`](notifier::ErrorNotifier) — transient error banner
//!     with auto-dismiss
//!   - [`OccupancyBoard`](board::OccupancyBoard) — the component itself, with
//!     an explicit `start`/`destroy` lifecycle for the host
//!
//! ## Dependency rule
//! Depends on `slotboard-domain` only (plus tokio for tasks, channels, and
//! timers). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod board;
pub mod detail;
pub mod notifier;
pub mod ports;
pub mod refresh;
pub mod scheduler;
pub mod selection;
pub mod snapshot_cell;

#[cfg(test)]
mod test_support;
