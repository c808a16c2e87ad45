//! Snapshot source port — where occupancy data comes from.

use std::future::Future;

use slotboard_domain::error::FetchError;
use slotboard_domain::snapshot::Snapshot;

/// Provider of occupancy snapshots.
///
/// The only suspension point in the whole component: implementations talk
/// to the network (or a fake). One call returns one complete snapshot; the
/// caller never sees partial data.
pub trait SnapshotSource: Send + Sync {
    /// Fetch one complete occupancy snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Domain`] when the data source answered but
    /// reported its own failure, [`FetchError::Transport`] for network,
    /// timeout, decode, or malformed-payload failures.
    fn fetch_snapshot(&self) -> impl Future<Output = Result<Snapshot, FetchError>> + Send;
}
