//! Common error types used across the workspace.
//!
//! Each layer defines typed errors and converts via `#[from]`; no bare
//! `String` errors cross crate boundaries.

use crate::id::LocationId;

/// Failure of a snapshot fetch, as seen by the refresh logic.
///
/// The distinction matters for presentation only: a domain failure carries
/// a message authored by the data source, a transport failure is shown as a
/// generic message. Either way the previously held snapshot stays rendered.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The data source answered but reported a failure of its own
    /// (`success: false` on the wire).
    #[error("occupancy source reported an error: {0}")]
    Domain(String),

    /// Network, timeout, decode, or malformed-payload failure.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Violation of a snapshot structural invariant.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The same location id appears more than once in one snapshot.
    #[error("duplicate location id {0} in snapshot")]
    DuplicateLocationId(LocationId),
}
