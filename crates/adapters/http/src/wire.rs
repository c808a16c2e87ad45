//! Wire format of the grid endpoint.

use serde::Deserialize;

use slotboard_domain::error::FetchError;
use slotboard_domain::snapshot::{Row, Snapshot, Summary};

/// Response envelope of the grid endpoint.
///
/// `success` is mandatory; a body without it fails deserialization and is
/// reported as a transport-class failure by the caller.
#[derive(Debug, Deserialize)]
pub(crate) struct GridResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    rows: Vec<Row>,
    #[serde(default)]
    summary: Option<Summary>,
}

impl GridResponse {
    /// Convert the envelope into a domain snapshot.
    ///
    /// # Errors
    ///
    /// [`FetchError::Domain`] when the server reported `success: false`;
    /// [`FetchError::Transport`] when a successful envelope is structurally
    /// unusable (no summary, duplicate location ids).
    pub(crate) fn into_snapshot(self) -> Result<Snapshot, FetchError> {
        if !self.success {
            return Err(FetchError::Domain(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }
        let summary = self
            .summary
            .ok_or_else(|| FetchError::Transport("response is missing summary".to_string()))?;

        let snapshot = Snapshot {
            rows: self.rows,
            summary,
        };
        snapshot
            .validate()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        Ok(snapshot)
    }
}
