//! # slotboard-adapter-http
//!
//! [`SnapshotSource`] implementation over HTTP/JSON.
//!
//! One parameterless GET against the grid endpoint returns the full
//! occupancy envelope `{ success, rows, summary, error? }`. A `success:
//! false` payload becomes [`FetchError::Domain`] carrying the server's
//! message; everything else that can go wrong — connection, timeout,
//! non-2xx status, undecodable or malformed body, duplicate slot ids — is
//! transport-class.

use std::future::Future;

use slotboard_app::ports::SnapshotSource;
use slotboard_domain::error::FetchError;
use slotboard_domain::snapshot::Snapshot;

mod wire;

/// Snapshot source backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpSnapshotSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSnapshotSource {
    /// Create a source with a default client.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a source with a caller-provided client (timeouts, proxies).
    #[must_use]
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl SnapshotSource for HttpSnapshotSource {
    fn fetch_snapshot(&self) -> impl Future<Output = Result<Snapshot, FetchError>> + Send {
        async move {
            tracing::debug!(endpoint = %self.endpoint, "fetching occupancy snapshot");
            let response = self
                .client
                .get(&self.endpoint)
                .send()
                .await
                .map_err(transport)?
                .error_for_status()
                .map_err(transport)?;
            let envelope: wire::GridResponse = response.json().await.map_err(transport)?;
            envelope.into_snapshot()
        }
    }
}

fn transport(err: reqwest::Error) -> FetchError {
    FetchError::Transport(err.to_string())
}
