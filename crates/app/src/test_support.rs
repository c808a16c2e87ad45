//! Shared fakes for app-layer tests: a recording view and a scripted
//! snapshot source.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use slotboard_domain::error::FetchError;
use slotboard_domain::id::LocationId;
use slotboard_domain::snapshot::{Level, Location, Row, Snapshot, Summary};
use slotboard_domain::status::SlotStatus;

use crate::ports::{GridView, SnapshotSource};

/// Build a location with the given id and status.
pub fn location(id: i64, status: SlotStatus) -> Location {
    Location {
        id: LocationId::new(id),
        name: format!("A-A-{id:02}"),
        status,
        details: serde_json::Map::new(),
    }
}

/// Build a one-row, one-level snapshot holding the given locations.
pub fn snapshot_with(locations: Vec<Location>) -> Snapshot {
    let free = locations
        .iter()
        .filter(|l| l.status == SlotStatus::Free)
        .count() as u32;
    let reserved = locations
        .iter()
        .filter(|l| l.status == SlotStatus::Reserved)
        .count() as u32;
    let occupied = locations
        .iter()
        .filter(|l| l.status == SlotStatus::Occupied)
        .count() as u32;
    Snapshot {
        summary: Summary {
            total: locations.len() as u32,
            free,
            reserved,
            occupied,
        },
        rows: vec![Row {
            name: "Row A".to_string(),
            levels: vec![Level {
                name: "E".to_string(),
                locations,
            }],
        }],
    }
}

/// View fake that records every call the core makes.
#[derive(Default)]
pub struct RecordingView {
    pub renders: Mutex<Vec<Snapshot>>,
    pub loading_transitions: Mutex<Vec<bool>>,
    banner_text: Mutex<Option<String>>,
    pub banner_shown: AtomicUsize,
    pub banner_cleared: AtomicUsize,
    detail_id: Mutex<Option<LocationId>>,
    pub detail_opened: AtomicUsize,
    pub detail_closed: AtomicUsize,
}

impl RecordingView {
    pub fn render_count(&self) -> usize {
        self.renders.lock().unwrap().len()
    }

    pub fn last_render(&self) -> Option<Snapshot> {
        self.renders.lock().unwrap().last().cloned()
    }

    pub fn banner(&self) -> Option<String> {
        self.banner_text.lock().unwrap().clone()
    }

    pub fn open_detail_id(&self) -> Option<LocationId> {
        *self.detail_id.lock().unwrap()
    }

    pub fn loading_active(&self) -> bool {
        self.loading_transitions
            .lock()
            .unwrap()
            .last()
            .copied()
            .unwrap_or(false)
    }
}

impl GridView for RecordingView {
    fn render(&self, snapshot: &Snapshot) {
        self.renders.lock().unwrap().push(snapshot.clone());
    }

    fn set_loading(&self, active: bool) {
        self.loading_transitions.lock().unwrap().push(active);
    }

    fn show_error_banner(&self, message: &str) {
        self.banner_shown.fetch_add(1, Ordering::SeqCst);
        *self.banner_text.lock().unwrap() = Some(message.to_string());
    }

    fn clear_error_banner(&self) {
        self.banner_cleared.fetch_add(1, Ordering::SeqCst);
        *self.banner_text.lock().unwrap() = None;
    }

    fn open_detail(&self, location: &Location) {
        self.detail_opened.fetch_add(1, Ordering::SeqCst);
        *self.detail_id.lock().unwrap() = Some(location.id);
    }

    fn close_detail(&self) {
        self.detail_closed.fetch_add(1, Ordering::SeqCst);
        *self.detail_id.lock().unwrap() = None;
    }
}

/// Snapshot source fake driven by a script of responses.
///
/// Responses are served front to back; once the script is exhausted every
/// further call returns a clone of the fallback snapshot. When a gate is
/// attached, each fetch suspends until the gate is notified, which is how
/// tests hold a fetch in flight.
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Snapshot, FetchError>>>,
    fallback: Snapshot,
    calls: Arc<AtomicUsize>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedSource {
    pub fn always(fallback: Snapshot) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback,
            calls: Arc::new(AtomicUsize::new(0)),
            gate: None,
        }
    }

    pub fn scripted(
        responses: Vec<Result<Snapshot, FetchError>>,
        fallback: Snapshot,
    ) -> Self {
        Self {
            script: Mutex::new(responses.into()),
            fallback,
            calls: Arc::new(AtomicUsize::new(0)),
            gate: None,
        }
    }

    /// Gate every fetch behind an explicit release.
    pub fn gated(fallback: Snapshot) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let source = Self {
            script: Mutex::new(VecDeque::new()),
            fallback,
            calls: Arc::new(AtomicUsize::new(0)),
            gate: Some(Arc::clone(&gate)),
        };
        (source, gate)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Handle onto the call counter, usable after the source has been
    /// moved into a service.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl SnapshotSource for ScriptedSource {
    fn fetch_snapshot(&self) -> impl Future<Output = Result<Snapshot, FetchError>> + Send {
        async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(self.fallback.clone()))
        }
    }
}

use std::future::Future;
