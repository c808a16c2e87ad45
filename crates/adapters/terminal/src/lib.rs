//! # slotboard-adapter-terminal
//!
//! [`GridView`] implementation that renders the occupancy grid as text to
//! any `Write` sink (normally stdout).
//!
//! Every render reprints the whole frame — summary line, rows with their
//! levels and slots, and the "last refreshed" stamp — rather than updating
//! in place. Full replacement keeps rendering a pure function of the
//! snapshot; the flicker tradeoff is accepted deliberately.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use slotboard_app::ports::{GridView, TimeFormatter};
use slotboard_domain::snapshot::{Location, Snapshot};
use slotboard_domain::time::{Timestamp, now};

/// Formats refresh times in the machine's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimeFormatter;

impl TimeFormatter for LocalTimeFormatter {
    fn format(&self, ts: Timestamp) -> String {
        ts.with_timezone(&chrono::Local)
            .format("%H:%M:%S")
            .to_string()
    }
}

/// Text renderer for the occupancy grid.
pub struct TextGridView<W, F> {
    sink: Mutex<W>,
    formatter: F,
    state: Mutex<Surface>,
}

/// What is currently on screen besides the grid, tracked so that clearing
/// an absent banner or closing an absent detail stays a no-op.
#[derive(Debug, Default)]
struct Surface {
    banner_visible: bool,
    detail_open: bool,
}

impl<W: Write + Send, F: TimeFormatter> TextGridView<W, F> {
    /// Create a view writing frames to `sink`.
    pub fn new(sink: W, formatter: F) -> Self {
        Self {
            sink: Mutex::new(sink),
            formatter,
            state: Mutex::new(Surface::default()),
        }
    }

    fn write_frame(&self, frame: &str) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = sink.write_all(frame.as_bytes()).and_then(|()| sink.flush()) {
            tracing::warn!(%err, "failed to write to terminal");
        }
    }

    fn frame_for(&self, snapshot: &Snapshot, refreshed_at: &str) -> String {
        let mut frame = String::new();
        frame.push_str(&format!(
            "Summary: {} (total/free/reserved/occupied)\n",
            snapshot.summary.counts_line()
        ));
        for row in &snapshot.rows {
            frame.push_str(&row.name);
            frame.push('\n');
            for level in &row.levels {
                frame.push_str(&format!("  {:>4} |", level.name));
                for location in &level.locations {
                    frame.push_str(&format!(
                        " [#{} {}]",
                        location.id,
                        location.status.marker()
                    ));
                }
                frame.push('\n');
            }
        }
        frame.push_str(&format!("Last refreshed: {refreshed_at}\n"));
        frame
    }
}

impl<W: Write + Send, F: TimeFormatter> GridView for TextGridView<W, F> {
    fn render(&self, snapshot: &Snapshot) {
        let refreshed_at = self.formatter.format(now());
        let frame = self.frame_for(snapshot, &refreshed_at);
        self.write_frame(&frame);
    }

    fn set_loading(&self, active: bool) {
        if active {
            self.write_frame("Refreshing\u{2026}\n");
        }
    }

    fn show_error_banner(&self, message: &str) {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.banner_visible = true;
        }
        self.write_frame(&format!("!! {message}\n"));
    }

    fn clear_error_banner(&self) {
        let was_visible = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut state.banner_visible, false)
        };
        if was_visible {
            self.write_frame("(error dismissed)\n");
        }
    }

    fn open_detail(&self, location: &Location) {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.detail_open = true;
        }
        let mut panel = String::new();
        panel.push_str(&format!(
            "--- {} (#{}) ---\n  status: {}\n",
            location.name, location.id, location.status
        ));
        for (key, value) in &location.details {
            panel.push_str(&format!("  {key}: {value}\n"));
        }
        panel.push_str("---\n");
        self.write_frame(&panel);
    }

    fn close_detail(&self) {
        let was_open = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut state.detail_open, false)
        };
        if was_open {
            self.write_frame("(detail closed)\n");
        }
    }
}
