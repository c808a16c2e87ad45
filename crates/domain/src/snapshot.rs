//! Snapshot — one complete occupancy result from a fetch.
//!
//! A snapshot is immutable once constructed. A new fetch produces a brand
//! new snapshot that replaces the previous one wholesale; nothing is ever
//! merged or mutated in place.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::LocationId;
use crate::status::SlotStatus;

/// One complete occupancy result: the physical grid plus aggregate counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Physical rows, in display order as received from the data source.
    pub rows: Vec<Row>,
    /// Aggregate counts, trusted as provided and merely displayed.
    pub summary: Summary,
}

/// A named physical row of storage (e.g. "Row A").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub name: String,
    /// Stacking tiers, in display order as received.
    pub levels: Vec<Level>,
}

/// One stacking tier within a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    /// Storage slots, in display order as received.
    pub locations: Vec<Location>,
}

/// One physical storage slot.
///
/// `details` carries whatever descriptive fields the data source attaches
/// (order reference, customer, dwell time, …); they are passed through
/// unmodified and only ever displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub status: SlotStatus,
    #[serde(flatten, default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Aggregate occupancy counts for a whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: u32,
    pub free: u32,
    pub reserved: u32,
    pub occupied: u32,
}

impl Summary {
    /// Compact `total/free/reserved/occupied` form used by text renderings.
    #[must_use]
    pub fn counts_line(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.total, self.free, self.reserved, self.occupied
        )
    }
}

impl Snapshot {
    /// Resolve a location id to its record.
    ///
    /// Linear search: rows in order, levels within each row in order,
    /// locations within each level in order; first match wins.
    #[must_use]
    pub fn find_location(&self, id: LocationId) -> Option<&Location> {
        self.rows
            .iter()
            .flat_map(|row| &row.levels)
            .flat_map(|level| &level.locations)
            .find(|location| location.id == id)
    }

    /// Check the snapshot-wide invariant that no two locations share an id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateLocationId`] naming the first
    /// repeated id.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for row in &self.rows {
            for level in &row.levels {
                for location in &level.locations {
                    if !seen.insert(location.id) {
                        return Err(ValidationError::DuplicateLocationId(location.id));
                    }
                }
            }
        }
        Ok(())
    }

    /// Total number of location records across all rows and levels.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.levels)
            .map(|level| level.locations.len())
            .sum()
    }
}
