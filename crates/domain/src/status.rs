//! Slot status — the occupancy state of a single storage location.

use serde::{Deserialize, Serialize};

/// Occupancy state of a storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Free,
    Reserved,
    Occupied,
}

impl SlotStatus {
    /// Single-character marker used by text renderings of the grid.
    #[must_use]
    pub fn marker(self) -> char {
        match self {
            Self::Free => '.',
            Self::Reserved => 'r',
            Self::Occupied => 'X',
        }
    }

    /// Stable lowercase name, matching the wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Reserved => "reserved",
            Self::Occupied => "occupied",
        }
    }
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
