//! Typed identifier newtype for storage locations.
//!
//! Location ids are assigned by the backend and are opaque to this
//! component; they only need equality, hashing, and text round-tripping.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Location`](crate::snapshot::Location).
///
/// Backed by the numeric id the data source assigns; unique across an
/// entire [`Snapshot`](crate::snapshot::Snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(i64);

impl LocationId {
    /// Wrap a raw backend id.
    #[must_use]
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw backend id.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for LocationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<i64> for LocationId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}
