//! # slotboard-domain
//!
//! Pure domain model for the slotboard occupancy dashboard.
//!
//! ## Responsibilities
//! - Foundational types: the slot identifier, error conventions, timestamps
//! - Define the **Snapshot** (one complete occupancy result: rows, levels,
//!   locations, summary counts)
//! - Define **`SlotStatus`** (free / reserved / occupied)
//! - Contain the invariant enforcement (`Snapshot::validate`) and the
//!   location lookup logic (`Snapshot::find_location`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod snapshot;
pub mod status;
pub mod time;
