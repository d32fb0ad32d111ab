//! Air-quality analytics over an immutable unit snapshot.
//!
//! This module classifies PM10 readings into status tiers, computes
//! fleet-wide aggregates, breaks them down by ward or contractor, ranks
//! routes for intervention, and derives contractor performance alerts.
//! Every function is a pure computation over read-only input.

pub mod aggregate;
pub mod alerts;
pub mod breakdown;
pub mod plan;
pub mod priority;
pub mod report;
pub mod status;
pub mod types;
pub mod utility;
