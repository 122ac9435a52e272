//! Great-circle distance model.
//!
//! Provides the pure haversine distance function used by construction,
//! improvement, and metrics.

mod haversine;

pub use haversine::haversine;
