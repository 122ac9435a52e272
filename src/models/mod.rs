//! Domain model types for daily route optimization.
//!
//! Provides the core abstractions: coordinates, job stops, route legs,
//! optimized routes, persisted plans, and the weekly summary.

mod coordinate;
mod plan;
mod stop;

pub use coordinate::{Coordinate, DEFAULT_COORDINATE};
pub use plan::{OptimizedRoute, RouteLeg, RoutePlan, WeeklySummary};
pub use stop::{JobStop, DEFAULT_JOB_DURATION_MINUTES};
