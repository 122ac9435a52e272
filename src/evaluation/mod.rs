//! Route metric computation.
//!
//! Derives the per-leg breakdown, distance and drive-time totals, and the
//! fuel estimate from a final visiting order.

mod metrics;

pub use metrics::{route_metrics, RouteMetrics, AVG_SPEED_MPH, FUEL_COST_PER_MILE};

pub(crate) use metrics::{round_cent, round_tenth};
