//! Route metrics: per-leg breakdown, totals, and fuel estimate.

use serde::{Deserialize, Serialize};

use crate::distance::haversine;
use crate::models::{JobStop, RouteLeg};

/// Assumed average driving speed, in mph (urban average).
pub const AVG_SPEED_MPH: f64 = 30.0;

/// Fuel-only cost estimate per mile, in dollars.
pub const FUEL_COST_PER_MILE: f64 = 0.22;

/// Derived metrics for a fixed visiting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    /// Total route distance in miles, rounded to one decimal.
    pub total_distance_miles: f64,
    /// Total drive time in minutes, derived from the aggregate distance.
    pub total_drive_time_minutes: u32,
    /// Fuel cost estimate in dollars, rounded to the cent.
    pub fuel_estimate: f64,
    /// Per-leg breakdown between consecutive stops.
    pub legs: Vec<RouteLeg>,
}

impl RouteMetrics {
    /// All-zero metrics with no legs.
    pub fn zero() -> Self {
        Self {
            total_distance_miles: 0.0,
            total_drive_time_minutes: 0,
            fuel_estimate: 0.0,
            legs: Vec::new(),
        }
    }
}

/// Computes metrics for a visiting order without mutating it.
///
/// Legs carry display-rounded distances, but totals accumulate the
/// unrounded leg distances. The total drive time is derived from the
/// aggregate distance rather than summed leg-by-leg, so it can differ
/// from the sum of the rounded per-leg times by a minute or two; the
/// aggregate derivation is applied uniformly everywhere a total is
/// produced.
///
/// Empty and single-stop routes yield all-zero metrics with no legs.
///
/// # Examples
///
/// ```
/// use dayroute::evaluation::route_metrics;
/// use dayroute::models::{Coordinate, JobStop};
///
/// let route = vec![
///     JobStop::new("a", "Stop A", Coordinate::new(28.50, -81.40)),
///     JobStop::new("b", "Stop B", Coordinate::new(28.52, -81.35)),
/// ];
/// let m = route_metrics(&route);
/// assert_eq!(m.legs.len(), 1);
/// assert!(m.total_distance_miles > 0.0);
///
/// assert_eq!(route_metrics(&[]).legs.len(), 0);
/// ```
pub fn route_metrics(route: &[JobStop]) -> RouteMetrics {
    let mut total_distance = 0.0;
    let mut legs = Vec::new();

    for pair in route.windows(2) {
        let dist = haversine(pair[0].coordinate, pair[1].coordinate);
        total_distance += dist;
        legs.push(RouteLeg {
            from: pair[0].job_id.clone(),
            to: pair[1].job_id.clone(),
            distance_miles: round_tenth(dist),
            drive_time_minutes: drive_time_minutes(dist),
        });
    }

    RouteMetrics {
        total_distance_miles: round_tenth(total_distance),
        total_drive_time_minutes: drive_time_minutes(total_distance),
        fuel_estimate: round_cent(total_distance * FUEL_COST_PER_MILE),
        legs,
    }
}

/// Minutes of driving for the given distance at [`AVG_SPEED_MPH`].
fn drive_time_minutes(distance_miles: f64) -> u32 {
    (distance_miles / AVG_SPEED_MPH * 60.0).round() as u32
}

/// Rounds to one decimal place for display.
pub(crate) fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Rounds to the nearest cent.
pub(crate) fn round_cent(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
