//! Optimized route, persisted plan, and weekly summary types.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::JobStop;

/// The directed travel segment between two consecutive stops.
///
/// Legs are derived from a final stop order, never stored independently:
/// a route of `n` stops has `n - 1` legs, and zero legs for 0 or 1 stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Job ID of the departure stop.
    pub from: String,
    /// Job ID of the arrival stop.
    pub to: String,
    /// Great-circle distance in miles, rounded to one decimal.
    pub distance_miles: f64,
    /// Drive time in minutes at the assumed average speed.
    pub drive_time_minutes: u32,
}

/// A fully optimized daily route for one worker.
///
/// `optimized_order` repeats the job IDs of `jobs` in sequence; it is
/// stored separately so schedule views can read the ordering without
/// deserializing the full stop list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedRoute {
    /// Worker this route belongs to.
    pub worker_id: String,
    /// Service date.
    pub date: Date,
    /// Stops in optimized visiting order.
    pub jobs: Vec<JobStop>,
    /// Job IDs in visiting order.
    pub optimized_order: Vec<String>,
    /// Total route distance in miles, rounded to one decimal.
    pub total_distance_miles: f64,
    /// Total drive time in minutes, derived from the aggregate distance.
    pub total_drive_time_minutes: u32,
    /// Fuel cost estimate in dollars, rounded to the cent.
    pub fuel_estimate: f64,
    /// Per-leg breakdown between consecutive stops.
    pub legs: Vec<RouteLeg>,
}

impl OptimizedRoute {
    /// Creates an empty route with zero metrics.
    ///
    /// A worker/date with no jobs is a valid terminal state, not an error.
    pub fn empty(worker_id: impl Into<String>, date: Date) -> Self {
        Self {
            worker_id: worker_id.into(),
            date,
            jobs: Vec::new(),
            optimized_order: Vec::new(),
            total_distance_miles: 0.0,
            total_drive_time_minutes: 0,
            fuel_estimate: 0.0,
            legs: Vec::new(),
        }
    }
}

/// A persisted snapshot of an optimized route, keyed by `(worker_id, date)`.
///
/// Rows are append-only: each optimization run inserts a new snapshot and
/// the most recent `created_at` wins on read. Superseded rows remain as
/// history and are never aggregated alongside their replacements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Worker this plan belongs to.
    pub worker_id: String,
    /// Service date.
    pub date: Date,
    /// Stops in optimized visiting order.
    pub jobs: Vec<JobStop>,
    /// Job IDs in visiting order.
    pub optimized_order: Vec<String>,
    /// Total route distance in miles.
    pub total_distance_miles: f64,
    /// Total drive time in minutes.
    pub total_drive_time_minutes: u32,
    /// Fuel cost estimate in dollars.
    pub fuel_estimate: f64,
    /// Insertion time, used for most-recent-wins reads.
    pub created_at: Timestamp,
}

impl RoutePlan {
    /// Snapshots an optimized route for persistence.
    pub fn from_route(route: &OptimizedRoute, created_at: Timestamp) -> Self {
        Self {
            worker_id: route.worker_id.clone(),
            date: route.date,
            jobs: route.jobs.clone(),
            optimized_order: route.optimized_order.clone(),
            total_distance_miles: route.total_distance_miles,
            total_drive_time_minutes: route.total_drive_time_minutes,
            fuel_estimate: route.fuel_estimate,
            created_at,
        }
    }
}

/// Aggregated route statistics for one worker's current week.
///
/// The week runs from the most recent Sunday through the query date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// The Sunday the aggregation window starts on.
    pub week_start: Date,
    /// Number of distinct dates with at least one persisted plan.
    pub days_with_routes: usize,
    /// Total stops across the latest plan of each day.
    pub total_jobs: usize,
    /// Total miles across the latest plan of each day.
    pub total_distance_miles: f64,
    /// Total drive time in minutes.
    pub total_drive_time_minutes: u32,
    /// Total fuel estimate in dollars.
    pub total_fuel: f64,
    /// Average miles per routed day; zero when no days are routed.
    pub avg_distance_per_day: f64,
    /// Human-readable one-line recap for dashboards.
    pub summary: String,
}
