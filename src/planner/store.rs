//! Store traits for the planner's external collaborators.
//!
//! The job/booking store and the plan store are owned by the surrounding
//! application; the planner only consumes these interfaces.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::models::RoutePlan;

/// A job as the booking store reports it, before any coordinate fallback.
///
/// Address and coordinates may be absent or unusable; the planner
/// substitutes documented defaults when building stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Stable unique job identifier.
    pub job_id: String,
    /// Display address, if geocoded.
    pub address: Option<String>,
    /// Latitude, if geocoded.
    pub lat: Option<f64>,
    /// Longitude, if geocoded.
    pub lng: Option<f64>,
    /// Scheduled service time, if set.
    pub scheduled_time: Option<Timestamp>,
}

/// Read-only view of the external job/booking store.
pub trait JobStore {
    /// Lists a worker's dispatchable jobs for a date, in scheduled order.
    fn list_jobs_for_worker_on_date(
        &self,
        worker_id: &str,
        date: Date,
    ) -> Result<Vec<JobRecord>, StoreError>;

    /// Looks up a single job. `Ok(None)` means the ID is unknown.
    fn get_job(&self, job_id: &str) -> Result<Option<JobRecord>, StoreError>;
}

/// Persistence for computed route plans, keyed by `(worker_id, date)`.
///
/// Inserts are append-only; when multiple rows exist for a key, the most
/// recent `created_at` wins on read.
pub trait PlanStore {
    /// Appends a plan snapshot.
    fn insert_plan(&self, plan: RoutePlan) -> Result<(), StoreError>;

    /// Returns the most recently created plan for a worker/date, if any.
    fn latest_plan(&self, worker_id: &str, date: Date) -> Result<Option<RoutePlan>, StoreError>;

    /// Returns all plan rows for a worker dated `from_date` or later,
    /// superseded rows included, ordered by date then creation time.
    fn plans_since(&self, worker_id: &str, from_date: Date) -> Result<Vec<RoutePlan>, StoreError>;
}
