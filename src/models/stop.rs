//! Job stop type.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Default service duration assumed for every job, in minutes.
///
/// The upstream job store carries no duration data, so every stop gets a
/// fixed one-hour estimate. The optimizer sequences by travel distance
/// only and never reads this field.
pub const DEFAULT_JOB_DURATION_MINUTES: u32 = 60;

/// One stop on a worker's daily route.
///
/// `job_id` is unique within a day's route; a route is always a
/// permutation of its input stops, never a subset or superset.
/// `scheduled_time` is informational only and does not constrain
/// sequencing.
///
/// # Examples
///
/// ```
/// use dayroute::models::{Coordinate, JobStop};
///
/// let stop = JobStop::new("job-1", "100 Main St", Coordinate::new(28.5, -81.4));
/// assert_eq!(stop.job_id, "job-1");
/// assert_eq!(stop.estimated_duration_minutes, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStop {
    /// Stable unique identifier of the underlying job.
    pub job_id: String,
    /// Display address.
    pub address: String,
    /// Location to visit.
    pub coordinate: Coordinate,
    /// Informational scheduled time, if the job store had one.
    pub scheduled_time: Option<Timestamp>,
    /// Estimated on-site service duration in minutes.
    pub estimated_duration_minutes: u32,
}

impl JobStop {
    /// Creates a stop with the default service duration and no scheduled time.
    pub fn new(job_id: impl Into<String>, address: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            job_id: job_id.into(),
            address: address.into(),
            coordinate,
            scheduled_time: None,
            estimated_duration_minutes: DEFAULT_JOB_DURATION_MINUTES,
        }
    }

    /// Sets the informational scheduled time.
    pub fn with_scheduled_time(mut self, t: Timestamp) -> Self {
        self.scheduled_time = Some(t);
        self
    }
}
