//! Planner error taxonomy.

use thiserror::Error;

/// Transport-level failure from a job or plan store.
///
/// Retryable from the caller's perspective; the planner surfaces these
/// unchanged and performs no retries of its own.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store is unreachable or rejected the request.
    #[error("upstream unavailable: {0}")]
    Unavailable(String),
}

/// A failure of a planner operation.
///
/// A worker/date with no jobs is *not* an error — it produces an empty
/// route with zero metrics. Partial success is never masked: if
/// optimization succeeds but persistence fails, the whole operation fails.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// A referenced job ID does not exist in the job store.
    #[error("job {0} not found")]
    JobNotFound(String),
    /// The job store failed.
    #[error("job store failed")]
    JobStore(#[source] StoreError),
    /// The plan store failed.
    #[error("plan store failed")]
    PlanStore(#[source] StoreError),
}
