//! In-memory store backends.
//!
//! Reference implementations of [`JobStore`] and [`PlanStore`] backed by
//! mutex-protected vectors. Used by the crate's own tests and suitable
//! for demos and single-process deployments; production callers plug in
//! their own database-backed implementations.

use std::sync::Arc;

use jiff::civil::Date;
use parking_lot::Mutex;

use super::{JobRecord, JobStore, PlanStore, StoreError};
use crate::models::RoutePlan;

/// An in-memory job/booking store.
///
/// Cloning shares the underlying state, so a test can keep a handle to
/// seed jobs while the planner owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryJobStore {
    inner: Arc<Mutex<JobStoreInner>>,
}

#[derive(Debug, Default)]
struct JobStoreInner {
    rows: Vec<ScheduledJob>,
    unavailable: bool,
}

#[derive(Debug, Clone)]
struct ScheduledJob {
    worker_id: String,
    date: Date,
    record: JobRecord,
}

impl MemoryJobStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a job for a worker on a date.
    pub fn insert(&self, worker_id: impl Into<String>, date: Date, record: JobRecord) {
        self.inner.lock().rows.push(ScheduledJob {
            worker_id: worker_id.into(),
            date,
            record,
        });
    }

    /// Makes every subsequent operation fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().unavailable = unavailable;
    }
}

impl JobStore for MemoryJobStore {
    fn list_jobs_for_worker_on_date(
        &self,
        worker_id: &str,
        date: Date,
    ) -> Result<Vec<JobRecord>, StoreError> {
        let inner = self.inner.lock();
        if inner.unavailable {
            return Err(StoreError::Unavailable("job store offline".to_string()));
        }
        let mut records: Vec<JobRecord> = inner
            .rows
            .iter()
            .filter(|row| row.worker_id == worker_id && row.date == date)
            .map(|row| row.record.clone())
            .collect();
        // Scheduled order; unscheduled jobs sort last. Stable, so same-time
        // jobs keep insertion order.
        records.sort_by_key(|r| (r.scheduled_time.is_none(), r.scheduled_time));
        Ok(records)
    }

    fn get_job(&self, job_id: &str) -> Result<Option<JobRecord>, StoreError> {
        let inner = self.inner.lock();
        if inner.unavailable {
            return Err(StoreError::Unavailable("job store offline".to_string()));
        }
        Ok(inner
            .rows
            .iter()
            .find(|row| row.record.job_id == job_id)
            .map(|row| row.record.clone()))
    }
}

/// An in-memory plan store with append-only history.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlanStore {
    inner: Arc<Mutex<PlanStoreInner>>,
}

#[derive(Debug, Default)]
struct PlanStoreInner {
    rows: Vec<RoutePlan>,
    unavailable: bool,
}

impl MemoryPlanStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().unavailable = unavailable;
    }

    /// Number of persisted rows, superseded history included.
    pub fn row_count(&self) -> usize {
        self.inner.lock().rows.len()
    }
}

impl PlanStore for MemoryPlanStore {
    fn insert_plan(&self, plan: RoutePlan) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        if inner.unavailable {
            return Err(StoreError::Unavailable("plan store offline".to_string()));
        }
        inner.rows.push(plan);
        Ok(())
    }

    fn latest_plan(&self, worker_id: &str, date: Date) -> Result<Option<RoutePlan>, StoreError> {
        let inner = self.inner.lock();
        if inner.unavailable {
            return Err(StoreError::Unavailable("plan store offline".to_string()));
        }
        let mut latest: Option<&RoutePlan> = None;
        for plan in inner
            .rows
            .iter()
            .filter(|p| p.worker_id == worker_id && p.date == date)
        {
            // >= so equal timestamps resolve to the later insertion.
            if latest.is_none_or(|best| plan.created_at >= best.created_at) {
                latest = Some(plan);
            }
        }
        Ok(latest.cloned())
    }

    fn plans_since(&self, worker_id: &str, from_date: Date) -> Result<Vec<RoutePlan>, StoreError> {
        let inner = self.inner.lock();
        if inner.unavailable {
            return Err(StoreError::Unavailable("plan store offline".to_string()));
        }
        let mut plans: Vec<RoutePlan> = inner
            .rows
            .iter()
            .filter(|p| p.worker_id == worker_id && p.date >= from_date)
            .cloned()
            .collect();
        plans.sort_by_key(|p| (p.date, p.created_at));
        Ok(plans)
    }
}
