//! Route planner orchestrator.
//!
//! Ties the pipeline together: fetch a worker's jobs for a date, build an
//! initial order with nearest-neighbor, improve it with 2-opt, derive
//! metrics, persist the plan, and answer schedule and summary queries.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use jiff::civil::Date;
use jiff::{Span, Timestamp, Zoned};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::{JobRecord, JobStore, PlanStore, PlannerError};
use crate::constructive::nearest_neighbor;
use crate::evaluation::{round_cent, round_tenth, route_metrics, RouteMetrics};
use crate::local_search::two_opt_improve;
use crate::models::{
    Coordinate, JobStop, OptimizedRoute, RoutePlan, WeeklySummary, DEFAULT_COORDINATE,
};

type PlanKey = (String, Date);

/// Orchestrates daily route optimization for field workers.
///
/// Holds the two external collaborators (the job/booking store and the
/// plan store) plus a per-`(worker, date)` lock table that serializes
/// write operations on the same key. Routes for different workers or
/// dates optimize concurrently; two recomputations of the same route
/// never race on the read-modify-write of its plan.
///
/// The planner itself keeps no route state between calls.
///
/// # Examples
///
/// ```
/// use dayroute::planner::{JobRecord, MemoryJobStore, MemoryPlanStore, RoutePlanner};
///
/// let jobs = MemoryJobStore::new();
/// let date = "2026-03-02".parse().unwrap();
/// jobs.insert("worker-1", date, JobRecord {
///     job_id: "job-1".to_string(),
///     address: Some("100 Main St".to_string()),
///     lat: Some(28.54),
///     lng: Some(-81.38),
///     scheduled_time: None,
/// });
///
/// let planner = RoutePlanner::new(jobs, MemoryPlanStore::new());
/// let route = planner.optimize_route("worker-1", date).unwrap();
/// assert_eq!(route.optimized_order, vec!["job-1".to_string()]);
/// ```
pub struct RoutePlanner<J, P> {
    jobs: J,
    plans: P,
    locks: Mutex<HashMap<PlanKey, Arc<Mutex<()>>>>,
}

impl<J: JobStore, P: PlanStore> RoutePlanner<J, P> {
    /// Creates a planner over the given stores.
    pub fn new(jobs: J, plans: P) -> Self {
        Self {
            jobs,
            plans,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Computes, persists, and returns the optimized route for a
    /// worker/date.
    ///
    /// Jobs missing usable coordinates get [`DEFAULT_COORDINATE`]. When
    /// the live job query returns nothing but a stored plan has jobs,
    /// those stored stops are re-optimized instead. Zero jobs overall is
    /// not an error: the result is an empty route with zero metrics, and
    /// nothing is persisted.
    ///
    /// A persistence failure fails the whole call even though the
    /// optimization itself succeeded.
    pub fn optimize_route(
        &self,
        worker_id: &str,
        date: Date,
    ) -> Result<OptimizedRoute, PlannerError> {
        let lock = self.key_lock(worker_id, date);
        let _guard = lock.lock();
        self.optimize_route_locked(worker_id, date)
    }

    /// Returns the most recently persisted route for a worker/date,
    /// computing one if none exists.
    ///
    /// Metrics are recomputed from the stored job order rather than read
    /// back from the row, so stale aggregate values in old snapshots
    /// cannot leak into the response.
    pub fn get_route_for_day(
        &self,
        worker_id: &str,
        date: Date,
    ) -> Result<OptimizedRoute, PlannerError> {
        let stored = self
            .plans
            .latest_plan(worker_id, date)
            .map_err(PlannerError::PlanStore)?;

        match stored {
            Some(plan) => {
                let metrics = route_metrics(&plan.jobs);
                debug!(worker_id, %date, stops = plan.jobs.len(), "serving stored plan");
                Ok(assemble_route(
                    worker_id,
                    date,
                    plan.jobs,
                    plan.optimized_order,
                    metrics,
                ))
            }
            None => self.optimize_route(worker_id, date),
        }
    }

    /// Adds one job to a worker's day and re-optimizes the whole route.
    ///
    /// This is a full re-optimization over the combined stop set, not an
    /// incremental splice, so stops already shown to the worker may
    /// reorder. An unknown `job_id` fails with
    /// [`PlannerError::JobNotFound`] before anything is persisted; a job
    /// already on the route is not duplicated (the route is re-optimized
    /// as-is, keeping job IDs unique within the day).
    pub fn add_job_to_route(
        &self,
        worker_id: &str,
        date: Date,
        job_id: &str,
    ) -> Result<OptimizedRoute, PlannerError> {
        let record = self
            .jobs
            .get_job(job_id)
            .map_err(PlannerError::JobStore)?
            .ok_or_else(|| PlannerError::JobNotFound(job_id.to_string()))?;

        let lock = self.key_lock(worker_id, date);
        let _guard = lock.lock();

        let mut stops = self
            .plans
            .latest_plan(worker_id, date)
            .map_err(PlannerError::PlanStore)?
            .map(|plan| plan.jobs)
            .unwrap_or_default();

        if stops.iter().any(|s| s.job_id == record.job_id) {
            debug!(worker_id, %date, job_id, "job already routed; re-optimizing in place");
        } else {
            stops.push(stop_from_record(&record));
        }

        self.run_pipeline(worker_id, date, stops)
    }

    /// Aggregates the current week's persisted plans for a worker.
    ///
    /// The week runs from the most recent Sunday through today.
    pub fn get_weekly_route_summary(&self, worker_id: &str) -> Result<WeeklySummary, PlannerError> {
        self.weekly_summary_from(worker_id, Zoned::now().date())
    }

    /// Aggregates the week containing `today`, from its Sunday onward.
    ///
    /// Only the latest plan per date counts; superseded snapshots are
    /// history, not additional mileage.
    pub fn weekly_summary_from(
        &self,
        worker_id: &str,
        today: Date,
    ) -> Result<WeeklySummary, PlannerError> {
        let offset = today.weekday().to_sunday_zero_offset();
        let week_start = today.saturating_sub(Span::new().days(i64::from(offset)));

        let rows = self
            .plans
            .plans_since(worker_id, week_start)
            .map_err(PlannerError::PlanStore)?;

        let mut latest_per_day: BTreeMap<Date, &RoutePlan> = BTreeMap::new();
        for plan in &rows {
            let slot = latest_per_day.entry(plan.date).or_insert(plan);
            if plan.created_at >= slot.created_at {
                *slot = plan;
            }
        }

        let days_with_routes = latest_per_day.len();
        let mut total_jobs = 0;
        let mut total_distance = 0.0;
        let mut total_drive_time: u32 = 0;
        let mut total_fuel = 0.0;
        for plan in latest_per_day.values() {
            total_jobs += plan.jobs.len();
            total_distance += plan.total_distance_miles;
            total_drive_time += plan.total_drive_time_minutes;
            total_fuel += plan.fuel_estimate;
        }

        let summary = if days_with_routes > 0 {
            format!(
                "This week: {total_jobs} jobs across {days_with_routes} days. \
                 {total_distance:.1} miles, ~{}h driving, ~${total_fuel:.2} fuel.",
                (f64::from(total_drive_time) / 60.0).round() as u32
            )
        } else {
            "No routes planned this week yet.".to_string()
        };

        Ok(WeeklySummary {
            week_start,
            days_with_routes,
            total_jobs,
            total_distance_miles: round_tenth(total_distance),
            total_drive_time_minutes: total_drive_time,
            total_fuel: round_cent(total_fuel),
            avg_distance_per_day: if days_with_routes > 0 {
                round_tenth(total_distance / days_with_routes as f64)
            } else {
                0.0
            },
            summary,
        })
    }

    fn optimize_route_locked(
        &self,
        worker_id: &str,
        date: Date,
    ) -> Result<OptimizedRoute, PlannerError> {
        let records = self
            .jobs
            .list_jobs_for_worker_on_date(worker_id, date)
            .map_err(PlannerError::JobStore)?;

        let mut stops: Vec<JobStop> = records.iter().map(stop_from_record).collect();

        if stops.is_empty() {
            // Jobs added directly to the plan may not be visible to the
            // live job query yet; fall back to the stored stop set.
            let stored = self
                .plans
                .latest_plan(worker_id, date)
                .map_err(PlannerError::PlanStore)?;
            if let Some(plan) = stored {
                if !plan.jobs.is_empty() {
                    warn!(worker_id, %date, stops = plan.jobs.len(),
                        "no live jobs; re-optimizing stored plan");
                    stops = plan.jobs;
                }
            }
        }

        if stops.is_empty() {
            debug!(worker_id, %date, "no jobs for day; returning empty route");
            return Ok(OptimizedRoute::empty(worker_id, date));
        }

        self.run_pipeline(worker_id, date, stops)
    }

    /// Construct → improve → metrics → persist.
    fn run_pipeline(
        &self,
        worker_id: &str,
        date: Date,
        stops: Vec<JobStop>,
    ) -> Result<OptimizedRoute, PlannerError> {
        let ordered = two_opt_improve(nearest_neighbor(&stops));
        let metrics = route_metrics(&ordered);
        let order: Vec<String> = ordered.iter().map(|s| s.job_id.clone()).collect();

        let route = assemble_route(worker_id, date, ordered, order, metrics);

        self.plans
            .insert_plan(RoutePlan::from_route(&route, Timestamp::now()))
            .map_err(PlannerError::PlanStore)?;

        info!(
            worker_id,
            %date,
            stops = route.jobs.len(),
            total_miles = route.total_distance_miles,
            drive_minutes = route.total_drive_time_minutes,
            "route optimized"
        );
        Ok(route)
    }

    fn key_lock(&self, worker_id: &str, date: Date) -> Arc<Mutex<()>> {
        let mut table = self.locks.lock();
        table
            .entry((worker_id.to_string(), date))
            .or_default()
            .clone()
    }
}

/// Builds a stop from a raw job record, substituting documented defaults
/// for missing address or coordinates.
///
/// Non-finite coordinates are treated the same as missing ones, so the
/// NaN-propagating distance model never sees degenerate input from this
/// path.
fn stop_from_record(record: &JobRecord) -> JobStop {
    let coordinate = match (record.lat, record.lng) {
        (Some(lat), Some(lng)) if Coordinate::new(lat, lng).is_finite() => {
            Coordinate::new(lat, lng)
        }
        _ => {
            warn!(job_id = %record.job_id, "job missing usable coordinates; using fallback");
            DEFAULT_COORDINATE
        }
    };

    let mut stop = JobStop::new(
        record.job_id.clone(),
        record.address.clone().unwrap_or_else(|| "Unknown".to_string()),
        coordinate,
    );
    stop.scheduled_time = record.scheduled_time;
    stop
}

fn assemble_route(
    worker_id: &str,
    date: Date,
    jobs: Vec<JobStop>,
    optimized_order: Vec<String>,
    metrics: RouteMetrics,
) -> OptimizedRoute {
    OptimizedRoute {
        worker_id: worker_id.to_string(),
        date,
        jobs,
        optimized_order,
        total_distance_miles: metrics.total_distance_miles,
        total_drive_time_minutes: metrics.total_drive_time_minutes,
        fuel_estimate: metrics.fuel_estimate,
        legs: metrics.legs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{MemoryJobStore, MemoryPlanStore};

    fn date(s: &str) -> Date {
        s.parse().expect("valid date")
    }

    fn record(id: &str, lat: f64, lng: f64) -> JobRecord {
        JobRecord {
            job_id: id.to_string(),
            address: Some(format!("{id} address")),
            lat: Some(lat),
            lng: Some(lng),
            scheduled_time: None,
        }
    }

    fn planner_with_stores() -> (RoutePlanner<MemoryJobStore, MemoryPlanStore>, MemoryJobStore, MemoryPlanStore) {
        let jobs = MemoryJobStore::new();
        let plans = MemoryPlanStore::new();
        let planner = RoutePlanner::new(jobs.clone(), plans.clone());
        (planner, jobs, plans)
    }

    #[test]
    fn test_optimize_empty_day_is_not_an_error() {
        let (planner, _, plans) = planner_with_stores();
        let route = planner.optimize_route("w1", date("2026-03-02")).expect("ok");
        assert!(route.jobs.is_empty());
        assert_eq!(route.total_distance_miles, 0.0);
        assert_eq!(plans.row_count(), 0, "empty routes are not persisted");
    }

    #[test]
    fn test_optimize_persists_and_orders() {
        let (planner, jobs, plans) = planner_with_stores();
        let d = date("2026-03-02");
        jobs.insert("w1", d, record("a", 28.50, -81.40));
        jobs.insert("w1", d, record("c", 28.40, -81.50));
        jobs.insert("w1", d, record("b", 28.52, -81.35));

        let route = planner.optimize_route("w1", d).expect("ok");
        assert_eq!(route.jobs.len(), 3);
        assert_eq!(route.legs.len(), 2);
        assert_eq!(
            route.optimized_order,
            route.jobs.iter().map(|s| s.job_id.clone()).collect::<Vec<_>>()
        );
        assert!(route.total_distance_miles > 0.0);
        assert_eq!(plans.row_count(), 1);

        let stored = plans.latest_plan("w1", d).expect("store up").expect("persisted");
        assert_eq!(stored.optimized_order, route.optimized_order);
    }

    #[test]
    fn test_fallback_coordinate_for_ungeocoded_job() {
        let (planner, jobs, _) = planner_with_stores();
        let d = date("2026-03-02");
        jobs.insert(
            "w1",
            d,
            JobRecord {
                job_id: "a".to_string(),
                address: None,
                lat: None,
                lng: None,
                scheduled_time: None,
            },
        );
        jobs.insert("w1", d, record("b", 28.50, -81.40));

        let route = planner.optimize_route("w1", d).expect("ok");
        let stop_a = route.jobs.iter().find(|s| s.job_id == "a").expect("present");
        assert_eq!(stop_a.coordinate, DEFAULT_COORDINATE);
        assert_eq!(stop_a.address, "Unknown");
    }

    #[test]
    fn test_nan_coordinate_uses_fallback() {
        let (planner, jobs, _) = planner_with_stores();
        let d = date("2026-03-02");
        let mut r = record("a", f64::NAN, -81.40);
        r.lat = Some(f64::NAN);
        jobs.insert("w1", d, r);

        let route = planner.optimize_route("w1", d).expect("ok");
        assert_eq!(route.jobs[0].coordinate, DEFAULT_COORDINATE);
        assert!(route.total_distance_miles == 0.0);
    }

    #[test]
    fn test_optimize_falls_back_to_stored_plan() {
        let (planner, jobs, plans) = planner_with_stores();
        let d = date("2026-03-02");
        jobs.insert("w1", d, record("a", 28.50, -81.40));
        planner.optimize_route("w1", d).expect("ok");

        // Live jobs vanish (completed or reassigned); stored stops remain.
        let fresh_jobs = MemoryJobStore::new();
        let planner2 = RoutePlanner::new(fresh_jobs, plans.clone());
        let route = planner2.optimize_route("w1", d).expect("ok");
        assert_eq!(route.jobs.len(), 1);
        assert_eq!(route.jobs[0].job_id, "a");
    }

    #[test]
    fn test_get_route_for_day_serves_stored_plan() {
        let (planner, jobs, plans) = planner_with_stores();
        let d = date("2026-03-02");
        jobs.insert("w1", d, record("a", 28.50, -81.40));
        jobs.insert("w1", d, record("b", 28.52, -81.35));
        planner.optimize_route("w1", d).expect("ok");
        assert_eq!(plans.row_count(), 1);

        let route = planner.get_route_for_day("w1", d).expect("ok");
        assert_eq!(route.jobs.len(), 2);
        // Reading does not re-persist.
        assert_eq!(plans.row_count(), 1);
    }

    #[test]
    fn test_get_route_for_day_recomputes_metrics() {
        let (planner, jobs, plans) = planner_with_stores();
        let d = date("2026-03-02");
        jobs.insert("w1", d, record("a", 28.50, -81.40));
        jobs.insert("w1", d, record("b", 28.52, -81.35));
        let computed = planner.optimize_route("w1", d).expect("ok");

        // Corrupt the stored aggregate; the read path must not trust it.
        let mut stale = plans.latest_plan("w1", d).expect("store up").expect("plan");
        stale.total_distance_miles = 9999.0;
        stale.created_at = "2026-03-02T23:00:00Z".parse().expect("valid");
        plans.insert_plan(stale).expect("store up");

        let served = planner.get_route_for_day("w1", d).expect("ok");
        assert_eq!(served.total_distance_miles, computed.total_distance_miles);
    }

    #[test]
    fn test_get_route_for_day_computes_when_missing() {
        let (planner, jobs, plans) = planner_with_stores();
        let d = date("2026-03-02");
        jobs.insert("w1", d, record("a", 28.50, -81.40));

        let route = planner.get_route_for_day("w1", d).expect("ok");
        assert_eq!(route.jobs.len(), 1);
        assert_eq!(plans.row_count(), 1, "computed route is persisted");
    }

    #[test]
    fn test_add_job_unknown_id_persists_nothing() {
        let (planner, jobs, plans) = planner_with_stores();
        let d = date("2026-03-02");
        jobs.insert("w1", d, record("a", 28.50, -81.40));
        planner.optimize_route("w1", d).expect("ok");
        let rows_before = plans.row_count();

        let err = planner.add_job_to_route("w1", d, "ghost").expect_err("unknown job");
        assert!(matches!(err, PlannerError::JobNotFound(id) if id == "ghost"));
        assert_eq!(plans.row_count(), rows_before);
    }

    #[test]
    fn test_add_job_reoptimizes_combined_set() {
        let (planner, jobs, plans) = planner_with_stores();
        let d = date("2026-03-02");
        jobs.insert("w1", d, record("a", 28.50, -81.40));
        jobs.insert("w1", d, record("b", 28.52, -81.35));
        planner.optimize_route("w1", d).expect("ok");

        // "c" exists in the job store but on no plan yet.
        jobs.insert("w1", date("2026-03-09"), record("c", 28.51, -81.38));
        let route = planner.add_job_to_route("w1", d, "c").expect("ok");
        assert_eq!(route.jobs.len(), 3);
        assert!(route.optimized_order.contains(&"c".to_string()));
        // Append-only history: a second row now exists for the key.
        assert_eq!(plans.row_count(), 2);
    }

    #[test]
    fn test_add_job_starts_plan_when_none_exists() {
        let (planner, jobs, plans) = planner_with_stores();
        let d = date("2026-03-02");
        jobs.insert("w1", date("2026-03-09"), record("c", 28.51, -81.38));

        let route = planner.add_job_to_route("w1", d, "c").expect("ok");
        assert_eq!(route.jobs.len(), 1);
        assert_eq!(plans.row_count(), 1);
    }

    #[test]
    fn test_add_job_twice_does_not_duplicate() {
        let (planner, jobs, _) = planner_with_stores();
        let d = date("2026-03-02");
        jobs.insert("w1", d, record("a", 28.50, -81.40));

        planner.add_job_to_route("w1", d, "a").expect("ok");
        let route = planner.add_job_to_route("w1", d, "a").expect("ok");
        assert_eq!(route.jobs.len(), 1);
    }

    #[test]
    fn test_persistence_failure_fails_operation() {
        let (planner, jobs, plans) = planner_with_stores();
        let d = date("2026-03-02");
        jobs.insert("w1", d, record("a", 28.50, -81.40));
        plans.set_unavailable(true);

        let err = planner.optimize_route("w1", d).expect_err("store down");
        assert!(matches!(err, PlannerError::PlanStore(_)));
    }

    #[test]
    fn test_job_store_failure_propagates() {
        let (planner, jobs, _) = planner_with_stores();
        jobs.set_unavailable(true);
        let err = planner
            .optimize_route("w1", date("2026-03-02"))
            .expect_err("store down");
        assert!(matches!(err, PlannerError::JobStore(_)));
    }

    #[test]
    fn test_weekly_summary_two_days() {
        let (planner, _, plans) = planner_with_stores();
        // Week of Sunday 2026-03-01: plans on Monday and Wednesday.
        let monday = RoutePlan {
            worker_id: "w1".to_string(),
            date: date("2026-03-02"),
            jobs: vec![JobStop::new("a", "", Coordinate::new(28.5, -81.4))],
            optimized_order: vec!["a".to_string()],
            total_distance_miles: 10.0,
            total_drive_time_minutes: 20,
            fuel_estimate: 2.20,
            created_at: "2026-03-02T18:00:00Z".parse().expect("valid"),
        };
        let mut wednesday = monday.clone();
        wednesday.date = date("2026-03-04");
        wednesday.total_distance_miles = 15.0;
        wednesday.total_drive_time_minutes = 30;
        wednesday.fuel_estimate = 3.30;
        wednesday.created_at = "2026-03-04T18:00:00Z".parse().expect("valid");
        plans.insert_plan(monday).expect("store up");
        plans.insert_plan(wednesday).expect("store up");

        let summary = planner
            .weekly_summary_from("w1", date("2026-03-06"))
            .expect("ok");
        assert_eq!(summary.week_start, date("2026-03-01"));
        assert_eq!(summary.days_with_routes, 2);
        assert_eq!(summary.total_jobs, 2);
        assert_eq!(summary.total_distance_miles, 25.0);
        assert_eq!(summary.total_drive_time_minutes, 50);
        assert_eq!(summary.total_fuel, 5.50);
        assert_eq!(summary.avg_distance_per_day, 12.5);
        assert!(summary.summary.contains("2 jobs across 2 days"));
    }

    #[test]
    fn test_weekly_summary_counts_superseded_rows_once() {
        let (planner, _, plans) = planner_with_stores();
        let d = date("2026-03-02");
        let superseded = RoutePlan {
            worker_id: "w1".to_string(),
            date: d,
            jobs: vec![JobStop::new("a", "", Coordinate::new(28.5, -81.4))],
            optimized_order: vec!["a".to_string()],
            total_distance_miles: 10.0,
            total_drive_time_minutes: 20,
            fuel_estimate: 2.20,
            created_at: "2026-03-02T08:00:00Z".parse().expect("valid"),
        };
        let mut replacement = superseded.clone();
        replacement.total_distance_miles = 12.0;
        replacement.created_at = "2026-03-02T12:00:00Z".parse().expect("valid");
        plans.insert_plan(superseded).expect("store up");
        plans.insert_plan(replacement).expect("store up");

        let summary = planner
            .weekly_summary_from("w1", date("2026-03-06"))
            .expect("ok");
        assert_eq!(summary.days_with_routes, 1);
        assert_eq!(summary.total_distance_miles, 12.0);
    }

    #[test]
    fn test_weekly_summary_empty_week() {
        let (planner, _, _) = planner_with_stores();
        let summary = planner
            .weekly_summary_from("w1", date("2026-03-06"))
            .expect("ok");
        assert_eq!(summary.days_with_routes, 0);
        assert_eq!(summary.total_distance_miles, 0.0);
        assert_eq!(summary.avg_distance_per_day, 0.0);
        assert_eq!(summary.summary, "No routes planned this week yet.");
    }

    #[test]
    fn test_weekly_summary_excludes_prior_week() {
        let (planner, _, plans) = planner_with_stores();
        let last_saturday = RoutePlan {
            worker_id: "w1".to_string(),
            date: date("2026-02-28"),
            jobs: Vec::new(),
            optimized_order: Vec::new(),
            total_distance_miles: 40.0,
            total_drive_time_minutes: 80,
            fuel_estimate: 8.80,
            created_at: "2026-02-28T18:00:00Z".parse().expect("valid"),
        };
        plans.insert_plan(last_saturday).expect("store up");

        let summary = planner
            .weekly_summary_from("w1", date("2026-03-06"))
            .expect("ok");
        assert_eq!(summary.days_with_routes, 0);
    }

    #[test]
    fn test_weekly_summary_on_sunday_includes_sunday() {
        let (planner, _, plans) = planner_with_stores();
        let sunday = date("2026-03-01");
        let plan = RoutePlan {
            worker_id: "w1".to_string(),
            date: sunday,
            jobs: Vec::new(),
            optimized_order: Vec::new(),
            total_distance_miles: 5.0,
            total_drive_time_minutes: 10,
            fuel_estimate: 1.10,
            created_at: "2026-03-01T18:00:00Z".parse().expect("valid"),
        };
        plans.insert_plan(plan).expect("store up");

        let summary = planner.weekly_summary_from("w1", sunday).expect("ok");
        assert_eq!(summary.week_start, sunday);
        assert_eq!(summary.days_with_routes, 1);
    }

    #[test]
    fn test_reoptimize_supersedes_prior_plan() {
        let (planner, jobs, plans) = planner_with_stores();
        let d = date("2026-03-02");
        jobs.insert("w1", d, record("a", 28.50, -81.40));
        planner.optimize_route("w1", d).expect("ok");
        planner.optimize_route("w1", d).expect("ok");

        // Both runs persisted; reads see exactly one current plan.
        assert_eq!(plans.row_count(), 2);
        let latest = plans.latest_plan("w1", d).expect("store up").expect("plan");
        assert_eq!(latest.jobs.len(), 1);
    }
}
