//! # dayroute
//!
//! Daily multi-stop route optimization for field workers: sequence a
//! worker's jobs for a day over an idealized great-circle distance model,
//! persist the resulting plan, and answer schedule and summary queries.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Coordinate, JobStop, OptimizedRoute, RoutePlan, WeeklySummary)
//! - [`distance`] — Haversine great-circle distance
//! - [`constructive`] — Initial route construction (nearest neighbor)
//! - [`local_search`] — Route improvement (open-route 2-opt)
//! - [`evaluation`] — Route metrics (legs, totals, fuel estimate)
//! - [`planner`] — Orchestrator, store traits, and error taxonomy
//!
//! ## Example
//!
//! ```
//! use dayroute::planner::{JobRecord, MemoryJobStore, MemoryPlanStore, RoutePlanner};
//!
//! let jobs = MemoryJobStore::new();
//! let date = "2026-03-02".parse().unwrap();
//! for (id, lat, lng) in [("a", 28.50, -81.40), ("b", 28.52, -81.35), ("c", 28.40, -81.50)] {
//!     jobs.insert("worker-1", date, JobRecord {
//!         job_id: id.to_string(),
//!         address: Some(format!("{id} street")),
//!         lat: Some(lat),
//!         lng: Some(lng),
//!         scheduled_time: None,
//!     });
//! }
//!
//! let planner = RoutePlanner::new(jobs, MemoryPlanStore::new());
//! let route = planner.optimize_route("worker-1", date).unwrap();
//! assert_eq!(route.jobs.len(), 3);
//! assert_eq!(route.legs.len(), 2);
//! ```

pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod planner;
