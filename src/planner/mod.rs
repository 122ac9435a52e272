//! Route planning orchestration.
//!
//! - [`RoutePlanner`] — ties fetching, optimization, metrics, and
//!   persistence together
//! - [`JobStore`] / [`PlanStore`] — traits for the external collaborators
//! - [`MemoryJobStore`] / [`MemoryPlanStore`] — in-memory backends for
//!   tests and demos
//! - [`PlannerError`] / [`StoreError`] — failure taxonomy

mod error;
mod memory;
mod route_planner;
mod store;

pub use error::{PlannerError, StoreError};
pub use memory::{MemoryJobStore, MemoryPlanStore};
pub use route_planner::RoutePlanner;
pub use store::{JobRecord, JobStore, PlanStore};
