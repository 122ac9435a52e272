//! Local search operators for improving routes.
//!
//! - [`two_opt_improve`] — Open-route 2-opt segment reversal
//! - [`route_distance`] — Total open-route length helper

mod two_opt;

pub use two_opt::{route_distance, two_opt_improve};
