//! Constructive heuristics for building initial routes.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor ordering, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor;
