//! Constructive heuristics for building routes.
//!
//! - [`nearest_neighbor_route`] — Greedy nearest-neighbor sequencing, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor_route;
