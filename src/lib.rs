//! # delivery-routing
//!
//! Delivery route planning over 2D point sets: partition delivery points
//! into territories, build a depot-anchored visiting order per territory
//! with a greedy heuristic, and answer optimal point-to-point path queries
//! with A*.
//!
//! ## Modules
//!
//! - [`models`] — Domain value types (Point, Route)
//! - [`distance`] — Lazily-cached pairwise Euclidean distances
//! - [`constructive`] — Nearest-neighbor route construction
//! - [`search`] — A* shortest path over a complete point graph
//! - [`cluster`] — K-means point partitioning
//! - [`generator`] — Uniform random point sampling
//! - [`plan`] — Cluster-then-route pipeline

pub mod cluster;
pub mod constructive;
pub mod distance;
pub mod generator;
pub mod models;
pub mod plan;
pub mod search;
