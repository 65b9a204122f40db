//! End-to-end planning.
//!
//! - [`plan_cluster_routes`] — One nearest-neighbor route per cluster
//! - [`plan_delivery_routes`] — K-means partition followed by routing

mod pipeline;

pub use pipeline::{plan_cluster_routes, plan_delivery_routes};
