//! Point partitioning.
//!
//! - [`kmeans`] — Lloyd's algorithm producing a [`Clustering`]

mod kmeans;

pub use kmeans::{kmeans, Clustering};
