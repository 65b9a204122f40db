//! Pairwise Euclidean distances.
//!
//! Provides a lazily-populated, symmetric distance cache shared by the
//! route heuristics and the path search.

mod oracle;

pub use oracle::DistanceOracle;
