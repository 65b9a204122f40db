//! Random point-cloud generation.

mod uniform;

pub use uniform::uniform_points;
