//! Domain model types for delivery route planning.
//!
//! Provides the core value types: validated 2D points and depot-anchored
//! routes.

mod point;
mod route;

pub use point::Point;
pub use route::Route;
