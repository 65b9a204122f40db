//! Informed graph search over point sets.
//!
//! - [`find_path`] — A* over the complete graph induced by a node set
//! - [`path_cost`] — Total length of a point sequence

mod astar;

pub use astar::{find_path, path_cost};
