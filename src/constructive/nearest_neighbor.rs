//! Nearest-neighbor route construction.
//!
//! Builds a depot-anchored route greedily: from the last point added,
//! always travel to the nearest unvisited target, then return to the depot.
//!
//! # Complexity
//!
//! O(n²) where n = number of targets.
//!
//! # Reference
//!
//! The simplest constructive heuristic for single-route problems. The
//! result is locally greedy and intentionally not globally optimal; callers
//! that depend on its exact output rely on the documented tie-breaking.

use crate::distance::DistanceOracle;
use crate::models::{Point, Route};

/// Constructs a route over `targets` using the nearest-neighbor heuristic.
///
/// Starting from `depot`, repeatedly appends the unvisited target with the
/// smallest distance from the route's current last point, then closes the
/// loop back at the depot. The returned route therefore holds
/// `targets.len() + 2` points, and an empty target set yields the
/// degenerate `[depot, depot]` loop.
///
/// Ties are broken by scan order: when two candidates are equidistant, the
/// one appearing first among the remaining targets wins, so the output is
/// deterministic for a given input order. Duplicate target values are kept
/// as distinct visits rather than deduplicated.
///
/// The depot need not be a member of `targets`. As a side effect the oracle
/// cache grows with every pair inspected.
///
/// # Examples
///
/// ```
/// use delivery_routing::constructive::nearest_neighbor_route;
/// use delivery_routing::distance::DistanceOracle;
/// use delivery_routing::models::Point;
///
/// let depot = Point::new(0.0, 0.0).unwrap();
/// let targets = vec![
///     Point::new(10.0, 0.0).unwrap(),
///     Point::new(1.0, 0.0).unwrap(),
///     Point::new(5.0, 0.0).unwrap(),
/// ];
///
/// let mut oracle = DistanceOracle::new();
/// let route = nearest_neighbor_route(depot, &targets, &mut oracle);
/// let xs: Vec<f64> = route.points().iter().map(|p| p.x()).collect();
/// assert_eq!(xs, vec![0.0, 1.0, 5.0, 10.0, 0.0]);
/// assert!((route.total_distance() - 20.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor_route(
    depot: Point,
    targets: &[Point],
    oracle: &mut DistanceOracle,
) -> Route {
    let mut points = Vec::with_capacity(targets.len() + 2);
    points.push(depot);

    let mut remaining: Vec<Point> = targets.to_vec();
    let mut last = depot;
    let mut total = 0.0;

    while !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_dist = oracle.distance(last, remaining[0]);
        for (i, &candidate) in remaining.iter().enumerate().skip(1) {
            let d = oracle.distance(last, candidate);
            // Strict comparison keeps the first-encountered candidate on ties.
            if d < best_dist {
                best_dist = d;
                best_idx = i;
            }
        }
        let next = remaining.remove(best_idx);
        total += best_dist;
        points.push(next);
        last = next;
    }

    total += oracle.distance(last, depot);
    points.push(depot);

    Route::new(points, total)
}
