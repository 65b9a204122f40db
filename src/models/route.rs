//! Route type.

use serde::{Deserialize, Serialize};

use super::Point;

/// A closed visiting sequence anchored at a depot.
///
/// A route starts and ends at the same depot point and visits each of its
/// stops exactly once in between, so a route over `n` stops holds `n + 2`
/// points. The degenerate route over zero stops is `[depot, depot]`.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Point, Route};
///
/// let depot = Point::new(0.0, 0.0).unwrap();
/// let stop = Point::new(3.0, 4.0).unwrap();
/// let route = Route::new(vec![depot, stop, depot], 10.0);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.num_stops(), 1);
/// assert!(route.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    points: Vec<Point>,
    total_distance: f64,
}

impl Route {
    /// Creates a route from an ordered point sequence and its total length.
    ///
    /// The sequence is expected to begin and end at the depot; the
    /// constructive heuristics in this crate uphold that invariant.
    pub fn new(points: Vec<Point>, total_distance: f64) -> Self {
        Self {
            points,
            total_distance,
        }
    }

    /// The full ordered point sequence, depot endpoints included.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The depot this route is anchored at, if the route is non-empty.
    pub fn depot(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// The interior stops, excluding the depot endpoints.
    pub fn stops(&self) -> &[Point] {
        if self.points.len() < 2 {
            return &[];
        }
        &self.points[1..self.points.len() - 1]
    }

    /// Number of points in the sequence, depot endpoints included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the route holds no points at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of interior stops.
    pub fn num_stops(&self) -> usize {
        self.stops().len()
    }

    /// Returns `true` if the route starts and ends at the same point.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Total travel distance over all consecutive legs.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).expect("valid")
    }

    #[test]
    fn test_route_degenerate_loop() {
        let depot = p(5.0, 5.0);
        let route = Route::new(vec![depot, depot], 0.0);
        assert_eq!(route.len(), 2);
        assert_eq!(route.num_stops(), 0);
        assert!(route.stops().is_empty());
        assert!(route.is_closed());
        assert_eq!(route.total_distance(), 0.0);
    }

    #[test]
    fn test_route_stops_exclude_depot() {
        let depot = p(0.0, 0.0);
        let a = p(1.0, 0.0);
        let b = p(2.0, 0.0);
        let route = Route::new(vec![depot, a, b, depot], 4.0);
        assert_eq!(route.stops(), &[a, b]);
        assert_eq!(route.num_stops(), 2);
        assert_eq!(route.depot(), Some(depot));
    }

    #[test]
    fn test_route_empty() {
        let route = Route::new(Vec::new(), 0.0);
        assert!(route.is_empty());
        assert!(!route.is_closed());
        assert!(route.depot().is_none());
        assert!(route.stops().is_empty());
    }

    #[test]
    fn test_route_not_closed() {
        let route = Route::new(vec![p(0.0, 0.0), p(1.0, 1.0)], 0.0);
        assert!(!route.is_closed());
    }
}
