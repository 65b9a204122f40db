//! Cluster-then-route planning pipeline.
//!
//! Composes the partitioner and the constructive heuristic: each cluster's
//! center becomes the depot of one route over that cluster's members.

use rand::Rng;

use crate::cluster::{kmeans, Clustering};
use crate::constructive::nearest_neighbor_route;
use crate::distance::DistanceOracle;
use crate::models::{Point, Route};

/// Iterations given to the partitioner by [`plan_delivery_routes`].
const KMEANS_MAX_ITERS: usize = 100;

/// Builds one nearest-neighbor route per non-empty cluster.
///
/// For cluster `i`, the depot is `clustering.centers()[i]` and the targets
/// are the points labeled `i`, in input order. Empty clusters contribute no
/// route. Each cluster gets a fresh distance cache, since routes never share
/// point pairs across clusters.
///
/// # Examples
///
/// ```
/// use delivery_routing::cluster::kmeans;
/// use delivery_routing::models::Point;
/// use delivery_routing::plan::plan_cluster_routes;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let points = vec![
///     Point::new(0.0, 0.0).unwrap(),
///     Point::new(1.0, 0.0).unwrap(),
///     Point::new(100.0, 100.0).unwrap(),
///     Point::new(101.0, 100.0).unwrap(),
/// ];
/// let mut rng = StdRng::seed_from_u64(42);
/// let clustering = kmeans(&points, 2, 100, &mut rng).unwrap();
///
/// let routes = plan_cluster_routes(&points, &clustering);
/// assert_eq!(routes.len(), 2);
/// assert!(routes.iter().all(|r| r.is_closed() && r.num_stops() == 2));
/// ```
pub fn plan_cluster_routes(points: &[Point], clustering: &Clustering) -> Vec<Route> {
    let mut routes = Vec::new();
    for (c, &center) in clustering.centers().iter().enumerate() {
        let members: Vec<Point> = points
            .iter()
            .zip(clustering.labels())
            .filter(|&(_, &label)| label == c)
            .map(|(&point, _)| point)
            .collect();
        if members.is_empty() {
            continue;
        }
        let mut oracle = DistanceOracle::new();
        routes.push(nearest_neighbor_route(center, &members, &mut oracle));
    }
    routes
}

/// Partitions `points` into `k` clusters and routes each one.
///
/// Returns `None` when the partitioner rejects `k` (zero, or larger than
/// the point count). The number of routes may be smaller than `k` if some
/// clusters end up empty.
pub fn plan_delivery_routes<R: Rng>(
    points: &[Point],
    k: usize,
    rng: &mut R,
) -> Option<Vec<Route>> {
    let clustering = kmeans(points, k, KMEANS_MAX_ITERS, rng)?;
    Some(plan_cluster_routes(points, &clustering))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).expect("valid")
    }

    fn two_blobs() -> Vec<Point> {
        vec![
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(50.0, 50.0),
            p(51.0, 51.0),
            p(50.0, 51.0),
        ]
    }

    #[test]
    fn test_pipeline_one_route_per_cluster() {
        let points = two_blobs();
        let mut rng = StdRng::seed_from_u64(11);
        let routes = plan_delivery_routes(&points, 2, &mut rng).expect("valid k");
        assert_eq!(routes.len(), 2);
        let total_stops: usize = routes.iter().map(|r| r.num_stops()).sum();
        assert_eq!(total_stops, points.len());
        assert!(routes.iter().all(|r| r.is_closed()));
    }

    #[test]
    fn test_pipeline_depot_is_cluster_center() {
        let points = two_blobs();
        let mut rng = StdRng::seed_from_u64(11);
        let clustering = kmeans(&points, 2, 100, &mut rng).expect("valid k");
        let routes = plan_cluster_routes(&points, &clustering);
        for route in &routes {
            let depot = route.depot().expect("non-empty route");
            assert!(clustering.centers().contains(&depot));
        }
    }

    #[test]
    fn test_pipeline_invalid_k() {
        let points = two_blobs();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(plan_delivery_routes(&points, 0, &mut rng).is_none());
        assert!(plan_delivery_routes(&points, points.len() + 1, &mut rng).is_none());
    }

    #[test]
    fn test_pipeline_routes_cover_only_own_cluster() {
        let points = two_blobs();
        let mut rng = StdRng::seed_from_u64(21);
        let clustering = kmeans(&points, 2, 100, &mut rng).expect("valid k");
        let routes = plan_cluster_routes(&points, &clustering);
        for route in &routes {
            let depot = route.depot().expect("non-empty route");
            let c = clustering
                .centers()
                .iter()
                .position(|&center| center == depot)
                .expect("depot is a center");
            for stop in route.stops() {
                let i = points
                    .iter()
                    .position(|point| point == stop)
                    .expect("stop comes from the input");
                assert_eq!(clustering.labels()[i], c);
            }
        }
    }
}
