//! K-means point partitioning (Lloyd's algorithm).

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Point;

/// A partition of a point set into `k` clusters.
///
/// Holds one cluster index per input point, in input order, plus the `k`
/// representative centers. Centers serve as route depots downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clustering {
    labels: Vec<usize>,
    centers: Vec<Point>,
}

impl Clustering {
    /// Cluster index assigned to each input point, in input order.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Representative center of each cluster.
    pub fn centers(&self) -> &[Point] {
        &self.centers
    }

    /// Number of clusters in this partition.
    pub fn num_clusters(&self) -> usize {
        self.centers.len()
    }
}

/// Partitions `points` into `k` clusters with Lloyd's algorithm.
///
/// Initial centers are sampled without replacement from the input; each
/// iteration assigns every point to its nearest center (ties to the lowest
/// cluster index) and moves each center to the mean of its members. The
/// loop stops when an assignment pass changes nothing or after `max_iters`
/// passes. A cluster that ends up empty keeps its previous center.
///
/// Returns `None` when `k == 0` or `k > points.len()`. Deterministic for a
/// given input order and seeded RNG.
///
/// # Examples
///
/// ```
/// use delivery_routing::cluster::kmeans;
/// use delivery_routing::models::Point;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let points = vec![
///     Point::new(0.0, 0.0).unwrap(),
///     Point::new(1.0, 0.0).unwrap(),
///     Point::new(100.0, 100.0).unwrap(),
///     Point::new(101.0, 100.0).unwrap(),
/// ];
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let clustering = kmeans(&points, 2, 100, &mut rng).unwrap();
/// assert_eq!(clustering.num_clusters(), 2);
/// assert_eq!(clustering.labels().len(), 4);
/// // The two nearby pairs land in the same cluster.
/// assert_eq!(clustering.labels()[0], clustering.labels()[1]);
/// assert_eq!(clustering.labels()[2], clustering.labels()[3]);
/// assert_ne!(clustering.labels()[0], clustering.labels()[2]);
/// ```
pub fn kmeans<R: Rng>(
    points: &[Point],
    k: usize,
    max_iters: usize,
    rng: &mut R,
) -> Option<Clustering> {
    if k == 0 || k > points.len() {
        return None;
    }

    let mut centers: Vec<Point> = rand::seq::index::sample(rng, points.len(), k)
        .iter()
        .map(|i| points[i])
        .collect();
    let mut labels = vec![0usize; points.len()];

    for iter in 0..max_iters {
        let mut changed = false;
        for (i, point) in points.iter().enumerate() {
            let nearest = nearest_center(point, &centers);
            if labels[i] != nearest {
                labels[i] = nearest;
                changed = true;
            }
        }
        // The initial labels are all zero, so the first pass must still
        // reach the center update even when nothing moved.
        if !changed && iter > 0 {
            break;
        }

        for (c, center) in centers.iter_mut().enumerate() {
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            let mut count = 0usize;
            for (i, point) in points.iter().enumerate() {
                if labels[i] == c {
                    sum_x += point.x();
                    sum_y += point.y();
                    count += 1;
                }
            }
            if count > 0 {
                let mean = Point::new(sum_x / count as f64, sum_y / count as f64);
                // A mean of finite coordinates can still overflow to ∞ for
                // extreme inputs; keep the old center in that case.
                if let Some(mean) = mean {
                    *center = mean;
                }
            }
        }
    }

    Some(Clustering { labels, centers })
}

/// Index of the center nearest to `point`, lowest index on ties.
///
/// Squared distance is enough for comparison and skips the square root.
fn nearest_center(point: &Point, centers: &[Point]) -> usize {
    let mut best = 0;
    let mut best_sq = f64::INFINITY;
    for (c, center) in centers.iter().enumerate() {
        let dx = point.x() - center.x();
        let dy = point.y() - center.y();
        let sq = dx * dx + dy * dy;
        if sq < best_sq {
            best_sq = sq;
            best = c;
        }
    }
    best
}
