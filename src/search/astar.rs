//! A* shortest path over a complete point graph.
//!
//! Every pair of distinct nodes is a candidate edge weighted by Euclidean
//! distance, and the heuristic is the Euclidean distance to the goal. Since
//! the heuristic is the edge metric itself it is consistent and admissible,
//! so the first extraction of the goal from the open set is optimal. Each
//! expansion scans all nodes, giving O(V²) overall — fine for the point-set
//! sizes this crate targets (tens to low hundreds).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::distance::DistanceOracle;
use crate::models::Point;

/// An open-set entry ordered by estimated total cost, smallest first.
///
/// The heap may hold several entries for the same point at different
/// priorities; stale ones are skipped on extraction.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f_score: f64,
    point: Point,
}

// Equality mirrors the ordering, which only looks at the f-score.
impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest f-score. Scores are
        // sums of finite distances and never NaN.
        other
            .f_score
            .partial_cmp(&self.f_score)
            .expect("f-score should not be NaN")
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a minimum-distance path from `start` to `goal` through `nodes`.
///
/// The node set is treated as a complete graph: any pair of distinct nodes
/// may be a path leg, weighted by Euclidean distance via the oracle.
/// Returns `None` when `start` or `goal` is not a member of `nodes` (checked
/// up front) or when the search exhausts the open set — "no path" is a
/// normal outcome, not an error. `start == goal` yields the single-point
/// path `[start]`.
///
/// # Examples
///
/// ```
/// use delivery_routing::distance::DistanceOracle;
/// use delivery_routing::models::Point;
/// use delivery_routing::search::find_path;
///
/// let nodes: Vec<Point> = [(0.0, 0.0), (0.0, 3.0), (4.0, 0.0), (4.0, 3.0)]
///     .iter()
///     .map(|&(x, y)| Point::new(x, y).unwrap())
///     .collect();
///
/// let mut oracle = DistanceOracle::new();
/// let path = find_path(nodes[0], nodes[3], &nodes, &mut oracle).unwrap();
/// // The graph is complete, so the direct edge of length 5 wins.
/// assert_eq!(path, vec![nodes[0], nodes[3]]);
/// ```
pub fn find_path(
    start: Point,
    goal: Point,
    nodes: &[Point],
    oracle: &mut DistanceOracle,
) -> Option<Vec<Point>> {
    if !nodes.contains(&start) || !nodes.contains(&goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut g_score: HashMap<Point, f64> = HashMap::new();
    g_score.insert(start, 0.0);

    let mut f_score: HashMap<Point, f64> = HashMap::new();
    f_score.insert(start, start.distance_to(&goal));

    let mut came_from: HashMap<Point, Point> = HashMap::new();

    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        f_score: start.distance_to(&goal),
        point: start,
    });

    while let Some(OpenEntry { f_score: f, point: current }) = open.pop() {
        // Stale duplicate left behind by a later improvement.
        if f > *f_score.get(&current).unwrap_or(&f64::INFINITY) {
            continue;
        }
        if current == goal {
            return Some(reconstruct_path(&came_from, current));
        }

        let current_g = *g_score.get(&current).unwrap_or(&f64::INFINITY);
        for &neighbor in nodes {
            if neighbor == current {
                continue;
            }
            let tentative_g = current_g + oracle.distance(current, neighbor);
            if tentative_g < *g_score.get(&neighbor).unwrap_or(&f64::INFINITY) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g);
                let estimate = tentative_g + neighbor.distance_to(&goal);
                f_score.insert(neighbor, estimate);
                open.push(OpenEntry {
                    f_score: estimate,
                    point: neighbor,
                });
            }
        }
    }

    None
}

/// Total length of a path, summing consecutive legs through the oracle.
///
/// Empty and single-point paths cost zero.
pub fn path_cost(path: &[Point], oracle: &mut DistanceOracle) -> f64 {
    path.windows(2).map(|leg| oracle.distance(leg[0], leg[1])).sum()
}

fn reconstruct_path(came_from: &HashMap<Point, Point>, goal: Point) -> Vec<Point> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
