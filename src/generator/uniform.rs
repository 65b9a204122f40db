//! Uniform random point sampling.

use rand::Rng;

use crate::models::Point;

/// Samples `n` points uniformly over the given inclusive coordinate ranges.
///
/// Returns `None` if a range bound is non-finite or a range is inverted
/// (`min > max`). Degenerate ranges (`min == max`) are allowed and pin that
/// coordinate. Deterministic under a seeded RNG.
///
/// # Examples
///
/// ```
/// use delivery_routing::generator::uniform_points;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let points = uniform_points(50, (0.0, 100.0), (0.0, 100.0), &mut rng).unwrap();
/// assert_eq!(points.len(), 50);
/// assert!(points.iter().all(|p| (0.0..=100.0).contains(&p.x())));
/// ```
pub fn uniform_points<R: Rng>(
    n: usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
    rng: &mut R,
) -> Option<Vec<Point>> {
    if !valid_range(x_range) || !valid_range(y_range) {
        return None;
    }

    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let x = rng.random_range(x_range.0..=x_range.1);
        let y = rng.random_range(y_range.0..=y_range.1);
        points.push(Point::new(x, y)?);
    }
    Some(points)
}

fn valid_range((min, max): (f64, f64)) -> bool {
    min.is_finite() && max.is_finite() && min <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_points_count_and_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let points =
            uniform_points(200, (-10.0, 10.0), (5.0, 6.0), &mut rng).expect("valid ranges");
        assert_eq!(points.len(), 200);
        for p in &points {
            assert!((-10.0..=10.0).contains(&p.x()));
            assert!((5.0..=6.0).contains(&p.y()));
        }
    }

    #[test]
    fn test_uniform_points_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = uniform_points(0, (0.0, 1.0), (0.0, 1.0), &mut rng).expect("valid ranges");
        assert!(points.is_empty());
    }

    #[test]
    fn test_uniform_points_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = uniform_points(5, (3.0, 3.0), (0.0, 1.0), &mut rng).expect("valid ranges");
        assert!(points.iter().all(|p| p.x() == 3.0));
    }

    #[test]
    fn test_uniform_points_rejects_bad_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(uniform_points(5, (1.0, 0.0), (0.0, 1.0), &mut rng).is_none());
        assert!(uniform_points(5, (0.0, f64::NAN), (0.0, 1.0), &mut rng).is_none());
        assert!(uniform_points(5, (0.0, 1.0), (f64::INFINITY, 1.0), &mut rng).is_none());
    }

    #[test]
    fn test_uniform_points_deterministic_under_seed() {
        let a = uniform_points(20, (0.0, 100.0), (0.0, 100.0), &mut StdRng::seed_from_u64(5))
            .expect("valid ranges");
        let b = uniform_points(20, (0.0, 100.0), (0.0, 100.0), &mut StdRng::seed_from_u64(5))
            .expect("valid ranges");
        assert_eq!(a, b);
    }
}
