//! 2D coordinate value type.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An immutable 2D coordinate with finite components.
///
/// Construction validates finiteness, so every `Point` in circulation is
/// safe to feed into distance computations. Equality and hashing are exact
/// over the IEEE bit representation, which makes `Point` a reliable key in
/// the distance cache and the search score maps. No tolerance-based
/// comparison is performed anywhere: two points are the same location only
/// if their coordinates are bit-identical.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::Point;
///
/// let p = Point::new(3.0, 4.0).unwrap();
/// assert_eq!(p.x(), 3.0);
/// assert_eq!(p.y(), 4.0);
/// assert!(Point::new(f64::NAN, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    ///
    /// Returns `None` if either coordinate is non-finite (NaN or ±∞).
    pub fn new(x: f64, y: f64) -> Option<Self> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Self { x, y })
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

// Bitwise equality keeps Eq consistent with Hash. Coordinates are finite by
// construction, so the usual NaN caveat does not arise.
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}
