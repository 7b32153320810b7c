//! Distance utilities shared by the index and the visit detector.
//!
//! Comparisons inside the nearest-neighbor search always use squared
//! Euclidean distance; the square root is taken only once, for the final
//! proximity check against the radius.

use geo::{Distance, Euclidean, Point};

/// Default proximity radius distinguishing a visit from a mere nearest-match.
pub const DEFAULT_PROXIMITY_RADIUS: f64 = 5.0;

/// Squared Euclidean distance between two points.
///
/// Exact for integer-valued coordinates, which keeps ordering comparisons in
/// the search free of rounding.
///
/// # Examples
///
/// ```rust
/// use nearspot::{Point, spatial::squared_distance};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(squared_distance(&a, &b), 25.0);
/// ```
#[inline]
pub fn squared_distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

/// Planar Euclidean distance between two points.
///
/// # Examples
///
/// ```rust
/// use nearspot::{Point, spatial::distance_between};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(distance_between(&a, &b), 5.0);
/// ```
#[inline]
pub fn distance_between(a: &Point, b: &Point) -> f64 {
    Euclidean.distance(*a, *b)
}
