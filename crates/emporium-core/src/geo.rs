//! # Geo Module
//!
//! Planar distance between coordinate pairs.
//!
//! Users and stores live on a bounded [0, 100] x [0, 100] plane, so the
//! distance is a straight-line Euclidean value, not a geodesic one.

use serde::{Deserialize, Serialize};

/// How far away a store may be and still count as "nearby", in plane units.
pub const NEARBY_RADIUS: f64 = 30.0;

/// A point on the coordinate plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinates {
            latitude,
            longitude,
        }
    }

    /// Straight-line distance to another point.
    pub fn distance_to(&self, other: Coordinates) -> f64 {
        distance(*self, other)
    }

    /// Whether another point lies within [`NEARBY_RADIUS`].
    pub fn is_near(&self, other: Coordinates) -> bool {
        self.distance_to(other) <= NEARBY_RADIUS
    }
}

/// Euclidean distance between two coordinate pairs.
///
/// `sqrt((lat1 - lat2)^2 + (long1 - long2)^2)`
pub fn distance(a: Coordinates, b: Coordinates) -> f64 {
    let dlat = a.latitude - b.latitude;
    let dlong = a.longitude - b.longitude;
    (dlat * dlat + dlong * dlong).sqrt()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinates::new(10.0, 20.0);
        let b = Coordinates::new(47.5, 3.25);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Coordinates::new(55.5, 60.25);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_known_distance() {
        // 3-4-5 triangle
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_near_uses_radius() {
        let origin = Coordinates::new(0.0, 0.0);
        assert!(origin.is_near(Coordinates::new(30.0, 0.0)));
        assert!(!origin.is_near(Coordinates::new(30.0, 1.0)));
    }
}
