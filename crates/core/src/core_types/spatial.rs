//! Geographic primitives shared by both engines
//!
//! Sources, receptors, and barriers are positioned by WGS-84 coordinates.
//! Both engines reduce geometry to great-circle distance and forward bearing;
//! the acoustic engine additionally needs local planar offsets for barrier
//! screening tests.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters (spherical approximation)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Minimum source-receptor separation in meters
///
/// Both engines clamp distances below this to avoid the near-field
/// singularity of the closed-form models.
pub const MIN_DISTANCE_M: f64 = 1.0;

/// A WGS-84 latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    /// Latitude in decimal degrees (positive north)
    pub lat: f64,
    /// Longitude in decimal degrees (positive east)
    pub lon: f64,
}

impl LatLon {
    /// Create a coordinate pair
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        LatLon { lat, lon }
    }

    /// Haversine great-circle distance to another point, in meters
    #[must_use]
    pub fn distance_m(&self, other: &LatLon) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let dphi = (other.lat - self.lat).to_radians();
        let dlambda = (other.lon - self.lon).to_radians();

        let a = (dphi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Forward bearing to another point, in degrees clockwise from north
    /// (normalized to `[0, 360)`)
    #[must_use]
    pub fn bearing_deg(&self, other: &LatLon) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let dlambda = (other.lon - self.lon).to_radians();

        let y = dlambda.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlambda.cos();
        (y.atan2(x).to_degrees() + 360.0) % 360.0
    }

    /// Slant (3-D) distance to another point given heights above ground,
    /// in meters
    #[must_use]
    pub fn slant_distance_m(&self, own_height: f64, other: &LatLon, other_height: f64) -> f64 {
        let horizontal = self.distance_m(other);
        let vertical = (other_height - own_height).abs();
        horizontal.hypot(vertical)
    }

    /// Planar offset of `point` relative to this origin, in meters
    ///
    /// Equirectangular projection: x east, y north. Adequate for the
    /// sub-10-km extents the barrier screening test operates over.
    #[must_use]
    pub fn local_offset_m(&self, point: &LatLon) -> Point2<f64> {
        let mean_lat = ((self.lat + point.lat) / 2.0).to_radians();
        let x = (point.lon - self.lon).to_radians() * mean_lat.cos() * EARTH_RADIUS_M;
        let y = (point.lat - self.lat).to_radians() * EARTH_RADIUS_M;
        Point2::new(x, y)
    }
}

/// Smallest angular separation between two bearings, in degrees `[0, 180]`
#[must_use]
pub fn angular_deviation_deg(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Test whether 2-D segments `(p1, p2)` and `(q1, q2)` intersect
///
/// Standard orientation test via 2-D cross products. Collinear overlap is
/// treated as intersecting (a barrier lying exactly along the propagation
/// path still screens it).
#[must_use]
pub fn segments_intersect(
    p1: &Point2<f64>,
    p2: &Point2<f64>,
    q1: &Point2<f64>,
    q2: &Point2<f64>,
) -> bool {
    fn orient(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> f64 {
        let ab: Vector2<f64> = b - a;
        let ac: Vector2<f64> = c - a;
        ab.perp(&ac)
    }

    fn on_segment(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> bool {
        c.x >= a.x.min(b.x) && c.x <= a.x.max(b.x) && c.y >= a.y.min(b.y) && c.y <= a.y.max(b.y)
    }

    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_haversine_known_distance() {
        // One degree of latitude is ~111.2 km
        let a = LatLon::new(25.0, 55.0);
        let b = LatLon::new(26.0, 55.0);
        let d = a.distance_m(&b);
        assert_relative_eq!(d, 111_195.0, max_relative = 0.01);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = LatLon::new(25.0, 55.0);
        let north = LatLon::new(25.1, 55.0);
        let east = LatLon::new(25.0, 55.1);

        assert_relative_eq!(origin.bearing_deg(&north), 0.0, epsilon = 0.5);
        assert_relative_eq!(origin.bearing_deg(&east), 90.0, epsilon = 0.5);
    }

    #[test]
    fn test_angular_deviation_wraps() {
        assert_relative_eq!(angular_deviation_deg(350.0, 10.0), 20.0);
        assert_relative_eq!(angular_deviation_deg(10.0, 350.0), 20.0);
        assert_relative_eq!(angular_deviation_deg(90.0, 270.0), 180.0);
    }

    #[test]
    fn test_slant_distance_includes_height() {
        let a = LatLon::new(25.0, 55.0);
        let d = a.slant_distance_m(0.0, &a, 30.0);
        assert_relative_eq!(d, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_segments_intersect_crossing() {
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(10.0, 10.0);
        let q1 = Point2::new(0.0, 10.0);
        let q2 = Point2::new(10.0, 0.0);
        assert!(segments_intersect(&p1, &p2, &q1, &q2));
    }

    #[test]
    fn test_segments_intersect_disjoint() {
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(10.0, 0.0);
        let q1 = Point2::new(0.0, 5.0);
        let q2 = Point2::new(10.0, 5.0);
        assert!(!segments_intersect(&p1, &p2, &q1, &q2));
    }
}
