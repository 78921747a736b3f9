//! Spherical-geometry primitives for coverage rendering: direct geodesic
//! destination points and great-circle distances on a 6371 km sphere.
//!
//! Both functions are pure and have no error conditions beyond normal
//! floating-point behavior; callers filter invalid coordinates first.

use crate::constants::EARTH_RADIUS_KM;

/// Destination point from a start point, an initial bearing (degrees,
/// 0 = north, clockwise) and a great-circle distance in km.
///
/// Standard spherical direct-geodesic formula:
/// lat2 = asin(sin lat1 · cos d/R + cos lat1 · sin d/R · cos θ)
/// lon2 = lon1 + atan2(sin θ · sin d/R · cos lat1, cos d/R − sin lat1 · sin lat2)
pub fn destination_point(lat: f64, lon: f64, bearing_deg: f64, distance_km: f64) -> (f64, f64) {
    let lat_rad = lat.to_radians();
    let lon_rad = lon.to_radians();
    let bearing_rad = bearing_deg.to_radians();
    let angular = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat_rad.sin() * angular.cos()
        + lat_rad.cos() * angular.sin() * bearing_rad.cos())
    .asin();

    let lon2 = lon_rad
        + (bearing_rad.sin() * angular.sin() * lat_rad.cos())
            .atan2(angular.cos() - lat_rad.sin() * lat2.sin());

    (lat2.to_degrees(), lon2.to_degrees())
}

/// Great-circle distance between two points in km (haversine form).
///
/// Symmetric, zero for identical points, non-negative.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use more_asserts::assert_ge;

    #[test]
    fn test_haversine_symmetry() {
        let (lat1, lon1) = (5.55, 95.32);
        let (lat2, lon2) = (5.17, 97.15);
        assert_relative_eq!(
            haversine_distance_km(lat1, lon1, lat2, lon2),
            haversine_distance_km(lat2, lon2, lat1, lon1),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_haversine_identical_points_is_zero() {
        assert_abs_diff_eq!(haversine_distance_km(5.2, 95.9, 5.2, 95.9), 0.0);
        assert_abs_diff_eq!(haversine_distance_km(-33.86, 151.21, -33.86, 151.21), 0.0);
    }

    #[test]
    fn test_haversine_non_negative() {
        let pairs = [
            (0.0, 0.0, 0.0, 180.0),
            (89.9, 10.0, -89.9, -170.0),
            (5.2, 95.9, 5.3, 96.0),
        ];
        for (lat1, lon1, lat2, lon2) in pairs {
            assert_ge!(haversine_distance_km(lat1, lon1, lat2, lon2), 0.0);
        }
    }

    #[test]
    fn test_haversine_known_distance() {
        // One degree of latitude along a meridian is ~111.2 km
        let d = haversine_distance_km(0.0, 0.0, 1.0, 0.0);
        assert_relative_eq!(d, 111.19, epsilon = 0.05);
    }

    #[test]
    fn test_destination_round_trip() {
        let (lat, lon) = (5.2, 95.9);
        for distance_km in [0.1, 0.5, 2.0, 10.0, 50.0] {
            for bearing in [0.0, 45.0, 120.0, 240.0, 359.0] {
                let (lat2, lon2) = destination_point(lat, lon, bearing, distance_km);
                let back = haversine_distance_km(lat, lon, lat2, lon2);
                assert_relative_eq!(back, distance_km, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_destination_zero_distance_stays_put() {
        let (lat2, lon2) = destination_point(5.2, 95.9, 73.0, 0.0);
        assert_abs_diff_eq!(lat2, 5.2, epsilon = 1e-12);
        assert_abs_diff_eq!(lon2, 95.9, epsilon = 1e-12);
    }

    #[test]
    fn test_destination_due_north_increases_latitude() {
        let (lat2, lon2) = destination_point(5.2, 95.9, 0.0, 10.0);
        assert_ge!(lat2, 5.2);
        assert_abs_diff_eq!(lon2, 95.9, epsilon = 1e-9);
    }
}
