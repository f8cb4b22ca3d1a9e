//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two
//! points on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Degrees to radians, as `(deg * π) / 180`.
///
/// Deliberately not [`f64::to_radians`]: that multiplies by a precomputed
/// `π/180` and rounds differently in the last ulp. Downstream consumers
/// compare distances against recorded values, so the evaluation order is
/// part of the contract.
#[inline]
fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Calculates the great-circle distance between two coordinates in
/// kilometers.
///
/// Both coordinates are assumed to be within geodetic bounds (see
/// [`Coordinate::is_valid`]); the function itself performs no validation.
/// It is symmetric in its arguments and returns `0.0` for identical points.
///
/// # Example
/// ```
/// use waypoint_geo::{haversine_distance, Coordinate};
///
/// let new_york = Coordinate::new(40.7128, -74.0060);
/// let los_angeles = Coordinate::new(34.0522, -118.2437);
///
/// let distance = haversine_distance(&new_york, &los_angeles);
/// assert!((distance - 3936.0).abs() < 10.0);
/// ```
#[inline]
#[must_use]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let d_lat = to_radians(to.latitude - from.latitude);
    let d_lon = to_radians(to.longitude - from.longitude);

    let h = (d_lat / 2.0).sin().powi(2)
        + to_radians(from.latitude).cos()
            * to_radians(to.latitude).cos()
            * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Test data: known distances between cities
    const SAN_FRANCISCO: Coordinate = Coordinate { latitude: 37.7749, longitude: -122.4194 };
    const LOS_ANGELES: Coordinate = Coordinate { latitude: 34.0522, longitude: -118.2437 };
    const NEW_YORK: Coordinate = Coordinate { latitude: 40.7128, longitude: -74.0060 };
    const TOKYO: Coordinate = Coordinate { latitude: 35.6762, longitude: 139.6503 };

    #[test]
    fn san_francisco_to_los_angeles() {
        let distance = haversine_distance(&SAN_FRANCISCO, &LOS_ANGELES);
        // Expected: ~559.12 km
        assert!((distance - 559.12).abs() < 1.0, "SF-LA: {}", distance);
    }

    #[test]
    fn new_york_to_tokyo() {
        let distance = haversine_distance(&NEW_YORK, &TOKYO);
        // Expected: ~10,838 km
        assert!((distance - 10838.0).abs() < 50.0, "NYC-Tokyo: {}", distance);
    }

    #[test]
    fn same_point_zero_distance() {
        let distance = haversine_distance(&SAN_FRANCISCO, &SAN_FRANCISCO);
        assert!(distance.abs() < 1e-9);
    }

    #[test]
    fn antipodal_points_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let distance = haversine_distance(&a, &b);
        // Half the mean circumference: π * R
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    fn coords() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
    }

    proptest! {
        #[test]
        fn distance_is_non_negative(a in coords(), b in coords()) {
            prop_assert!(haversine_distance(&a, &b) >= 0.0);
        }

        #[test]
        fn distance_to_self_is_zero(a in coords()) {
            prop_assert!(haversine_distance(&a, &a).abs() < 1e-9);
        }

        #[test]
        fn distance_is_symmetric(a in coords(), b in coords()) {
            let forward = haversine_distance(&a, &b);
            let backward = haversine_distance(&b, &a);
            prop_assert!((forward - backward).abs() < 1e-9, "{} vs {}", forward, backward);
        }

        #[test]
        fn triangle_inequality_holds(a in coords(), b in coords(), c in coords()) {
            let direct = haversine_distance(&a, &c);
            let via_b = haversine_distance(&a, &b) + haversine_distance(&b, &c);
            prop_assert!(direct <= via_b + 1e-6, "{} > {}", direct, via_b);
        }
    }
}
