//! Pure geodesic core for Waypoint.
//!
//! This crate provides:
//! - Coordinate validation against geodetic bounds
//! - Haversine great-circle distance
//! - Linear nearest-point search over a candidate set
//!
//! It performs no I/O and holds no state: every operation is a pure function
//! of its inputs, safe to call concurrently without coordination. Storage and
//! HTTP live in sibling crates and depend on this one, never the reverse.
//!
//! # Example
//!
//! ```
//! use waypoint_geo::{haversine_distance, Coordinate};
//!
//! let san_francisco = Coordinate::new(37.7749, -122.4194);
//! let los_angeles = Coordinate::new(34.0522, -118.2437);
//!
//! let distance_km = haversine_distance(&san_francisco, &los_angeles);
//! assert!((distance_km - 559.12).abs() < 1.0);
//! ```

mod error;
mod haversine;
mod nearest;

pub use error::{GeoError, Result};
pub use haversine::{haversine_distance, EARTH_RADIUS_KM};
pub use nearest::{nearest, NearestMatch};

/// A geographic coordinate with latitude and longitude.
///
/// Equality is exact on the underlying floats; two coordinates are the same
/// point iff their bits agree. Stored-point uniqueness relies on this.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate without validating it.
    #[inline]
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true iff the coordinate lies within geodetic bounds.
    ///
    /// Total over all `f64` inputs: NaN fails every range comparison and is
    /// therefore invalid without special-casing.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Creates a coordinate, rejecting values outside geodetic bounds.
    ///
    /// # Errors
    /// Returns [`GeoError::InvalidCoordinate`] when either component is out
    /// of range.
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self> {
        let coordinate = Self::new(latitude, longitude);
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(GeoError::InvalidCoordinate(format!(
                "({latitude}, {longitude}) is outside geodetic bounds"
            )))
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn coordinate_creation() {
        let coord = Coordinate::new(37.7749, -122.4194);
        assert_eq!(coord.latitude, 37.7749);
        assert_eq!(coord.longitude, -122.4194);
    }

    #[test]
    fn bounds_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(Coordinate::new(37.7749, -122.4194).is_valid());
        assert!(!Coordinate::new(100.0, -200.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
        assert!(!Coordinate::new(-90.5, 0.0).is_valid());
    }

    #[test]
    fn nan_is_invalid() {
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
        assert!(!Coordinate::new(f64::INFINITY, 0.0).is_valid());
    }

    #[test]
    fn validated_rejects_out_of_range() {
        assert!(Coordinate::validated(37.7749, -122.4194).is_ok());
        let err = Coordinate::validated(100.0, -200.0).unwrap_err();
        assert!(matches!(err, GeoError::InvalidCoordinate(_)));
    }

    #[test]
    fn coordinate_from_tuple() {
        let coord: Coordinate = (40.7128, -74.0060).into();
        assert_eq!(coord.latitude, 40.7128);
    }

    #[test]
    fn serializes_as_plain_fields() {
        let coord = Coordinate::new(40.7128, -74.0060);
        let value = serde_json::to_value(coord).unwrap();
        assert_eq!(value["latitude"], 40.7128);
        assert_eq!(value["longitude"], -74.0060);
    }

    proptest! {
        #[test]
        fn in_range_pairs_are_valid(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            prop_assert!(Coordinate::new(lat, lon).is_valid());
        }

        #[test]
        fn out_of_range_latitude_is_invalid(
            lat in prop_oneof![90.0f64..=1.0e6, -1.0e6f64..=-90.0],
            lon in -180.0f64..=180.0,
        ) {
            // The strategy endpoints include the poles themselves; skip them.
            prop_assume!(lat.abs() > 90.0);
            prop_assert!(!Coordinate::new(lat, lon).is_valid());
        }

        #[test]
        fn out_of_range_longitude_is_invalid(
            lat in -90.0f64..=90.0,
            lon in prop_oneof![180.0f64..=1.0e6, -1.0e6f64..=-180.0],
        ) {
            prop_assume!(lon.abs() > 180.0);
            prop_assert!(!Coordinate::new(lat, lon).is_valid());
        }
    }
}
