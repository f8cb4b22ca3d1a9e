//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
///
/// The core is deliberately total: the distance and nearest-search functions
/// cannot fail, so the only error the crate produces comes from the
/// validation boundary.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Latitude or longitude outside geodetic bounds
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}
