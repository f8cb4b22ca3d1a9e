//! Request and response bodies for the location endpoints
//!
//! Request coordinates are declared as [`serde_json::Value`] rather than
//! `f64`: a missing field, a `null`, or a string must reach the validation
//! step and produce the endpoint's own 400 message instead of a generic
//! deserialization rejection.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use waypoint_geo::Coordinate;

/// Body for `POST /api/location`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddLocationRequest {
    /// Latitude in decimal degrees; validated as a number in `[-90, 90]`
    pub latitude: Value,
    /// Longitude in decimal degrees; validated as a number in `[-180, 180]`
    pub longitude: Value,
}

/// Body for `POST /api/distance`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistanceRequest {
    /// Start latitude in decimal degrees
    pub start_latitude: Value,
    /// Start longitude in decimal degrees
    pub start_longitude: Value,
    /// End latitude in decimal degrees
    pub end_latitude: Value,
    /// End longitude in decimal degrees
    pub end_longitude: Value,
}

/// Body for `POST /api/closest`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClosestRequest {
    /// Target latitude in decimal degrees
    pub target_latitude: Value,
    /// Target longitude in decimal degrees
    pub target_longitude: Value,
}

/// Success body carrying a human-readable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Outcome description, e.g. `"Location added successfully."`
    pub message: String,
}

/// Error body shared by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Client-facing error description
    pub error: String,
}

/// Body for a successful `POST /api/distance`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DistanceResponse {
    /// Great-circle distance in kilometers
    pub distance: f64,
}

/// Body for a successful `POST /api/closest`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosestResponse {
    /// The stored coordinate nearest to the target
    pub closest_location: Coordinate,
    /// Distance from the target to that coordinate, in kilometers
    pub distance: f64,
}

/// Body for `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status, `"healthy"` when the process is serving
    pub status: String,
    /// Service identifier
    pub service: String,
    /// Crate version baked in at compile time
    pub version: String,
}
