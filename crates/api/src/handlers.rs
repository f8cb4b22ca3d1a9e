//! Request handlers for the location endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use tracing::{debug, info};
use waypoint_geo::{haversine_distance, nearest, Coordinate};
use waypoint_store::LocationStore;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{
    AddLocationRequest, ClosestRequest, ClosestResponse, DistanceRequest, DistanceResponse,
    HealthResponse, MessageResponse,
};

/// Extracts a coordinate from a pair of raw JSON values.
///
/// Returns `None` unless both values are numbers and the pair is inside the
/// valid latitude/longitude ranges. Strings, nulls, and absent fields all
/// fail here rather than during deserialization.
fn coordinate_from(latitude: &Value, longitude: &Value) -> Option<Coordinate> {
    let coordinate = Coordinate::new(latitude.as_f64()?, longitude.as_f64()?);
    coordinate.is_valid().then_some(coordinate)
}

/// `POST /api/location`: stores a coordinate.
///
/// Responds `201` with a confirmation message on success.
///
/// # Errors
/// - `400 Invalid latitude or longitude.` for missing, non-numeric, or
///   out-of-range coordinates
/// - `400 Location already exists.` when the exact pair is already stored
/// - `500 Internal Server Error.` when the store fails
pub async fn add_location<S: LocationStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<AddLocationRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let coordinate = coordinate_from(&body.latitude, &body.longitude)
        .ok_or(ApiError::InvalidCoordinates("Invalid latitude or longitude."))?;

    if state.store.contains(coordinate).await? {
        return Err(ApiError::Duplicate);
    }
    state.store.insert(coordinate).await?;

    info!(
        latitude = coordinate.latitude,
        longitude = coordinate.longitude,
        "Location added"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Location added successfully.".to_string(),
        }),
    ))
}

/// `POST /api/distance`: great-circle distance between two coordinates.
///
/// Pure computation; the store is never consulted.
pub async fn distance(Json(body): Json<DistanceRequest>) -> Result<Json<DistanceResponse>> {
    let start = coordinate_from(&body.start_latitude, &body.start_longitude);
    let end = coordinate_from(&body.end_latitude, &body.end_longitude);

    let (Some(start), Some(end)) = (start, end) else {
        return Err(ApiError::InvalidCoordinates(
            "Invalid start or end coordinates.",
        ));
    };

    let distance = haversine_distance(&start, &end);
    debug!(distance_km = distance, "Computed great-circle distance");

    Ok(Json(DistanceResponse { distance }))
}

/// `POST /api/closest`: nearest stored coordinate to a target.
///
/// # Errors
/// - `400 Invalid target coordinates.` for a bad target
/// - `404 No locations found.` when nothing is stored
/// - `500 Internal Server Error.` when the store fails
pub async fn closest<S: LocationStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<ClosestRequest>,
) -> Result<Json<ClosestResponse>> {
    let target = coordinate_from(&body.target_latitude, &body.target_longitude)
        .ok_or(ApiError::InvalidCoordinates("Invalid target coordinates."))?;

    let candidates = state.store.fetch_all().await?;
    let found = nearest(&target, &candidates).ok_or(ApiError::NoLocations)?;

    debug!(
        latitude = found.coordinate.latitude,
        longitude = found.coordinate.longitude,
        distance_km = found.distance,
        "Found closest location"
    );

    Ok(Json(ClosestResponse {
        closest_location: found.coordinate,
        distance: found.distance,
    }))
}

/// `GET /health`: liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "waypoint-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
