//! Error types for the HTTP layer
//!
//! Every error renders as a `{"error": "..."}` JSON body with the matching
//! status code. Store failures are logged server-side and surface to clients
//! as an opaque 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;
use waypoint_store::StoreError;

use crate::types::ErrorResponse;

/// Result type alias for handler operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors produced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request carried a missing, non-numeric, or out-of-range coordinate
    #[error("{0}")]
    InvalidCoordinates(&'static str),

    /// The exact coordinate is already stored
    #[error("Location already exists.")]
    Duplicate,

    /// The store holds no locations to search
    #[error("No locations found.")]
    NoLocations,

    /// The store failed; details stay on the server
    #[error("Internal Server Error.")]
    Store(#[source] StoreError),
}

impl ApiError {
    /// Status code this error renders with
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCoordinates(_) | Self::Duplicate => StatusCode::BAD_REQUEST,
            Self::NoLocations => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            // Insert races resolve to the same response as the pre-check.
            StoreError::Duplicate => Self::Duplicate,
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Store(source) = &self {
            error!(error = %source, "Store operation failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_render_as_bad_request() {
        let err = ApiError::InvalidCoordinates("Invalid latitude or longitude.");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid latitude or longitude.");
    }

    #[test]
    fn duplicate_store_error_maps_to_duplicate() {
        let err = ApiError::from(StoreError::Duplicate);
        assert!(matches!(err, ApiError::Duplicate));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Location already exists.");
    }

    #[test]
    fn store_errors_hide_details_from_clients() {
        let err = ApiError::from(StoreError::config("bad pool size"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal Server Error.");
    }

    #[test]
    fn missing_locations_render_as_not_found() {
        assert_eq!(ApiError::NoLocations.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NoLocations.to_string(), "No locations found.");
    }
}
