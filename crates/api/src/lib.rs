//! HTTP surface for the Waypoint location service
//!
//! This crate wires the geodesic core and the location stores into an axum
//! application. Handlers stay thin: parse the request, validate coordinates,
//! delegate to `waypoint-geo` / `waypoint-store`, format the response.
//!
//! # Endpoints
//!
//! - **`POST /api/location`**: store a coordinate, rejecting duplicates
//! - **`POST /api/distance`**: great-circle distance between two coordinates
//! - **`POST /api/closest`**: nearest stored coordinate to a target
//! - **`GET /health`**: liveness probe
//!
//! # Example
//!
//! ```rust,no_run
//! use waypoint_api::{router, AppState};
//! use waypoint_store::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = router(AppState::new(MemoryStore::new()));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod types;

pub use error::{ApiError, Result};
pub use routes::router;
pub use state::AppState;
