//! Route table

use axum::routing::{get, post};
use axum::Router;
use waypoint_store::LocationStore;

use crate::handlers;
use crate::middleware::request_context;
use crate::state::AppState;

/// Builds the application router.
///
/// Works with any [`LocationStore`]; the server binary picks PostgreSQL or
/// the in-memory store at startup.
pub fn router<S>(state: AppState<S>) -> Router
where
    S: LocationStore + Clone + 'static,
{
    Router::new()
        .route("/api/location", post(handlers::add_location::<S>))
        .route("/api/distance", post(handlers::distance))
        .route("/api/closest", post(handlers::closest::<S>))
        .route("/health", get(handlers::health))
        .layer(axum::middleware::from_fn(request_context))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_store::MemoryStore;

    #[test]
    fn router_builds_for_the_memory_store() {
        let _app = router(AppState::new(MemoryStore::new()));
    }
}
