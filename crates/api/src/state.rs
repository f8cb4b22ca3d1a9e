//! Shared application state

/// State handed to every handler.
///
/// Generic over the store so the same router serves PostgreSQL in production
/// and [`MemoryStore`](waypoint_store::MemoryStore) in tests and local runs.
/// Cloning clones the store handle, not the data behind it.
#[derive(Clone)]
pub struct AppState<S> {
    pub(crate) store: S,
}

impl<S> AppState<S> {
    /// Wraps a store for use by the router.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
