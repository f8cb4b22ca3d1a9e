//! In-memory location store.
//!
//! Backs tests and the server's `--memory` mode. Semantics mirror
//! [`PgStore`](crate::PgStore): insertion order is preserved and duplicate
//! pairs are rejected by exact equality, here under a single write lock.

use crate::error::{Result, StoreError};
use crate::LocationStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use waypoint_geo::Coordinate;

/// A shared, insertion-ordered in-memory store.
///
/// Cloning is cheap: clones share the same underlying set.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    locations: Arc<RwLock<Vec<Coordinate>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `coordinates`, in order.
    #[must_use]
    pub fn with_locations(coordinates: impl IntoIterator<Item = Coordinate>) -> Self {
        Self {
            locations: Arc::new(RwLock::new(coordinates.into_iter().collect())),
        }
    }
}

impl LocationStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Coordinate>> {
        Ok(self.locations.read().await.clone())
    }

    async fn contains(&self, coordinate: Coordinate) -> Result<bool> {
        Ok(self
            .locations
            .read()
            .await
            .iter()
            .any(|stored| *stored == coordinate))
    }

    async fn insert(&self, coordinate: Coordinate) -> Result<()> {
        let mut locations = self.locations.write().await;
        if locations.iter().any(|stored| *stored == coordinate) {
            return Err(StoreError::Duplicate);
        }
        locations.push(coordinate);
        Ok(())
    }
}
