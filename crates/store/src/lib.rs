//! Location persistence for Waypoint.
//!
//! This crate provides:
//! - [`LocationStore`]: the repository seam the HTTP layer programs against
//! - [`PgStore`]: PostgreSQL-backed store behind a bb8 connection pool
//! - [`MemoryStore`]: in-process store for tests and storage-free operation
//!
//! The geodesic core never sees this crate; stores only materialize the
//! candidate set the engine is handed per call. Coordinate uniqueness is
//! enforced here, by exact latitude/longitude equality, matching the
//! equality semantics of [`waypoint_geo::Coordinate`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod memory;
mod postgres;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use postgres::{connect, PgPool, PgStore};

use std::future::Future;
use waypoint_geo::Coordinate;

/// Repository abstraction over stored locations.
///
/// Implementations supply the full candidate set at call time; nothing is
/// cached between calls. All methods take `&self`: stores hand out shared
/// handles (a pool or an `Arc`) and provide their own interior
/// synchronization.
pub trait LocationStore: Send + Sync {
    /// Returns every stored coordinate in insertion order.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Coordinate>>> + Send;

    /// Returns true iff an exactly equal coordinate pair is already stored.
    fn contains(&self, coordinate: Coordinate) -> impl Future<Output = Result<bool>> + Send;

    /// Persists a coordinate.
    ///
    /// # Errors
    /// Returns [`StoreError::Duplicate`] when an exactly equal pair is
    /// already stored.
    fn insert(&self, coordinate: Coordinate) -> impl Future<Output = Result<()>> + Send;
}
