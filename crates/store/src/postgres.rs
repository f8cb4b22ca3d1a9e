//! PostgreSQL-backed location store.
//!
//! A bb8 connection pool over `tokio-postgres`. Connections are acquired per
//! operation and returned to the pool when the guard drops; no connection
//! state outlives a call.

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::LocationStore;
use bb8::Pool;
use bb8_postgres::PostgresConnectionManager;
use std::time::Duration;
use tokio_postgres::error::SqlState;
use tokio_postgres::NoTls;
use tracing::info;
use waypoint_geo::Coordinate;

/// Connection pool type used by [`PgStore`].
pub type PgPool = Pool<PostgresConnectionManager<NoTls>>;

/// Idempotent schema for the locations table.
///
/// The `UNIQUE (latitude, longitude)` constraint is the storage-native
/// uniqueness guarantee; `ORDER BY id` reads reproduce insertion order.
const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS locations (
    id          BIGSERIAL PRIMARY KEY,
    latitude    DOUBLE PRECISION NOT NULL,
    longitude   DOUBLE PRECISION NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    UNIQUE (latitude, longitude)
)";

/// PostgreSQL-backed store.
///
/// Cloning is cheap: clones share the same pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

/// Initializes the connection pool and probes it with a test query.
///
/// # Errors
/// Returns [`StoreError::Config`] for an invalid configuration and
/// [`StoreError::Connect`] when the pool cannot reach the database.
pub async fn connect(config: &StoreConfig) -> Result<PgStore> {
    config.validate()?;

    info!(
        host = %config.host,
        port = config.port,
        dbname = %config.dbname,
        user = %config.user,
        "Connecting to PostgreSQL"
    );

    let manager = PostgresConnectionManager::new(config.to_pg_config(), NoTls);
    let pool = Pool::builder()
        .max_size(config.pool_size)
        .min_idle(Some(1))
        .idle_timeout(Some(Duration::from_secs(180)))
        .connection_timeout(Duration::from_secs(15))
        .build(manager)
        .await
        .map_err(StoreError::Connect)?;

    // Probe before handing the pool out.
    let conn = pool.get().await?;
    conn.query_one("SELECT 1", &[])
        .await
        .map_err(StoreError::Connect)?;
    drop(conn);

    info!("PostgreSQL connection pool initialized");
    Ok(PgStore { pool })
}

impl PgStore {
    /// Creates the locations table if it does not exist.
    ///
    /// # Errors
    /// Returns [`StoreError::Query`] when the DDL fails.
    pub async fn init_schema(&self) -> Result<()> {
        let conn = self.pool.get().await?;
        conn.batch_execute(SCHEMA).await?;
        info!("Locations schema ready");
        Ok(())
    }

    /// The underlying pool, for callers that need direct access.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl LocationStore for PgStore {
    async fn fetch_all(&self) -> Result<Vec<Coordinate>> {
        let conn = self.pool.get().await?;
        let rows = conn
            .query("SELECT latitude, longitude FROM locations ORDER BY id", &[])
            .await?;

        rows.iter()
            .map(|row| Ok(Coordinate::new(row.try_get(0)?, row.try_get(1)?)))
            .collect()
    }

    async fn contains(&self, coordinate: Coordinate) -> Result<bool> {
        let conn = self.pool.get().await?;
        let row = conn
            .query_one(
                "SELECT EXISTS (SELECT 1 FROM locations WHERE latitude = $1 AND longitude = $2)",
                &[&coordinate.latitude, &coordinate.longitude],
            )
            .await?;
        Ok(row.try_get(0)?)
    }

    async fn insert(&self, coordinate: Coordinate) -> Result<()> {
        let conn = self.pool.get().await?;
        conn.execute(
            "INSERT INTO locations (latitude, longitude) VALUES ($1, $2)",
            &[&coordinate.latitude, &coordinate.longitude],
        )
        .await
        .map_err(|err| {
            if err.code() == Some(&SqlState::UNIQUE_VIOLATION) {
                StoreError::Duplicate
            } else {
                StoreError::Query(err)
            }
        })?;
        Ok(())
    }
}
