//! Environment-based configuration for the PostgreSQL store.

use crate::error::{Result, StoreError};
use std::env;
use std::time::Duration;

/// Connection settings for [`PgStore`](crate::PgStore).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database host
    pub host: String,
    /// Database port
    pub port: u16,
    /// Database name
    pub dbname: String,
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
    /// Maximum pool size
    pub pool_size: u32,
    /// Per-connection connect timeout
    pub connect_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5432,
            dbname: "waypoint".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
            pool_size: 16,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads the following environment variables, falling back to the
    /// defaults above when unset:
    /// - `POSTGRES_HOST`
    /// - `POSTGRES_PORT`
    /// - `POSTGRES_DB`
    /// - `POSTGRES_USER`
    /// - `POSTGRES_PASSWORD`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("POSTGRES_HOST").unwrap_or(defaults.host),
            port: env::var("POSTGRES_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            dbname: env::var("POSTGRES_DB").unwrap_or(defaults.dbname),
            user: env::var("POSTGRES_USER").unwrap_or(defaults.user),
            password: env::var("POSTGRES_PASSWORD").unwrap_or(defaults.password),
            ..defaults
        }
    }

    /// Builder-style method to set the pool size.
    #[must_use]
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Builder-style method to set the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns [`StoreError::Config`] for an empty host or database name, or
    /// a zero-sized pool.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(StoreError::config("host cannot be empty"));
        }
        if self.dbname.is_empty() {
            return Err(StoreError::config("dbname cannot be empty"));
        }
        if self.pool_size == 0 {
            return Err(StoreError::config("pool_size must be at least 1"));
        }
        Ok(())
    }

    /// Build the `tokio_postgres` connection config.
    pub(crate) fn to_pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .user(&self.user)
            .password(&self.password);
        config.application_name("waypoint-server");
        config.connect_timeout(self.connect_timeout);
        config
    }
}
