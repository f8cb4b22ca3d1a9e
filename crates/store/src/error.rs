//! Error types for the store crate.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Invalid store configuration
    #[error("Invalid store configuration: {0}")]
    Config(String),

    /// Failed to establish the initial PostgreSQL connection
    #[error("Failed to connect to PostgreSQL: {0}")]
    Connect(#[source] tokio_postgres::Error),

    /// Failed to check a connection out of the pool
    #[error("Connection pool error: {0}")]
    Pool(#[from] bb8::RunError<tokio_postgres::Error>),

    /// A query failed
    #[error("Database error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// The coordinate pair is already stored
    #[error("Location already exists")]
    Duplicate,
}

impl StoreError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
