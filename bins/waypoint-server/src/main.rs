//! Waypoint server - location storage and geodesic queries over HTTP
//!
//! Stores coordinates in PostgreSQL (or in memory for local runs) and answers
//! distance and closest-location queries against them.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use waypoint_api::{router, AppState};
use waypoint_store::{LocationStore, MemoryStore, StoreConfig};

#[derive(Parser)]
#[command(name = "waypoint-server")]
#[command(about = "Location storage and geodesic queries over HTTP")]
#[command(version)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:5000", env = "WAYPOINT_BIND")]
    bind: SocketAddr,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "WAYPOINT_LOG")]
    log_level: String,

    /// Serve from an in-memory store instead of PostgreSQL
    #[arg(long)]
    memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let listener = TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("Failed to bind {}", cli.bind))?;

    if cli.memory {
        info!("Using in-memory location store");
        serve(listener, MemoryStore::new()).await
    } else {
        let config = StoreConfig::from_env();
        let store = waypoint_store::connect(&config)
            .await
            .context("Failed to connect to PostgreSQL")?;
        store
            .init_schema()
            .await
            .context("Failed to initialize the locations schema")?;
        serve(listener, store).await
    }
}

async fn serve<S>(listener: TcpListener, store: S) -> anyhow::Result<()>
where
    S: LocationStore + Clone + 'static,
{
    let app = router(AppState::new(store));
    info!(addr = %listener.local_addr()?, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();
}

/// Resolves when Ctrl-C arrives, letting in-flight requests drain.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
