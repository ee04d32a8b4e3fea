//! Domo Collector
//!
//! HTTP service that receives readings pushed by sensor nodes and
//! keeps the latest value per sensor in memory.

mod ingest;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ingest::IngestState;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Listen address from the command line, with a default
    let listen = std::env::args()
        .nth(1)
        .unwrap_or_else(|| format!("0.0.0.0:{}", domo_core::DEFAULT_COLLECTOR_PORT));
    let addr: SocketAddr = listen.parse().context("Invalid listen address")?;

    let state = Arc::new(IngestState::default());
    let app = ingest::create_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("Collector listening on http://{}", addr);

    // Setup Unix signal handlers
    let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
    let mut sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
    }

    Ok(())
}
