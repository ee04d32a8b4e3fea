//! Domo Fleet Daemon
//!
//! Runs a fleet of simulated smart-home sensors that periodically
//! sample values and push them to the collector.

mod config;
mod manager;
mod sensors;

use anyhow::{Context, Result};
use domo_core::{HttpTransport, Transport};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use manager::SensorManager;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/default.toml".to_string());

    let config = Config::load(&config_path).context("Failed to load configuration")?;
    info!("Loaded configuration from: {}", config_path);

    // One shared transport handle for the whole fleet
    let transport: Arc<dyn Transport> = Arc::new(
        HttpTransport::with_timeout(
            &config.collector,
            Duration::from_millis(config.send_timeout_ms),
        )
        .context("Failed to build collector transport")?,
    );
    info!("Delivering readings to: {}", config.collector);

    // Register and start the fleet
    let mut manager = SensorManager::new(transport);
    for spec in &config.sensors {
        manager.add_sensor(spec.kind, Duration::from_millis(spec.interval_ms))?;
    }
    info!("Registered {} sensors", manager.len());
    manager.start_all();

    // Run until asked to shut down
    let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
    let mut sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;

    tokio::select! {
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
    }

    manager.stop_all().await;
    Ok(())
}
