//! Configuration management.

use anyhow::{Context, Result};
use domo_core::SensorType;
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Collector base URL (e.g., "http://127.0.0.1:8787")
    #[serde(default = "default_collector")]
    pub collector: String,

    /// Timeout for a single reading delivery, in milliseconds
    #[serde(default = "default_send_timeout")]
    pub send_timeout_ms: u64,

    /// Sensors to register at startup
    #[serde(default)]
    pub sensors: Vec<SensorSpec>,
}

/// One sensor entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorSpec {
    /// Sensor type tag
    #[serde(rename = "type")]
    pub kind: SensorType,

    /// Sampling interval in milliseconds
    #[serde(default = "default_interval")]
    pub interval_ms: u64,
}

// Default value functions
fn default_collector() -> String {
    format!("http://127.0.0.1:{}", domo_core::DEFAULT_COLLECTOR_PORT)
}

fn default_send_timeout() -> u64 {
    5000
}

fn default_interval() -> u64 {
    2000
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read configuration file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse configuration")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collector: default_collector(),
            send_timeout_ms: default_send_timeout(),
            sensors: Vec::new(),
        }
    }
}
