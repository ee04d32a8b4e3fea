//! Fleet coordination: sensor registry and lifecycle control.

#![allow(dead_code)]

use crate::sensors::{SensorMetadata, SensorNode, TemperatureSensor};
use anyhow::Result;
use domo_core::{SensorType, Transport};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// One registered sensor and the task running its loop.
struct ManagedSensor {
    node: Arc<dyn SensorNode>,
    handle: Option<JoinHandle<()>>,
}

/// Owns the fleet: creates sensors, starts their loops, and waits for
/// clean shutdown. The registry is append-only and keeps creation
/// order; ids are `sensor_<N>` with N counting from 1.
pub struct SensorManager {
    transport: Arc<dyn Transport>,
    sensors: Vec<ManagedSensor>,
}

impl SensorManager {
    /// Creates a manager whose sensors all share one transport handle.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            sensors: Vec::new(),
        }
    }

    /// Registers a new sensor of the given kind. No task is started
    /// yet. Fails for kinds with no registered implementation and for
    /// a zero interval; the registry is unchanged on failure.
    pub fn add_sensor(&mut self, kind: SensorType, interval: Duration) -> Result<()> {
        anyhow::ensure!(!interval.is_zero(), "sampling interval must be positive");

        let sensor_id = format!("sensor_{}", self.sensors.len() + 1);
        let node: Arc<dyn SensorNode> = match kind {
            SensorType::Temperature => Arc::new(TemperatureSensor::new(
                &sensor_id,
                Arc::clone(&self.transport),
                interval,
            )),
            other => anyhow::bail!("no sensor implementation registered for type: {other}"),
        };

        info!("Adding sensor: {} ({})", sensor_id, kind);
        self.sensors.push(ManagedSensor { node, handle: None });
        Ok(())
    }

    /// Calibrates and launches every registered sensor that is not
    /// already running, each in its own task. Returns once all
    /// launches are issued; no loop iteration is awaited.
    pub fn start_all(&mut self) {
        for entry in &mut self.sensors {
            if entry.handle.is_some() {
                continue;
            }
            entry.node.calibrate();
            let node = Arc::clone(&entry.node);
            entry.handle = Some(tokio::spawn(async move { node.run().await }));
        }
        info!("All sensors have been started.");
    }

    /// Signals every sensor to stop, then waits for every launched
    /// task to exit. Returns only once the whole fleet has observably
    /// terminated.
    pub async fn stop_all(&mut self) {
        for entry in &self.sensors {
            entry.node.stop();
        }
        for entry in &mut self.sensors {
            if let Some(handle) = entry.handle.take() {
                if let Err(e) = handle.await {
                    warn!("sensor task ended abnormally: {e}");
                }
            }
        }
        info!("All sensors have been stopped.");
    }

    /// Number of registered sensors.
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Identity snapshots for every registered sensor, in creation
    /// order.
    pub fn metadata(&self) -> Vec<SensorMetadata> {
        self.sensors.iter().map(|s| s.node.metadata()).collect()
    }
}
