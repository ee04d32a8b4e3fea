//! Sensor node contract and periodic emission loop.

#![allow(dead_code)]

mod temperature;

pub use temperature::TemperatureSensor;

use async_trait::async_trait;
use domo_core::{Reading, ReadingPayload, Result, SensorType, Transport};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Run state of a sensor node's emission loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NodeState {
    /// Loop has not started yet.
    Idle = 0,
    /// Loop is running.
    Active = 1,
    /// Loop has been told to stop, or has exited. Terminal.
    Stopped = 2,
}

impl NodeState {
    fn from_byte(value: u8) -> Self {
        match value {
            0 => NodeState::Idle,
            1 => NodeState::Active,
            2 => NodeState::Stopped,
            _ => unreachable!("invalid node state byte: {value}"),
        }
    }
}

/// Caller-owned snapshot of a node's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorMetadata {
    /// Node identifier.
    pub id: String,
    /// Sensor kind.
    pub kind: SensorType,
}

/// State shared by every sensor variant: identity, pacing, run flag,
/// and the fleet-wide transport handle.
pub struct SensorBase {
    id: String,
    kind: SensorType,
    interval: Duration,
    state: AtomicU8,
    transport: Arc<dyn Transport>,
}

impl SensorBase {
    /// Creates base state for a node. The kind is fixed for the life
    /// of the node.
    pub fn new(
        id: impl Into<String>,
        kind: SensorType,
        transport: Arc<dyn Transport>,
        interval: Duration,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            interval,
            state: AtomicU8::new(NodeState::Idle as u8),
            transport,
        }
    }

    /// Node identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sensor kind.
    pub fn kind(&self) -> SensorType {
        self.kind
    }

    /// Delay between successive sample ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Current run state.
    pub fn state(&self) -> NodeState {
        NodeState::from_byte(self.state.load(Ordering::Acquire))
    }

    /// Attempts the `Idle -> Active` transition. Fails if the node was
    /// already started or already stopped; `Stopped` is terminal.
    fn enter_active(&self) -> bool {
        self.state
            .compare_exchange(
                NodeState::Idle as u8,
                NodeState::Active as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Requests loop termination. Safe from any task, any number of
    /// times, before or after the loop has run.
    fn halt(&self) {
        self.state.store(NodeState::Stopped as u8, Ordering::Release);
    }
}

/// Contract every sensor variant must satisfy.
///
/// `run` and `stop` come with default implementations carrying the
/// emission-loop state machine; variants supply `read_data` and
/// `calibrate`.
#[async_trait]
pub trait SensorNode: Send + Sync {
    /// Shared node state.
    fn base(&self) -> &SensorBase;

    /// Produces one sample. Must return a fully valid reading or fail;
    /// no suspension occurs here.
    fn read_data(&self) -> Result<Reading>;

    /// Performs any calibration the variant needs.
    fn calibrate(&self);

    /// Returns a fresh, caller-owned copy of the node's identity.
    fn metadata(&self) -> SensorMetadata {
        SensorMetadata {
            id: self.base().id().to_string(),
            kind: self.base().kind(),
        }
    }

    /// Whether the emission loop is currently running.
    fn is_running(&self) -> bool {
        self.base().state() == NodeState::Active
    }

    /// Requests loop termination. Non-blocking and idempotent; the
    /// loop observes the flag at the top of its next iteration.
    fn stop(&self) {
        self.base().halt();
    }

    /// Periodic emission loop.
    ///
    /// Each iteration samples, validates, delivers, logs, then sleeps
    /// for the sampling interval. Validation and delivery failures are
    /// confined to their tick; only `stop` ends the loop. A node whose
    /// `stop` was called before `run` never enters the loop.
    async fn run(&self) {
        let base = self.base();
        if !base.enter_active() {
            debug!("{}: not starting, node already {:?}", base.id(), base.state());
            return;
        }
        info!(
            "{}: started ({} every {:?})",
            base.id(),
            base.kind(),
            base.interval()
        );

        while base.state() == NodeState::Active {
            match self.read_data() {
                Ok(reading) => {
                    let payload = ReadingPayload::from(&reading);
                    match base.transport.send(payload).await {
                        Ok(ack) => info!(
                            "{}: sent {:.2} {} ({}): {}",
                            base.id(),
                            reading.value(),
                            reading.unit(),
                            reading.sensor_type(),
                            ack.message
                        ),
                        Err(e) => error!("{}: failed to deliver reading: {}", base.id(), e),
                    }
                }
                Err(e) => warn!("{}: skipping invalid sample: {}", base.id(), e),
            }
            tokio::time::sleep(base.interval()).await;
        }

        info!("{}: stopped", base.id());
    }
}
