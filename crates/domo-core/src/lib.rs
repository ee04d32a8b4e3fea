//! Domo Core Library
//!
//! Shared building blocks for the Domo smart-home sensor fleet: the
//! validated reading model, the wire protocol spoken between sensor
//! nodes and the collector, and the transport used to deliver readings.

pub mod error;
pub mod protocol;
pub mod reading;
pub mod transport;

pub use error::{Error, Result};
pub use protocol::{Ack, ReadingPayload};
pub use reading::{Reading, SensorType, Unit};
pub use transport::{HttpTransport, Transport, DEFAULT_SEND_TIMEOUT};

/// Default port the collector listens on.
pub const DEFAULT_COLLECTOR_PORT: u16 = 8787;
