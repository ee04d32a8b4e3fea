//! Wire protocol between sensor nodes and the collector.

use crate::reading::{Reading, SensorType};
use serde::{Deserialize, Serialize};

/// Outbound representation of one reading.
///
/// This is the only shape that leaves the process; it is built from an
/// already-validated [`Reading`] immediately before transmission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingPayload {
    /// Identifier of the originating sensor.
    pub sensor_id: String,
    /// Sensor type tag.
    pub sensor_type: SensorType,
    /// Measured value.
    pub value: f64,
    /// Sample time in milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
}

impl From<&Reading> for ReadingPayload {
    fn from(reading: &Reading) -> Self {
        Self {
            sensor_id: reading.sensor_id().to_string(),
            sensor_type: reading.sensor_type(),
            value: reading.value(),
            timestamp_ms: reading.timestamp().timestamp_millis(),
        }
    }
}

/// Collector acknowledgement for one delivered reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    /// Whether the collector accepted the reading.
    pub success: bool,
    /// Human-readable detail.
    pub message: String,
}

impl Ack {
    /// Convenience constructor for an accepted reading.
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Unit;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_payload_copies_reading_fields() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 19, 12, 0, 0).unwrap();
        let reading =
            Reading::with_timestamp("sensor_3", SensorType::Temperature, 21.75, Unit::Celsius, ts)
                .unwrap();
        let payload = ReadingPayload::from(&reading);

        assert_eq!(payload.sensor_id, "sensor_3");
        assert_eq!(payload.sensor_type, SensorType::Temperature);
        assert_eq!(payload.value, 21.75);
        assert_eq!(payload.timestamp_ms, ts.timestamp_millis());
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = ReadingPayload {
            sensor_id: "sensor_1".into(),
            sensor_type: SensorType::MotionIr,
            value: 1.0,
            timestamp_ms: 1_755_604_800_000,
        };
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["sensor_id"], "sensor_1");
        assert_eq!(json["sensor_type"], "motion_ir");
        assert_eq!(json["value"], 1.0);
        assert_eq!(json["timestamp_ms"], 1_755_604_800_000i64);
    }

    #[test]
    fn test_textual_value_rejected_at_wire_boundary() {
        let raw = r#"{"sensor_id":"s","sensor_type":"temperature","value":"hot","timestamp_ms":0}"#;
        assert!(serde_json::from_str::<ReadingPayload>(raw).is_err());
    }

    #[test]
    fn test_missing_value_rejected_at_wire_boundary() {
        let raw = r#"{"sensor_id":"s","sensor_type":"temperature","timestamp_ms":0}"#;
        assert!(serde_json::from_str::<ReadingPayload>(raw).is_err());
    }

    #[test]
    fn test_ack_round_trip() {
        let ack = Ack::accepted("reading received");
        let json = serde_json::to_string(&ack).unwrap();
        let back: Ack = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ack);
        assert!(back.success);
    }
}
