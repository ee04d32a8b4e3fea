//! Simulated ambient temperature sensor.

use super::{SensorBase, SensorNode};
use async_trait::async_trait;
use domo_core::{Reading, Result, SensorType, Transport, Unit};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Lower bound of the simulated temperature range (°C).
const TEMP_MIN_C: f64 = 18.0;

/// Upper bound of the simulated temperature range (°C).
const TEMP_MAX_C: f64 = 30.0;

/// Temperature sensor emitting bounded-random values in °C.
pub struct TemperatureSensor {
    base: SensorBase,
}

impl TemperatureSensor {
    /// Creates a new temperature sensor wired to the shared transport.
    pub fn new(sensor_id: &str, transport: Arc<dyn Transport>, interval: Duration) -> Self {
        Self {
            base: SensorBase::new(sensor_id, SensorType::Temperature, transport, interval),
        }
    }
}

#[async_trait]
impl SensorNode for TemperatureSensor {
    fn base(&self) -> &SensorBase {
        &self.base
    }

    fn read_data(&self) -> Result<Reading> {
        let value = rand::rng().random_range(TEMP_MIN_C..=TEMP_MAX_C);
        Reading::new(self.base.id(), self.base.kind(), value, Unit::Celsius)
    }

    /// Placeholder calibration; a real routine would apply an
    /// offset/gain to subsequent samples.
    fn calibrate(&self) {
        info!("Calibrating temperature sensor {}", self.base.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domo_core::{Ack, ReadingPayload};

    struct NullTransport;

    #[async_trait]
    impl Transport for NullTransport {
        async fn send(&self, _payload: ReadingPayload) -> Result<Ack> {
            Ok(Ack::accepted("ok"))
        }
    }

    fn sensor(id: &str) -> TemperatureSensor {
        TemperatureSensor::new(id, Arc::new(NullTransport), Duration::from_secs(2))
    }

    #[test]
    fn test_read_data_stays_in_range_over_many_samples() {
        let ts = sensor("sensor_1");
        for _ in 0..1000 {
            let reading = ts.read_data().unwrap();
            assert!(reading.value() >= TEMP_MIN_C);
            assert!(reading.value() <= TEMP_MAX_C);
            assert_eq!(reading.sensor_id(), "sensor_1");
            assert_eq!(reading.sensor_type(), SensorType::Temperature);
            assert_eq!(reading.unit(), Unit::Celsius);
        }
    }

    #[test]
    fn test_metadata_reports_temperature_kind() {
        let ts = sensor("t-2");
        let meta = ts.metadata();
        assert_eq!(meta.id, "t-2");
        assert_eq!(meta.kind, SensorType::Temperature);
    }

    #[test]
    fn test_read_data_with_empty_id_fails_validation() {
        let ts = sensor("");
        assert!(ts.read_data().is_err());
    }

    #[test]
    fn test_calibrate_does_not_disturb_run_state() {
        let ts = sensor("t-4");
        ts.calibrate();
        assert!(!ts.is_running());
    }
}
