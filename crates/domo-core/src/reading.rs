//! Validated sensor reading model.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of sensor a reading originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    /// Ambient temperature.
    Temperature,
    /// Relative humidity.
    Humidity,
    /// Passive-infrared motion detection.
    MotionIr,
    /// Position/occupancy tracking.
    Position,
}

impl SensorType {
    /// String tag used on the wire and in configuration.
    pub const fn tag(&self) -> &'static str {
        match self {
            SensorType::Temperature => "temperature",
            SensorType::Humidity => "humidity",
            SensorType::MotionIr => "motion_ir",
            SensorType::Position => "position",
        }
    }
}

impl FromStr for SensorType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "temperature" => Ok(SensorType::Temperature),
            "humidity" => Ok(SensorType::Humidity),
            "motion_ir" => Ok(SensorType::MotionIr),
            "position" => Ok(SensorType::Position),
            _ => Err(Error::UnknownSensorType(s.to_string())),
        }
    }
}

impl std::fmt::Display for SensorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Unit of measure for a reading value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Degrees Celsius.
    Celsius,
    /// Percentage (0-100).
    Percent,
    /// Illuminance in lux.
    Lux,
    /// Boolean encoded as 0.0/1.0.
    Boolean,
    /// Integer count carried as a float.
    Count,
    /// Generic dimensionless float.
    Float,
}

impl Unit {
    /// String tag for logs and displays.
    pub const fn tag(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Percent => "%",
            Unit::Lux => "lux",
            Unit::Boolean => "boolean",
            Unit::Count => "integer",
            Unit::Float => "float",
        }
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "°C" => Ok(Unit::Celsius),
            "%" => Ok(Unit::Percent),
            "lux" => Ok(Unit::Lux),
            "boolean" => Ok(Unit::Boolean),
            "integer" => Ok(Unit::Count),
            "float" => Ok(Unit::Float),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One validated measurement sample.
///
/// Constructed fresh on every sample tick and immutable afterwards.
/// Construction fails entirely on invalid input; a partially-valid
/// reading is never observable.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    sensor_id: String,
    sensor_type: SensorType,
    value: f64,
    unit: Unit,
    timestamp: DateTime<Utc>,
}

impl Reading {
    /// Creates a reading stamped with the current UTC time.
    ///
    /// The value may be zero, negative, or ±infinity; only NaN is
    /// rejected. The sensor id must be non-empty.
    pub fn new(
        sensor_id: impl Into<String>,
        sensor_type: SensorType,
        value: f64,
        unit: Unit,
    ) -> Result<Self> {
        Self::with_timestamp(sensor_id, sensor_type, value, unit, Utc::now())
    }

    /// Creates a reading with an explicit timestamp.
    pub fn with_timestamp(
        sensor_id: impl Into<String>,
        sensor_type: SensorType,
        value: f64,
        unit: Unit,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        if value.is_nan() {
            return Err(Error::NanValue);
        }
        let sensor_id = sensor_id.into();
        if sensor_id.is_empty() {
            return Err(Error::EmptySensorId);
        }
        Ok(Self {
            sensor_id,
            sensor_type,
            value,
            unit,
            timestamp,
        })
    }

    /// Identifier of the originating sensor.
    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    /// Kind of the originating sensor.
    pub fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    /// Measured value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit of measure.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Moment the sample was taken, in UTC.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_reading_round_trips_value() {
        for value in [0.0, -12.5, 42.0, f64::INFINITY, f64::NEG_INFINITY] {
            let reading =
                Reading::new("sensor_1", SensorType::Temperature, value, Unit::Celsius).unwrap();
            assert_eq!(reading.value(), value);
            assert_eq!(reading.sensor_id(), "sensor_1");
            assert_eq!(reading.sensor_type(), SensorType::Temperature);
            assert_eq!(reading.unit(), Unit::Celsius);
        }
    }

    #[test]
    fn test_nan_value_rejected() {
        let err = Reading::new("sensor_1", SensorType::Temperature, f64::NAN, Unit::Celsius)
            .unwrap_err();
        assert!(matches!(err, Error::NanValue));
    }

    #[test]
    fn test_empty_sensor_id_rejected() {
        let err = Reading::new("", SensorType::Humidity, 55.0, Unit::Percent).unwrap_err();
        assert!(matches!(err, Error::EmptySensorId));
    }

    #[test]
    fn test_special_characters_in_sensor_id_accepted() {
        let reading = Reading::new("!@#$_sensor", SensorType::Position, 1.0, Unit::Count).unwrap();
        assert_eq!(reading.sensor_id(), "!@#$_sensor");
    }

    #[test]
    fn test_default_timestamp_is_recent_utc() {
        let before = Utc::now();
        let reading = Reading::new("sensor_1", SensorType::MotionIr, 1.0, Unit::Boolean).unwrap();
        let after = Utc::now();
        assert!(reading.timestamp() >= before);
        assert!(reading.timestamp() <= after);
    }

    #[test]
    fn test_explicit_timestamp_preserved() {
        let ts = Utc::now() - chrono::Duration::seconds(90);
        let reading =
            Reading::with_timestamp("sensor_1", SensorType::Temperature, 21.0, Unit::Celsius, ts)
                .unwrap();
        assert_eq!(reading.timestamp(), ts);
    }

    #[test]
    fn test_sensor_type_tags_round_trip() {
        for kind in [
            SensorType::Temperature,
            SensorType::Humidity,
            SensorType::MotionIr,
            SensorType::Position,
        ] {
            assert_eq!(kind.tag().parse::<SensorType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_sensor_type_tag_rejected() {
        for tag in ["light", "pressure", "TEMPERATURE", ""] {
            assert!(matches!(
                tag.parse::<SensorType>(),
                Err(Error::UnknownSensorType(_))
            ));
        }
    }

    #[test]
    fn test_unit_tags_round_trip() {
        for unit in [
            Unit::Celsius,
            Unit::Percent,
            Unit::Lux,
            Unit::Boolean,
            Unit::Count,
            Unit::Float,
        ] {
            assert_eq!(unit.tag().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_unknown_unit_tag_rejected() {
        for tag in ["celsius", "kelvin", ""] {
            assert!(matches!(tag.parse::<Unit>(), Err(Error::UnknownUnit(_))));
        }
    }

    #[test]
    fn test_sensor_type_serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&SensorType::MotionIr).unwrap();
        assert_eq!(json, "\"motion_ir\"");
        let parsed: SensorType = serde_json::from_str("\"temperature\"").unwrap();
        assert_eq!(parsed, SensorType::Temperature);
        assert!(serde_json::from_str::<SensorType>("\"light\"").is_err());
    }
}
