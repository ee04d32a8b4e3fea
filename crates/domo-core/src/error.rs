//! Error types for the Domo core library.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by reading validation and reading delivery.
#[derive(Error, Debug)]
pub enum Error {
    /// Sensor identifier was empty.
    #[error("sensor id must not be empty")]
    EmptySensorId,

    /// Reading value was NaN.
    #[error("reading value must not be NaN")]
    NanValue,

    /// Sensor type tag outside the supported set.
    #[error("unknown sensor type: {0}")]
    UnknownSensorType(String),

    /// Unit of measure tag outside the supported set.
    #[error("unknown unit of measure: {0}")]
    UnknownUnit(String),

    /// HTTP-level delivery failure (connection, timeout, non-2xx status).
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The collector answered but refused the reading.
    #[error("collector rejected reading: {0}")]
    Rejected(String),
}
