//! Configuration schema definitions.
//!
//! This module defines the structure of the chamber configuration file using
//! serde. Unlike a settings file with defaults, every field here is mandatory:
//! the document is decoded in one pass at load time and a missing or ill-typed
//! field rejects the whole file.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{ConfigError, ConfigResult};

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// API listener settings
    pub api: ApiSettings,
    /// Chambers, addressed by their position in this list
    pub chambers: Vec<ChamberSpec>,
}

impl ConfigDocument {
    /// Decode a document from JSON text.
    ///
    /// `source_name` only labels the error.
    pub fn from_json_str(source_name: &str, text: &str) -> ConfigResult<Self> {
        serde_json::from_str(text).map_err(|e| ConfigError::decode(source_name, e))
    }

    /// Decode a document from raw file bytes.
    ///
    /// Bytes that are not valid UTF-8 are rejected by the decoder, so they
    /// report as [`ConfigError::Decode`] like any other malformed content.
    pub fn from_json_slice(source_name: &str, bytes: &[u8]) -> ConfigResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| ConfigError::decode(source_name, e))
    }

    /// Get a chamber by index.
    pub fn chamber(&self, index: usize) -> ConfigResult<&ChamberSpec> {
        self.chambers
            .get(index)
            .ok_or_else(|| ConfigError::out_of_range(index, self.chambers.len()))
    }
}

/// API section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Host address the API binds to
    pub host: String,
    /// Port number the API binds to
    pub port: u16,
}

/// One physical chamber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChamberSpec {
    /// Human readable label
    pub name: String,
    /// Temperature sensors, in polling order
    #[serde(rename = "tempSensors")]
    pub temp_sensors: Vec<SensorId>,
    /// GPIO pin driving the LED
    #[serde(rename = "ledIO")]
    pub led_io: u32,
    /// GPIO pin driving the fan
    #[serde(rename = "fanIO")]
    pub fan_io: u32,
    /// GPIO pin driving the heater
    #[serde(rename = "heaterIO")]
    pub heater_io: u32,
    /// Sensor sampling rate
    #[serde(rename = "samplingRate")]
    pub sampling_rate: f64,
    /// Temperature controller tuning
    pub pid: PidSettings,
}

/// PID controller tuning for a chamber.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidSettings {
    /// Proportional gain
    pub kp: f64,
    /// Integral gain
    pub ki: f64,
    /// Derivative gain
    pub kd: f64,
    /// Controller output bounds
    #[serde(rename = "outLimits")]
    pub out_limits: OutputLimits,
}

/// Controller output bounds, written as `[min, max]` in the file.
///
/// Both bounds are held as `f64`, so `[0, 100]` in the file serializes back
/// as `[0.0, 100.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct OutputLimits {
    pub min: f64,
    pub max: f64,
}

impl OutputLimits {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl From<(f64, f64)> for OutputLimits {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

impl From<OutputLimits> for (f64, f64) {
    fn from(limits: OutputLimits) -> Self {
        (limits.min, limits.max)
    }
}

/// Identifier of a temperature sensor.
///
/// The file may list sensors by any JSON scalar: usually a numeric index or a
/// textual bus address. Values are carried through unchanged. Variant order
/// matters for the untagged decode: integers are tried before floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SensorId {
    /// Numeric sensor index
    Index(i64),
    /// Integer index above `i64::MAX`
    Unsigned(u64),
    /// Non-integral number
    Float(f64),
    /// Boolean flag
    Flag(bool),
    /// Textual address (e.g. a 1-Wire ROM id)
    Address(String),
}

impl From<i64> for SensorId {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for SensorId {
    fn from(address: &str) -> Self {
        Self::Address(address.to_string())
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Unsigned(index) => write!(f, "{index}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Address(address) => f.write_str(address),
        }
    }
}
