//! Chamber Config Library
//!
//! Typed access to the configuration of a multi-chamber environmental-control
//! installation: the API listener address and, per chamber, the actuator GPIO
//! pins, temperature sensors, sampling rate and PID tuning.
//!
//! # Modules
//!
//! - `config`: the `ConfigStore`, its document model, sources and errors

pub mod config;

// Re-export config types
pub use config::{
    ApiSettings, ChamberSpec, ConfigDocument, ConfigError, ConfigResult, ConfigSource,
    ConfigStore, FileSource, OutputLimits, PidSettings, SensorId,
};
