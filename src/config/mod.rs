//! Configuration module for chamber-config.
//!
//! This module provides typed access to the JSON file describing the
//! installation: API settings plus, per chamber, actuator pins, sensors,
//! sampling rate and PID tuning.
//!
//! # Lifecycle
//!
//! 1. Build a [`ConfigStore`] over a [`ConfigSource`] (normally the file at
//!    [`DEFAULT_CONFIG_PATH`]) and share it by `Arc`.
//! 2. Call [`ConfigStore::load`] once at start-up. The file is read and
//!    decoded completely before the store changes; a failed load leaves the
//!    previous document in place.
//! 3. Query fields with the accessors. Calls made before the first successful
//!    load fail with [`ConfigError::NotLoaded`]; a chamber index past the end
//!    fails with [`ConfigError::ChamberOutOfRange`].
//!
//! `load()` may be called again to replace the document wholesale.
//!
//! # Example
//!
//! ```rust,ignore
//! use chamber_config::config::ConfigStore;
//! use std::sync::Arc;
//!
//! let store = Arc::new(ConfigStore::with_default_path());
//! store.load()?;
//!
//! println!("API on {}:{}", store.api_host()?, store.api_port()?);
//! for idx in 0..store.chambers_count()? {
//!     println!("{} heater on GPIO {}", store.chamber_name(idx)?, store.chamber_heater_io(idx)?);
//! }
//! ```

mod error;
mod mock;
mod schema;
mod source;
mod store;

pub use error::{ConfigError, ConfigResult};
pub use mock::MockSource;
pub use schema::{ApiSettings, ChamberSpec, ConfigDocument, OutputLimits, PidSettings, SensorId};
pub use source::{ConfigSource, FileSource, DEFAULT_CONFIG_PATH};
pub use store::ConfigStore;
