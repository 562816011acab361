//! Configuration store: load lifecycle and accessors.

use super::error::{ConfigError, ConfigResult};
use super::schema::{ChamberSpec, ConfigDocument, OutputLimits, SensorId};
use super::source::{ConfigSource, FileSource};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

/// Owner of the loaded chamber configuration.
///
/// A store starts out unloaded. [`load`](Self::load) reads and decodes the
/// whole resource and, only once that succeeded, swaps the new document in.
/// Every accessor checks for a document first and fails with
/// [`ConfigError::NotLoaded`] when there is none; chamber accessors then check
/// the index and fail with [`ConfigError::ChamberOutOfRange`].
///
/// The store is `Send + Sync`; share it with `Arc<ConfigStore>`. Readers
/// racing a `load()` see either the old or the new document, never a mix.
#[derive(Debug)]
pub struct ConfigStore {
    source: Box<dyn ConfigSource>,
    document: RwLock<Option<Arc<ConfigDocument>>>,
}

impl ConfigStore {
    /// Create an unloaded store reading from `source`.
    pub fn new(source: impl ConfigSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            document: RwLock::new(None),
        }
    }

    /// Create an unloaded store reading the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(FileSource::new(path))
    }

    /// Create an unloaded store reading the installation's config file.
    pub fn with_default_path() -> Self {
        Self::new(FileSource::default())
    }

    /// Read, decode and install the configuration document.
    ///
    /// All-or-nothing: on error the previously installed document (if any)
    /// is kept as is.
    pub fn load(&self) -> ConfigResult<()> {
        let source_name = self.source.describe();
        let bytes = self
            .source
            .read_raw()
            .map_err(|e| ConfigError::io(source_name.as_str(), e))?;
        let document = ConfigDocument::from_json_slice(&source_name, &bytes)?;

        let chambers = document.chambers.len();
        *self.document.write() = Some(Arc::new(document));

        debug!(source = %source_name, chambers, "Configuration loaded");
        Ok(())
    }

    /// Whether a document is installed.
    pub fn is_loaded(&self) -> bool {
        self.document.read().is_some()
    }

    /// Identity of the underlying resource.
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// The current document.
    ///
    /// Hold on to the snapshot when several fields must come from the same
    /// load; it is unaffected by later reloads.
    pub fn snapshot(&self) -> ConfigResult<Arc<ConfigDocument>> {
        self.document.read().clone().ok_or(ConfigError::NotLoaded)
    }

    fn with_document<T>(&self, f: impl FnOnce(&ConfigDocument) -> T) -> ConfigResult<T> {
        let guard = self.document.read();
        let document = guard.as_deref().ok_or(ConfigError::NotLoaded)?;
        Ok(f(document))
    }

    fn with_chamber<T>(&self, index: usize, f: impl FnOnce(&ChamberSpec) -> T) -> ConfigResult<T> {
        trace!(index, "Chamber lookup");
        self.with_document(|document| document.chamber(index).map(f))?
    }

    // --- API ---

    /// API host.
    pub fn api_host(&self) -> ConfigResult<String> {
        self.with_document(|d| d.api.host.clone())
    }

    /// API port.
    pub fn api_port(&self) -> ConfigResult<u16> {
        self.with_document(|d| d.api.port)
    }

    // --- Chambers ---

    /// Number of configured chambers.
    pub fn chambers_count(&self) -> ConfigResult<usize> {
        self.with_document(|d| d.chambers.len())
    }

    /// Full description of one chamber.
    pub fn chamber(&self, index: usize) -> ConfigResult<ChamberSpec> {
        self.with_chamber(index, ChamberSpec::clone)
    }

    pub fn chamber_name(&self, index: usize) -> ConfigResult<String> {
        self.with_chamber(index, |c| c.name.clone())
    }

    /// Temperature sensor ids, in file order.
    pub fn chamber_temp_sensors(&self, index: usize) -> ConfigResult<Vec<SensorId>> {
        self.with_chamber(index, |c| c.temp_sensors.clone())
    }

    pub fn chamber_led_io(&self, index: usize) -> ConfigResult<u32> {
        self.with_chamber(index, |c| c.led_io)
    }

    pub fn chamber_fan_io(&self, index: usize) -> ConfigResult<u32> {
        self.with_chamber(index, |c| c.fan_io)
    }

    pub fn chamber_heater_io(&self, index: usize) -> ConfigResult<u32> {
        self.with_chamber(index, |c| c.heater_io)
    }

    pub fn chamber_sampling_rate(&self, index: usize) -> ConfigResult<f64> {
        self.with_chamber(index, |c| c.sampling_rate)
    }

    // --- PID ---

    pub fn chamber_pid_kp(&self, index: usize) -> ConfigResult<f64> {
        self.with_chamber(index, |c| c.pid.kp)
    }

    pub fn chamber_pid_ki(&self, index: usize) -> ConfigResult<f64> {
        self.with_chamber(index, |c| c.pid.ki)
    }

    pub fn chamber_pid_kd(&self, index: usize) -> ConfigResult<f64> {
        self.with_chamber(index, |c| c.pid.kd)
    }

    /// Controller output bounds as `[min, max]`.
    pub fn chamber_pid_out_limits(&self, index: usize) -> ConfigResult<OutputLimits> {
        self.with_chamber(index, |c| c.pid.out_limits)
    }
}
