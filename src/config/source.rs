//! Core trait for configuration resources.
//!
//! Defines the `ConfigSource` trait that allows the on-disk configuration file
//! and in-memory test sources to be used interchangeably by the store.

use std::io;
use std::path::{Path, PathBuf};

/// Path of the configuration file shipped with the installation.
///
/// Resolved at build time from the crate directory, so it is only meaningful
/// on the machine that built the binary. Deployed controllers should pass an
/// explicit path to [`FileSource::new`] (or `--config` on the command line).
pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config/config.json");

/// Trait for reading the raw configuration bytes.
///
/// Implementations must return the whole resource or an error; the store
/// never sees a partial read. Bytes are not interpreted here: text encoding
/// is checked by the decoder, so bad UTF-8 is a decode failure, not an I/O one.
pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    /// Read the entire resource.
    fn read_raw(&self) -> io::Result<Vec<u8>>;

    /// Human readable identity of the resource, used in error messages.
    fn describe(&self) -> String;
}

/// Configuration file at a fixed path.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_PATH)
    }
}

impl ConfigSource for FileSource {
    fn read_raw(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
