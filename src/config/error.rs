//! Configuration error types for the config module.

use thiserror::Error;

/// Errors that can occur while loading or querying the chamber configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An accessor was called before any successful `load()`
    #[error("configuration not loaded")]
    NotLoaded,

    /// Failed to read the configuration resource
    #[error("Failed to read configuration from '{source_name}': {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// The resource was readable but is not a valid configuration document
    #[error("Failed to decode configuration from '{source_name}': {source}")]
    Decode {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Chamber index does not name an existing chamber
    #[error("Chamber index {index} out of range ({count} chamber(s) configured)")]
    ChamberOutOfRange { index: usize, count: usize },
}

impl ConfigError {
    /// Create an I/O error for the named resource
    pub fn io<S: Into<String>>(source_name: S, source: std::io::Error) -> Self {
        Self::Io {
            source_name: source_name.into(),
            source,
        }
    }

    /// Create a decode error for the named resource
    pub fn decode<S: Into<String>>(source_name: S, source: serde_json::Error) -> Self {
        Self::Decode {
            source_name: source_name.into(),
            source,
        }
    }

    /// Create an out-of-range error
    pub fn out_of_range(index: usize, count: usize) -> Self {
        Self::ChamberOutOfRange { index, count }
    }

    /// True when the store had no document to answer from.
    pub fn is_not_loaded(&self) -> bool {
        matches!(self, Self::NotLoaded)
    }

    /// True when a chamber index pointed past the configured chambers.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::ChamberOutOfRange { .. })
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        assert_eq!(ConfigError::NotLoaded.to_string(), "configuration not loaded");

        let err = ConfigError::out_of_range(3, 2);
        assert_eq!(
            err.to_string(),
            "Chamber index 3 out of range (2 chamber(s) configured)"
        );

        let err = ConfigError::io("config.json", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.to_string().starts_with("Failed to read configuration from 'config.json'"));
    }

    #[test]
    fn test_kind_predicates_are_disjoint() {
        let not_loaded = ConfigError::NotLoaded;
        let out_of_range = ConfigError::out_of_range(1, 1);

        assert!(not_loaded.is_not_loaded());
        assert!(!not_loaded.is_out_of_range());
        assert!(out_of_range.is_out_of_range());
        assert!(!out_of_range.is_not_loaded());
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::decode("mem", decode);
        assert!(err.source().is_some());
    }
}
