//! Mock configuration source for testing.
//!
//! Provides a `MockSource` that serves configuration bytes from memory. Clones
//! share state, so a test can keep one handle and hand the other to a store,
//! then change the contents or inject a read failure between loads.

use super::source::ConfigSource;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

#[derive(Debug, Default)]
struct MockSourceState {
    /// Bytes returned by the next read.
    contents: Vec<u8>,
    /// When set, reads fail with this kind instead of returning contents.
    fail_with: Option<io::ErrorKind>,
    /// Number of read attempts, failed ones included.
    reads: usize,
}

/// In-memory configuration source.
///
/// # Example
/// ```
/// use chamber_config::config::{ConfigSource, MockSource};
///
/// let source = MockSource::new(r#"{"api": {"host": "h", "port": 1}, "chambers": []}"#);
/// assert!(source.read_raw().is_ok());
///
/// source.fail_with(std::io::ErrorKind::PermissionDenied);
/// assert!(source.read_raw().is_err());
/// assert_eq!(source.read_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockSource {
    name: String,
    state: Arc<Mutex<MockSourceState>>,
}

impl MockSource {
    /// Create a source serving the given text or bytes.
    pub fn new(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: "mock".to_string(),
            state: Arc::new(Mutex::new(MockSourceState {
                contents: contents.into(),
                ..Default::default()
            })),
        }
    }

    /// Rename the source as it appears in error messages.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the served contents and clear any injected failure.
    pub fn set_contents(&self, contents: impl Into<Vec<u8>>) {
        let mut state = self.state.lock();
        state.contents = contents.into();
        state.fail_with = None;
    }

    /// Make subsequent reads fail with the given error kind.
    pub fn fail_with(&self, kind: io::ErrorKind) {
        self.state.lock().fail_with = Some(kind);
    }

    /// Number of reads attempted so far.
    pub fn read_count(&self) -> usize {
        self.state.lock().reads
    }
}

impl ConfigSource for MockSource {
    fn read_raw(&self) -> io::Result<Vec<u8>> {
        let mut state = self.state.lock();
        state.reads += 1;

        match state.fail_with {
            Some(kind) => Err(io::Error::new(kind, "injected read failure")),
            None => Ok(state.contents.clone()),
        }
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
