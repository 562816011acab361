//! Shared test utilities for chamber-config tests.
//!
//! This module provides common test infrastructure including:
//! - The reference single-chamber document
//! - A builder for multi-chamber documents
//! - On-disk fixture helpers
//! - JSON assertion helpers

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Single-chamber document used throughout the behavioural tests.
pub const REFERENCE_DOC: &str = r#"{"api":{"host":"127.0.0.1","port":8080},"chambers":[{"name":"C1","tempSensors":[1,2],"ledIO":17,"fanIO":18,"heaterIO":27,"samplingRate":2.5,"pid":{"kp":1.0,"ki":0.1,"kd":0.05,"outLimits":[0,100]}}]}"#;

/// Build the JSON for one chamber with distinct, index-derived values.
///
/// Chamber `i` gets pins `10*i + 1..=3`, sampling rate `i + 0.5`,
/// gains `i + 0.1/0.2/0.3` and limits `[-i, 100 + i]`.
pub fn chamber_json(i: usize) -> Value {
    let f = i as f64;
    json!({
        "name": format!("chamber-{i}"),
        "tempSensors": [i, format!("28-{i:012x}")],
        "ledIO": 10 * i + 1,
        "fanIO": 10 * i + 2,
        "heaterIO": 10 * i + 3,
        "samplingRate": f + 0.5,
        "pid": {
            "kp": f + 0.1,
            "ki": f + 0.2,
            "kd": f + 0.3,
            "outLimits": [-f, 100.0 + f]
        }
    })
}

/// Builder for test configuration documents.
pub struct DocumentBuilder {
    host: String,
    port: u16,
    chambers: Vec<Value>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            chambers: Vec::new(),
        }
    }

    pub fn api(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Append chambers `0..count` generated by [`chamber_json`].
    pub fn chambers(mut self, count: usize) -> Self {
        self.chambers.extend((0..count).map(chamber_json));
        self
    }

    pub fn build_value(self) -> Value {
        json!({
            "api": { "host": self.host, "port": self.port },
            "chambers": self.chambers,
        })
    }

    pub fn build(self) -> String {
        self.build_value().to_string()
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `contents` to `config.json` inside `dir` and return the path.
pub fn write_config_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, contents).expect("Failed to write config fixture");
    path
}

/// Assert that a JSON value contains specific fields with expected values.
pub fn assert_json_contains(actual: &Value, expected: &Value) {
    match (actual, expected) {
        (Value::Object(actual_map), Value::Object(expected_map)) => {
            for (key, expected_value) in expected_map {
                let actual_value = actual_map
                    .get(key)
                    .unwrap_or_else(|| panic!("Expected key '{}' not found in actual JSON", key));
                assert_json_contains(actual_value, expected_value);
            }
        }
        (Value::Array(actual_arr), Value::Array(expected_arr)) => {
            assert_eq!(actual_arr.len(), expected_arr.len(), "Array lengths differ");
            for (actual_item, expected_item) in actual_arr.iter().zip(expected_arr.iter()) {
                assert_json_contains(actual_item, expected_item);
            }
        }
        _ => {
            assert_eq!(
                actual, expected,
                "JSON values differ: expected {:?}, got {:?}",
                expected, actual
            );
        }
    }
}
