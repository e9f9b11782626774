//! I/O operations for benchmark results.
//!
//! This module provides functionality to write results to, and read them
//! back from, pretty-printed JSON files.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Default output directory path.
pub const OUTPUT_DIR: &str = "./results";

/// Default results file name.
pub const RESULTS_FILE: &str = "results.json";

/// Ensure an output directory and all of its parents exist.
pub fn ensure_output_dir(dir: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Write a value as 2-space indented JSON, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, json)
}

/// Read a JSON file into a value.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> io::Result<T> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EvaluationResult, Metrics};
    use tempfile::TempDir;

    #[test]
    fn test_ensure_output_dir_creates_nested_and_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("b").join("c");

        ensure_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
        ensure_output_dir(&dir).unwrap();
    }

    #[test]
    fn test_write_json_uses_two_space_indent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("results.json");

        write_json(&serde_json::json!({"metrics": {"accuracy": 0.0}}), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n  \"metrics\": {\n    \"accuracy\": 0.0\n  }\n}");
    }

    #[test]
    fn test_write_json_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("results.json");

        write_json(&serde_json::json!({"first": true, "extra": [1, 2, 3]}), &path).unwrap();
        write_json(&serde_json::json!({"second": true}), &path).unwrap();

        let value: serde_json::Value = read_json(&path).unwrap();
        assert_eq!(value, serde_json::json!({"second": true}));
    }

    #[test]
    fn test_result_read_back_matches() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.json");
        let result = EvaluationResult::new(Metrics::zero(), 0);

        write_json(&result, &path).unwrap();
        let parsed: EvaluationResult = read_json(&path).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_read_json_rejects_malformed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let err = read_json::<serde_json::Value>(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_write_json_into_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("results.json");

        assert!(write_json(&serde_json::json!({}), &path).is_err());
    }
}
