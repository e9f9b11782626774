// Copyright 2025 XSTest BenchFlow Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the BenchFlow adapters.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during adapter operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Configuration file exists but could not be read
    #[error("Failed to read config file {}: {}", path.display(), source)]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not a valid JSON config object
    #[error("Invalid config file {}: {}", path.display(), source)]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output directory could not be created
    #[error("Failed to create output directory {}: {}", path.display(), source)]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Inline JSON could not be parsed
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Results file could not be written
    #[error("Failed to write results to {}: {}", path.display(), source)]
    WriteResults {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Benchmark data could not be loaded
    #[error("Failed to load benchmark: {0}")]
    Load(String),
}

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_messages_include_path() {
        let err = AdapterError::WriteResults {
            path: PathBuf::from("results/out.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write results to results/out.json: denied");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_load_error_message() {
        let err = AdapterError::Load("dataset missing".to_string());
        assert_eq!(err.to_string(), "Failed to load benchmark: dataset missing");
    }
}
