// Copyright 2025 XSTest BenchFlow Contributors
// SPDX-License-Identifier: Apache-2.0

//! Adapter configuration.
//!
//! Configuration is read from an optional JSON file. Keys missing from the
//! file fall back to defaults; values present in the file always win.
//! Unrecognised keys are kept in [`AdapterConfig::extra`] untouched.
//!
//! # Example
//!
//! ```ignore
//! use xstest_benchflow_adapters::config::AdapterConfig;
//!
//! let config = AdapterConfig::load(Some(Path::new("benchflow.json")))?;
//! println!("writing to {}", config.output_dir.display());
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AdapterError, Result};

/// Default cap on the number of samples per run.
pub const DEFAULT_MAX_SAMPLES: i64 = 100;

/// Default directory results are written to.
pub const DEFAULT_OUTPUT_DIR: &str = xstest_benchflow_benchmarks::io::OUTPUT_DIR;

fn default_max_samples() -> i64 {
    DEFAULT_MAX_SAMPLES
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// Resolved adapter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Maximum number of samples to evaluate. Any integer is accepted.
    #[serde(default = "default_max_samples")]
    pub max_samples: i64,
    /// Directory results files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Keys this version does not recognise.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            max_samples: DEFAULT_MAX_SAMPLES,
            output_dir: default_output_dir(),
            extra: serde_json::Map::new(),
        }
    }
}

impl AdapterConfig {
    /// Load configuration from `path`.
    ///
    /// A missing `path`, or one that does not name an existing file, yields
    /// the defaults. A file that exists but is unreadable or malformed is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.filter(|p| p.is_file()) else {
            if let Some(path) = path {
                tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            }
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| AdapterError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content).map_err(|source| AdapterError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Parse configuration from a JSON object string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(Self::parse(content)?)
    }

    fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}
