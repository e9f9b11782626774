// Copyright 2025 XSTest BenchFlow Contributors
// SPDX-License-Identifier: Apache-2.0

//! BenchFlow benchmark adapters.
//!
//! This crate provides the [`BenchflowInterface`] trait implemented by every
//! benchmark exposed to the BenchFlow harness, and the XSTest adapter.
//!
//! # Example
//!
//! ```no_run
//! use xstest_benchflow_adapters::{BenchflowInterface, XsTestAdapter};
//! use xstest_benchflow_benchmarks::ModelOutput;
//!
//! let adapter = XsTestAdapter::new(None)?;
//! if adapter.load_benchmark() {
//!     let results = adapter.evaluate(&[ModelOutput::new("prompt", "reply")]);
//!     let path = adapter.save(&results)?;
//!     println!("Results saved to {}", path.display());
//! }
//! # Ok::<(), xstest_benchflow_adapters::AdapterError>(())
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod xstest;

pub use config::AdapterConfig;
pub use error::{AdapterError, Result};
pub use xstest::XsTestAdapter;

use std::path::PathBuf;
use xstest_benchflow_benchmarks::{BenchmarkInfo, EvaluationResult, ModelOutput};

/// Default file name used by [`BenchflowInterface::save`].
pub const DEFAULT_RESULTS_FILE: &str = xstest_benchflow_benchmarks::io::RESULTS_FILE;

/// Canonical BenchFlow benchmark interface.
///
/// Implement this trait for any benchmark that should be driven by the
/// BenchFlow harness.
pub trait BenchflowInterface {
    /// Load the benchmark data.
    ///
    /// Returns `false` when the benchmark is unavailable. Failures are logged,
    /// never propagated.
    fn load_benchmark(&self) -> bool;

    /// Evaluate model outputs against the benchmark.
    fn evaluate(&self, model_outputs: &[ModelOutput]) -> EvaluationResult;

    /// Save evaluation results as `filename` under the output directory and
    /// return the written path.
    fn save_results(&self, results: &EvaluationResult, filename: &str) -> Result<PathBuf>;

    /// Save evaluation results under [`DEFAULT_RESULTS_FILE`].
    fn save(&self, results: &EvaluationResult) -> Result<PathBuf> {
        self.save_results(results, DEFAULT_RESULTS_FILE)
    }

    /// Describe the benchmark.
    fn get_benchmark_info(&self) -> BenchmarkInfo;
}
