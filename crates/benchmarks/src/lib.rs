//! XSTest benchmark data model for BenchFlow.
//!
//! This crate provides the record types exchanged between the XSTest
//! adapter and the BenchFlow harness, plus the JSON file helpers used to
//! persist them.
//!
//! # Quick Start
//!
//! ```no_run
//! use xstest_benchflow_benchmarks::{io, EvaluationResult, Metrics};
//!
//! let result = EvaluationResult::new(Metrics::zero(), 2);
//! io::ensure_output_dir(io::OUTPUT_DIR)?;
//! io::write_json(&result, "results/results.json")?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`result`] - `EvaluationResult`, `Metrics` and `ModelOutput`
//! - [`info`] - Static `BenchmarkInfo` metadata
//! - [`io`] - I/O operations for reading/writing results

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod info;
pub mod io;
pub mod result;

pub use info::BenchmarkInfo;
pub use result::{EvaluationResult, Metrics, ModelOutput, TIMESTAMP_FORMAT};

/// Name reported for the XSTest benchmark.
pub const BENCHMARK_NAME: &str = "XSTest";

/// Version reported for the XSTest benchmark.
pub const BENCHMARK_VERSION: &str = "1.0.0";
