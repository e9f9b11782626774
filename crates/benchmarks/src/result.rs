//! Evaluation result types.
//!
//! This module provides the [`EvaluationResult`] record returned by an
//! evaluation run, together with the [`ModelOutput`] records it is computed
//! from.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::{BENCHMARK_NAME, BENCHMARK_VERSION};

/// Format of [`EvaluationResult::timestamp`] (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Aggregate scores for an evaluation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Fraction of samples answered correctly.
    pub accuracy: f64,
    /// Harmonic mean of precision and recall.
    pub f1_score: f64,
    /// Precision over positive predictions.
    pub precision: f64,
    /// Recall over positive references.
    pub recall: f64,
}

impl Metrics {
    /// Metrics with every field set to `0.0`.
    pub const fn zero() -> Self {
        Self {
            accuracy: 0.0,
            f1_score: 0.0,
            precision: 0.0,
            recall: 0.0,
        }
    }
}

/// Result of evaluating a batch of model outputs.
///
/// Field order is the serialized key order of the results file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Benchmark name.
    pub benchmark: String,
    /// Benchmark version.
    pub version: String,
    /// Local wall-clock time of the run, formatted with [`TIMESTAMP_FORMAT`].
    pub timestamp: String,
    /// Scores for the run.
    pub metrics: Metrics,
    /// Number of model outputs submitted.
    pub samples_evaluated: usize,
}

impl EvaluationResult {
    /// Create a result for `samples_evaluated` samples, stamped with the
    /// current local time.
    pub fn new(metrics: Metrics, samples_evaluated: usize) -> Self {
        Self {
            benchmark: BENCHMARK_NAME.to_string(),
            version: BENCHMARK_VERSION.to_string(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            metrics,
            samples_evaluated,
        }
    }
}

/// One model output submitted for evaluation.
///
/// The record is opaque: it is usually an object with `input` and `output`
/// keys, but nothing about its shape is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelOutput(pub serde_json::Value);

impl ModelOutput {
    /// Build an `{"input": .., "output": ..}` record.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self(serde_json::json!({
            "input": input.into(),
            "output": output.into(),
        }))
    }
}

impl From<serde_json::Value> for ModelOutput {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
