//! Static benchmark metadata.

use serde::{Deserialize, Serialize};

use crate::{BENCHMARK_NAME, BENCHMARK_VERSION};

/// Descriptive metadata for a benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkInfo {
    /// Benchmark name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Benchmark version.
    pub version: String,
    /// Benchmark category.
    pub category: String,
    /// Source repository URL.
    pub github: String,
    /// Paper URL.
    pub paper: String,
    /// Project website, empty when there is none.
    pub website: String,
}

impl BenchmarkInfo {
    /// Metadata for XSTest.
    pub fn xstest() -> Self {
        Self {
            name: BENCHMARK_NAME.to_string(),
            description: "A benchmark for knowledge evaluation".to_string(),
            version: BENCHMARK_VERSION.to_string(),
            category: "knowledge".to_string(),
            github: "https://github.com/xstest/xstest".to_string(),
            paper: "https://arxiv.org/abs/1708.00055".to_string(),
            website: String::new(),
        }
    }
}
