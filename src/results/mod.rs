//! Benchmark results loading from CSV files

pub mod loader;

pub use loader::{load_results, BenchmarkRecord, ERROR_SENTINEL};

use std::path::PathBuf;
use thiserror::Error;

/// Result type for results-loading operations
pub type ResultsResult<T> = Result<T, ResultsError>;

/// Errors that can occur while loading benchmark results
#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("results file '{0}' not found")]
    MissingFile(PathBuf),

    #[error("failed to read '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid runtime value '{value}' in '{path}' (expected a number or \"ERROR\")")]
    MalformedRuntime { path: PathBuf, value: String },

    #[error("no valid data in '{0}' after filtering error rows")]
    NoValidData(PathBuf),
}

impl ResultsError {
    /// True for the failures a user fixes by (re)running the benchmark,
    /// as opposed to a corrupt file.
    pub fn needs_benchmark_run(&self) -> bool {
        matches!(
            self,
            ResultsError::MissingFile(_) | ResultsError::NoValidData(_)
        )
    }
}
