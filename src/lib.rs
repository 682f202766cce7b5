//! Plotting and reporting for the matrix multiplication benchmark harness
//!
//! The benchmark scripts write one CSV row per run (`matrix_size`,
//! `runtime_ms`, with the literal `ERROR` marking failed runs). This crate
//! turns those files into per-size statistics, derived GFLOPS / speedup
//! figures, console reports, and PNG charts. Three binaries cover the CPU
//! results, the GPU results, and the CPU-vs-GPU comparison.

pub mod metrics;
pub mod report;
pub mod results;
pub mod stats;

pub use metrics::{
    gflops, join_on_size, peak_gflops, speedup_summary, ComparisonRow, SpeedupSummary,
};
pub use results::{load_results, BenchmarkRecord, ResultsError, ERROR_SENTINEL};
pub use stats::{aggregate, SizeStats};
