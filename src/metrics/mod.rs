//! Derived performance metrics: GFLOPS and CPU-vs-GPU speedup
//!
//! GFLOPS follows the dense square matmul cost model of 2·N³ floating-point
//! operations. Speedup joins two aggregated datasets on matrix size; sizes
//! benchmarked on only one side carry no comparison information and are
//! dropped from the join.

use crate::stats::SizeStats;

/// CPU and GPU statistics for one matrix size present in both datasets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    pub matrix_size: u32,
    pub cpu_mean_ms: f64,
    pub cpu_std_ms: f64,
    pub gpu_mean_ms: f64,
    pub gpu_std_ms: f64,
    /// cpu_mean_ms / gpu_mean_ms
    pub speedup: f64,
}

/// Aggregate speedup figures over all joined sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedupSummary {
    pub average: f64,
    pub peak: f64,
    /// Matrix size at which the peak occurs; ties keep the smallest size
    pub peak_size: u32,
}

/// Effective GFLOPS for a matmul of dimension `matrix_size` with the given
/// mean runtime.
///
/// A zero mean produces `f64::INFINITY` rather than a panic; callers that
/// plot or rank values skip non-finite results.
pub fn gflops(matrix_size: u32, mean_ms: f64) -> f64 {
    let n = matrix_size as f64;
    (2.0 * n * n * n) / (mean_ms * 1.0e6)
}

/// Peak finite GFLOPS over the aggregated groups, with its matrix size.
///
/// Returns `None` when no group has a finite value.
pub fn peak_gflops(stats: &[SizeStats]) -> Option<(u32, f64)> {
    let mut peak: Option<(u32, f64)> = None;
    for s in stats {
        let g = gflops(s.matrix_size, s.mean_ms);
        if !g.is_finite() {
            continue;
        }
        match peak {
            Some((_, best)) if g <= best => {}
            _ => peak = Some((s.matrix_size, g)),
        }
    }
    peak
}

/// Inner join of CPU and GPU statistics on matrix size.
///
/// Both inputs are in ascending size order (see [`crate::stats::aggregate`]),
/// so a single merge pass suffices. Sizes present on only one side are
/// silently dropped.
pub fn join_on_size(cpu: &[SizeStats], gpu: &[SizeStats]) -> Vec<ComparisonRow> {
    let mut rows = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < cpu.len() && j < gpu.len() {
        let (c, g) = (&cpu[i], &gpu[j]);
        if c.matrix_size < g.matrix_size {
            i += 1;
        } else if c.matrix_size > g.matrix_size {
            j += 1;
        } else {
            rows.push(ComparisonRow {
                matrix_size: c.matrix_size,
                cpu_mean_ms: c.mean_ms,
                cpu_std_ms: c.std_dev_ms,
                gpu_mean_ms: g.mean_ms,
                gpu_std_ms: g.std_dev_ms,
                speedup: c.mean_ms / g.mean_ms,
            });
            i += 1;
            j += 1;
        }
    }
    rows
}

/// Average and maximum speedup over the joined rows.
///
/// `None` when the join is empty. Strict comparison keeps the first (hence
/// smallest) size on a tied maximum.
pub fn speedup_summary(rows: &[ComparisonRow]) -> Option<SpeedupSummary> {
    let first = rows.first()?;
    let mut sum = 0.0;
    let mut peak = first.speedup;
    let mut peak_size = first.matrix_size;
    for row in rows {
        sum += row.speedup;
        if row.speedup > peak {
            peak = row.speedup;
            peak_size = row.matrix_size;
        }
    }
    Some(SpeedupSummary {
        average: sum / rows.len() as f64,
        peak,
        peak_size,
    })
}
