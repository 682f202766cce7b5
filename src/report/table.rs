//! Fixed-width console tables
//!
//! Columns are right-justified; timings carry 6 decimal places, GFLOPS and
//! speedup carry 2.

use std::fmt::Write;

use crate::metrics::{gflops, ComparisonRow, SpeedupSummary};
use crate::stats::SizeStats;

/// CPU benchmark statistics: size, mean, std dev, GFLOPS
pub fn cpu_stats_table(stats: &[SizeStats]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Benchmark Statistics:");
    let _ = writeln!(out, "{}", "=".repeat(70));
    let _ = writeln!(
        out,
        "{:>15} {:>15} {:>15} {:>15}",
        "Matrix Size", "Mean (ms)", "Std Dev (ms)", "GFLOPS"
    );
    let _ = writeln!(out, "{}", "-".repeat(70));
    for s in stats {
        let _ = writeln!(
            out,
            "{:>15} {:>15.6} {:>15.6} {:>15.2}",
            s.matrix_size,
            s.mean_ms,
            s.std_dev_ms,
            gflops(s.matrix_size, s.mean_ms)
        );
    }
    let _ = writeln!(out, "{}", "=".repeat(70));
    out
}

/// GPU performance summary: size, mean, GFLOPS
pub fn gpu_summary_table(stats: &[SizeStats]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Performance Summary:");
    let _ = writeln!(out, "{}", "=".repeat(70));
    let _ = writeln!(
        out,
        "{:>15} {:>15} {:>20}",
        "Matrix Size", "Avg Time (ms)", "Performance (GFLOPS)"
    );
    let _ = writeln!(out, "{}", "-".repeat(70));
    for s in stats {
        let _ = writeln!(
            out,
            "{:>15} {:>15.6} {:>20.2}",
            s.matrix_size,
            s.mean_ms,
            gflops(s.matrix_size, s.mean_ms)
        );
    }
    let _ = writeln!(out, "{}", "=".repeat(70));
    out
}

/// CPU-vs-GPU comparison: size, per-side means, speedup
pub fn comparison_table(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(80));
    let _ = writeln!(out, "CPU vs GPU Performance Comparison");
    let _ = writeln!(out, "{}", "=".repeat(80));
    let _ = writeln!(
        out,
        "{:>12} {:>15} {:>15} {:>15}",
        "Matrix Size", "CPU (ms)", "GPU (ms)", "Speedup"
    );
    let _ = writeln!(out, "{}", "-".repeat(80));
    for row in rows {
        let _ = writeln!(
            out,
            "{:>12} {:>15.6} {:>15.6} {:>14.2}x",
            row.matrix_size, row.cpu_mean_ms, row.gpu_mean_ms, row.speedup
        );
    }
    let _ = writeln!(out, "{}", "=".repeat(80));
    out
}

/// One-line peak performance summary
pub fn peak_gflops_line(matrix_size: u32, peak: f64) -> String {
    format!("Peak Performance: {peak:.2} GFLOPS at matrix size {matrix_size}x{matrix_size}")
}

/// Average and maximum speedup summary lines
pub fn speedup_summary_lines(summary: &SpeedupSummary) -> String {
    format!(
        "Average Speedup: {:.2}x\nMaximum Speedup: {:.2}x at matrix size {}x{}",
        summary.average, summary.peak, summary.peak_size, summary.peak_size
    )
}
