//! Console tables and chart rendering for aggregated benchmark results

pub mod chart;
pub mod table;

pub use chart::{render_comparison_chart, render_cpu_chart, render_gpu_chart};
pub use table::{
    comparison_table, cpu_stats_table, gpu_summary_table, peak_gflops_line, speedup_summary_lines,
};
