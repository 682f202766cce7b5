//! CPU vs GPU comparison plotter
//!
//! Reads both result files, joins the per-size statistics on matrix size,
//! renders the three-panel comparison chart, and prints the speedup report.

use std::path::Path;
use std::process;

use benchplot::{
    aggregate, join_on_size, load_results, speedup_summary,
    report::{comparison_table, render_comparison_chart, speedup_summary_lines},
    ResultsError,
};

const CPU_RESULTS_CSV: &str = "results/benchmark_cpu_results.csv";
const GPU_RESULTS_CSV: &str = "results/benchmark_results.csv";
const COMPARISON_PLOT_PNG: &str = "results/comparison_plot.png";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        if let Some(results_err) = err.downcast_ref::<ResultsError>() {
            if results_err.needs_benchmark_run() {
                eprintln!("Please run both benchmarks first to produce the results files.");
            }
        }
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cpu_records = load_results(Path::new(CPU_RESULTS_CSV))?;
    let gpu_records = load_results(Path::new(GPU_RESULTS_CSV))?;

    let cpu_stats = aggregate(&cpu_records);
    let gpu_stats = aggregate(&gpu_records);
    let joined = join_on_size(&cpu_stats, &gpu_stats);

    render_comparison_chart(&cpu_stats, &gpu_stats, &joined, Path::new(COMPARISON_PLOT_PNG))?;
    println!("Comparison plot saved to: {COMPARISON_PLOT_PNG}");

    println!();
    print!("{}", comparison_table(&joined));

    if let Some(summary) = speedup_summary(&joined) {
        println!();
        println!("{}", speedup_summary_lines(&summary));
    } else {
        println!();
        println!("No matrix sizes are present in both result files; no speedup to report.");
    }

    Ok(())
}
