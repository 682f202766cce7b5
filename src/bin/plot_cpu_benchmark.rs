//! CPU benchmark plotter
//!
//! Reads the CPU timing results, renders the runtime + GFLOPS chart, and
//! prints the statistics table with a peak-performance summary.

use std::path::Path;
use std::process;

use benchplot::{
    aggregate, load_results, peak_gflops,
    report::{cpu_stats_table, peak_gflops_line, render_cpu_chart},
    ResultsError,
};

const CPU_RESULTS_CSV: &str = "results/benchmark_cpu_results.csv";
const CPU_PLOT_PNG: &str = "results/benchmark_cpu_plot.png";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        if let Some(results_err) = err.downcast_ref::<ResultsError>() {
            if results_err.needs_benchmark_run() {
                eprintln!("Please run the benchmark first with: ./tests/benchmark_cpu.sh");
            }
        }
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let records = load_results(Path::new(CPU_RESULTS_CSV))?;
    let stats = aggregate(&records);

    render_cpu_chart(&stats, Path::new(CPU_PLOT_PNG))?;
    println!("Plot saved to: {CPU_PLOT_PNG}");

    println!();
    print!("{}", cpu_stats_table(&stats));

    if let Some((size, peak)) = peak_gflops(&stats) {
        println!();
        println!("{}", peak_gflops_line(size, peak));
    }

    Ok(())
}
