//! GPU benchmark plotter
//!
//! Reads the GPU timing results, renders the runtime chart with error bars
//! and per-point labels, and prints the performance summary. Input and
//! output paths can be overridden on the command line:
//!
//!   plot_gpu_benchmark [results.csv] [plot.png]

use std::env;
use std::path::Path;
use std::process;

use benchplot::{
    aggregate, load_results, peak_gflops,
    report::{gpu_summary_table, peak_gflops_line, render_gpu_chart},
    ResultsError,
};

const GPU_RESULTS_CSV: &str = "results/benchmark_results.csv";
const GPU_PLOT_PNG: &str = "results/benchmark_plot.png";

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let csv_path = args.next().unwrap_or_else(|| GPU_RESULTS_CSV.to_string());
    let output_path = args.next().unwrap_or_else(|| GPU_PLOT_PNG.to_string());

    if let Err(err) = run(&csv_path, &output_path) {
        eprintln!("Error: {err}");
        if let Some(results_err) = err.downcast_ref::<ResultsError>() {
            if results_err.needs_benchmark_run() {
                eprintln!("Please run the benchmark first with: ./benchmark.sh");
            }
        }
        process::exit(1);
    }
}

fn run(csv_path: &str, output_path: &str) -> anyhow::Result<()> {
    let records = load_results(Path::new(csv_path))?;
    let stats = aggregate(&records);

    render_gpu_chart(&stats, Path::new(output_path))?;
    println!("Plot saved to: {output_path}");

    println!();
    print!("{}", gpu_summary_table(&stats));

    if let Some((size, peak)) = peak_gflops(&stats) {
        println!();
        println!("{}", peak_gflops_line(size, peak));
    }

    Ok(())
}
