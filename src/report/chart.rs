//! PNG chart rendering with plotters
//!
//! All runtime panels use a log2 x axis (matrix sizes are powers of two) and
//! a log y axis, with vertical error bars spanning one standard deviation.
//! GFLOPS panels keep a linear y axis. Rendering only happens after the data
//! pipeline has succeeded, so a failed run never leaves a partial image.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::metrics::{gflops, ComparisonRow};
use crate::stats::SizeStats;

const CPU_COLOR: RGBColor = RGBColor(231, 76, 60);
const GPU_COLOR: RGBColor = RGBColor(52, 152, 219);
const GFLOPS_COLOR: RGBColor = RGBColor(39, 174, 96);

/// One plotted point: matrix size on x, mean runtime on y, std for the bar
#[derive(Debug, Clone, Copy)]
struct SeriesPoint {
    size: f64,
    mean: f64,
    std: f64,
}

fn series_points(stats: &[SizeStats]) -> Vec<SeriesPoint> {
    stats
        .iter()
        .map(|s| SeriesPoint {
            size: s.matrix_size as f64,
            mean: s.mean_ms,
            std: s.std_dev_ms,
        })
        .collect()
}

/// CPU chart: runtime panel plus GFLOPS panel
pub fn render_cpu_chart(stats: &[SizeStats], output: &Path) -> Result<()> {
    prepare_output_dir(output)?;
    let root = BitMapBackend::new(output, (1600, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    draw_runtime_panel(
        &panels[0],
        "CPU Matrix Multiplication Runtime vs Size",
        &[("CPU", series_points(stats), CPU_COLOR)],
        false,
    )?;
    draw_gflops_panel(&panels[1], "CPU Performance (GFLOPS)", stats)?;

    root.present()
        .with_context(|| format!("failed to write chart to '{}'", output.display()))?;
    log::info!("wrote CPU benchmark chart to {}", output.display());
    Ok(())
}

/// GPU chart: single runtime panel with per-point mean labels
pub fn render_gpu_chart(stats: &[SizeStats], output: &Path) -> Result<()> {
    prepare_output_dir(output)?;
    let root = BitMapBackend::new(output, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    draw_runtime_panel(
        &root,
        "GPU Matrix Multiplication Performance",
        &[("GPU", series_points(stats), GPU_COLOR)],
        true,
    )?;

    root.present()
        .with_context(|| format!("failed to write chart to '{}'", output.display()))?;
    log::info!("wrote GPU benchmark chart to {}", output.display());
    Ok(())
}

/// Comparison chart: CPU panel, GPU panel, and an overlay of both on the
/// sizes present in both datasets
pub fn render_comparison_chart(
    cpu: &[SizeStats],
    gpu: &[SizeStats],
    joined: &[ComparisonRow],
    output: &Path,
) -> Result<()> {
    prepare_output_dir(output)?;
    let root = BitMapBackend::new(output, (1800, 500)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 3));

    draw_runtime_panel(
        &panels[0],
        "CPU Performance",
        &[("CPU", series_points(cpu), CPU_COLOR)],
        false,
    )?;
    draw_runtime_panel(
        &panels[1],
        "GPU Performance",
        &[("GPU", series_points(gpu), GPU_COLOR)],
        false,
    )?;

    let cpu_joined: Vec<SeriesPoint> = joined
        .iter()
        .map(|r| SeriesPoint {
            size: r.matrix_size as f64,
            mean: r.cpu_mean_ms,
            std: r.cpu_std_ms,
        })
        .collect();
    let gpu_joined: Vec<SeriesPoint> = joined
        .iter()
        .map(|r| SeriesPoint {
            size: r.matrix_size as f64,
            mean: r.gpu_mean_ms,
            std: r.gpu_std_ms,
        })
        .collect();
    draw_runtime_panel(
        &panels[2],
        "CPU vs GPU Comparison",
        &[
            ("CPU", cpu_joined, CPU_COLOR),
            ("GPU", gpu_joined, GPU_COLOR),
        ],
        false,
    )?;

    root.present()
        .with_context(|| format!("failed to write chart to '{}'", output.display()))?;
    log::info!("wrote comparison chart to {}", output.display());
    Ok(())
}

fn prepare_output_dir(output: &Path) -> Result<()> {
    if let Some(dir) = output.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
        }
    }
    Ok(())
}

/// Runtime-vs-size panel with error bars, shared by all three charts
fn draw_runtime_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    title: &str,
    series: &[(&str, Vec<SeriesPoint>, RGBColor)],
    label_means: bool,
) -> Result<()> {
    // a zero mean runtime cannot sit on a log axis; drop such points the
    // way the GFLOPS panel drops non-finite values
    let series: Vec<(&str, Vec<SeriesPoint>, RGBColor)> = series
        .iter()
        .map(|(name, pts, color)| {
            let pts: Vec<SeriesPoint> = pts.iter().copied().filter(|p| p.mean > 0.0).collect();
            (*name, pts, *color)
        })
        .collect();

    let points: Vec<&SeriesPoint> = series.iter().flat_map(|(_, pts, _)| pts.iter()).collect();
    // an empty inner join still gets labeled axes, just no series
    let (x_lo, x_hi, y_lo, y_hi) = if points.is_empty() {
        (64.0, 1024.0, 0.1, 100.0)
    } else {
        (
            points.iter().map(|p| p.size).fold(f64::INFINITY, f64::min),
            points
                .iter()
                .map(|p| p.size)
                .fold(f64::NEG_INFINITY, f64::max),
            points
                .iter()
                .map(|p| bar_floor(*p))
                .fold(f64::INFINITY, f64::min),
            points
                .iter()
                .map(|p| p.mean + p.std)
                .fold(f64::NEG_INFINITY, f64::max),
        )
    };

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_lo * 0.75..x_hi * 1.5).log_scale().base(2.0),
            (y_lo * 0.5..y_hi * 2.0).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc("Matrix Size (N)")
        .y_desc("Runtime (ms)")
        .x_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    for (name, pts, color) in &series {
        let color = *color;
        chart
            .draw_series(LineSeries::new(
                pts.iter().map(|p| (p.size, p.mean)),
                color.stroke_width(2),
            ))?
            .label(*name)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        chart.draw_series(pts.iter().map(|p| {
            ErrorBar::new_vertical(p.size, bar_floor(p), p.mean, p.mean + p.std, color.filled(), 6)
        }))?;
        chart.draw_series(
            pts.iter()
                .map(|p| Circle::new((p.size, p.mean), 4, color.filled())),
        )?;

        if label_means {
            chart.draw_series(pts.iter().map(|p| {
                Text::new(
                    format!("{:.2}", p.mean),
                    (p.size, p.mean * 1.18),
                    ("sans-serif", 13).into_font(),
                )
            }))?;
        }
    }

    if series.len() > 1 {
        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }

    Ok(())
}

/// GFLOPS-vs-size panel; groups with a non-finite value (zero mean runtime)
/// are skipped
fn draw_gflops_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    title: &str,
    stats: &[SizeStats],
) -> Result<()> {
    let points: Vec<(f64, f64)> = stats
        .iter()
        .map(|s| (s.matrix_size as f64, gflops(s.matrix_size, s.mean_ms)))
        .filter(|(_, g)| g.is_finite())
        .collect();
    let (x_lo, x_hi, y_hi) = if points.is_empty() {
        (64.0, 1024.0, 1.0)
    } else {
        (
            points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min),
            points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max),
            points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max),
        )
    };

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_lo * 0.75..x_hi * 1.5).log_scale().base(2.0),
            0.0..y_hi * 1.15,
        )?;

    chart
        .configure_mesh()
        .x_desc("Matrix Size (N)")
        .y_desc("Performance (GFLOPS)")
        .x_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        GFLOPS_COLOR.stroke_width(2),
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, GFLOPS_COLOR.filled())),
    )?;

    Ok(())
}

/// Lower end of an error bar, kept strictly positive for the log axis.
/// Callers only pass points with a positive mean.
fn bar_floor(p: &SeriesPoint) -> f64 {
    (p.mean - p.std).max(p.mean * 1e-3)
}
