//! Line charts of a metric over iterations.
//!
//! Every chart is drawn from its own [`Figure`], which the caller owns for the
//! duration of the call. Nothing is kept between two plots.

use crate::output::{ensure_run_dir, OutputConfig};
use crate::{ReportError, Result};
use chrono::NaiveDateTime;
use plotters::prelude::*;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Extra room on each side of the data, as a fraction of its span
const AXIS_MARGIN: f64 = 0.05;

/// Smallest half-width of an axis relative to its center, so ticks stay distinct
const MIN_RELATIVE_HALF_WIDTH: f64 = 1e-9;

/// Line colors, cycled per series (matplotlib's tab10 head)
const SERIES_COLORS: [RGBColor; 4] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
];

/// Turn a plot title into a file stem: spaces become hyphens, parentheses go away
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// PNG file name for a plot title
pub fn plot_file_name(title: &str) -> String {
    format!("{}.png", sanitize_title(title))
}

/// A single chart: canvas size, labels and the line series to draw
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    width: u32,
    height: u32,
    title: String,
    x_label: String,
    y_label: String,
    lines: Vec<Vec<(f64, f64)>>,
}

impl Figure {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            lines: Vec::new(),
        }
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    pub fn x_label<S: Into<String>>(mut self, label: S) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label<S: Into<String>>(mut self, label: S) -> Self {
        self.y_label = label.into();
        self
    }

    /// Add a line through the points `(x[i], y[i])`.
    ///
    /// Points with a non-finite coordinate are dropped.
    pub fn add_line(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        if x.len() != y.len() {
            return Err(ReportError::SeriesLengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let points = x
            .iter()
            .zip(y)
            .map(|(&x, &y)| (x, y))
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();
        self.lines.push(points);
        Ok(())
    }

    fn x_range(&self) -> Range<f64> {
        axis_range(self.lines.iter().flatten().map(|&(x, _)| x))
    }

    fn y_range(&self) -> Range<f64> {
        axis_range(self.lines.iter().flatten().map(|&(_, y)| y))
    }

    /// Draw the figure and encode it as PNG at `path`
    pub fn render_png(&self, path: &Path) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ReportError::Plot(format!(
                "canvas must not be empty ({}x{})",
                self.width, self.height
            )));
        }

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60);
        if !self.title.is_empty() {
            builder.caption(&self.title, ("sans-serif", 22).into_font());
        }

        let mut chart = builder
            .build_cartesian_2d(self.x_range(), self.y_range())
            .map_err(plot_error)?;

        let mut mesh = chart.configure_mesh();
        if !self.x_label.is_empty() {
            mesh.x_desc(self.x_label.as_str());
        }
        if !self.y_label.is_empty() {
            mesh.y_desc(self.y_label.as_str());
        }
        mesh.draw().map_err(plot_error)?;

        for (idx, points) in self.lines.iter().enumerate() {
            let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
            chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
                .map_err(plot_error)?;
        }

        root.present().map_err(plot_error)?;
        Ok(())
    }
}

fn plot_error<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Plot(err.to_string())
}

/// Axis bounds covering `values` with a small margin.
///
/// No values gives `0..1`; a single distinct value is widened by 0.5 each side.
/// The bounds and their width always stay finite, even for data spanning
/// most of the `f64` range.
fn axis_range<I: Iterator<Item = f64>>(values: I) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if min > max {
        return 0.0..1.0;
    }

    // Halves first: `max - min` overflows for spans wider than f64::MAX.
    let center = min / 2.0 + max / 2.0;
    let half_span = max / 2.0 - min / 2.0;

    let half = if half_span == 0.0 {
        0.5
    } else {
        half_span * (1.0 + 2.0 * AXIS_MARGIN)
    };
    let half = half
        .max(center.abs() * MIN_RELATIVE_HALF_WIDTH)
        .min(f64::MAX / 2.0);

    (center - half).max(f64::MIN)..(center + half).min(f64::MAX)
}

/// Plot `y` against `x` and save it as `<run dir>/<sanitized title>.png`.
///
/// Returns the path of the written image.
pub fn plot_line_graph(
    config: &OutputConfig,
    x: &[f64],
    y: &[f64],
    xlabel: &str,
    ylabel: &str,
    plot_title: &str,
    timestamp: &NaiveDateTime,
) -> Result<PathBuf> {
    let mut figure = Figure::new(config.plot_width, config.plot_height)
        .title(plot_title)
        .x_label(xlabel)
        .y_label(ylabel);
    figure.add_line(x, y)?;

    let output_dir = ensure_run_dir(&config.results_root, timestamp)?;
    let path = output_dir.join(plot_file_name(plot_title));
    figure.render_png(&path)?;

    log::info!("📈 Plot '{}' saved to {}", plot_title, path.display());
    Ok(path)
}
