//! SVG chart renderer backed by `plotters`.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::FontTransform;

use crate::models::chart::ChartKind;
use crate::models::series::FilteredSeries;
use crate::models::symbol::Symbol;
use crate::render::{ChartRenderer, RenderError};

/// Default artifact location, overwritten on every render.
pub const DEFAULT_OUTPUT_PATH: &str = "static/stock_price_chart.svg";

/// Upper bound on major x-axis labels, independent of series length.
const MAX_X_LABELS: usize = 10;

/// Renders line and bar charts to a fixed SVG file.
///
/// The output path is injected at construction rather than read from any
/// process-wide state. Concurrent renders race last-write-wins on the file,
/// which callers accept by contract.
pub struct SvgChartRenderer {
    output_path: PathBuf,
    size: (u32, u32),
}

impl SvgChartRenderer {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            size: (1024, 600),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Default for SvgChartRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

impl ChartRenderer for SvgChartRenderer {
    type Output = PathBuf;

    fn render(
        &self,
        kind: ChartKind,
        series: &FilteredSeries,
        symbol: &Symbol,
    ) -> Result<PathBuf, RenderError> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let len = series.len();
        let (y_min, y_max) = axis_bounds(kind, series);
        let x_max = if len == 0 { 0.5 } else { len as f64 - 0.5 };
        let labels: Vec<String> = series
            .timestamps
            .iter()
            .map(|ts| display_label(ts).to_string())
            .collect();
        let label_formatter = |x: &f64| -> String {
            let index = x.round();
            if index < 0.0 {
                return String::new();
            }
            labels.get(index as usize).cloned().unwrap_or_default()
        };

        let root = SVGBackend::new(&self.output_path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(to_backend_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(format!("Stock Price for {symbol}"), ("sans-serif", 30))
            .margin(16)
            .x_label_area_size(90)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5f64..x_max, y_min..y_max)
            .map_err(to_backend_error)?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc("Price")
            .x_labels(MAX_X_LABELS)
            .x_label_formatter(&label_formatter)
            .x_label_style(
                ("sans-serif", 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .draw()
            .map_err(to_backend_error)?;

        match kind {
            ChartKind::Line => draw_line_chart(&mut chart, series)?,
            ChartKind::Bar => draw_bar_chart(&mut chart, series, BAR_BASELINE)?,
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(to_backend_error)?;

        root.present().map_err(to_backend_error)?;
        Ok(self.output_path.clone())
    }
}

/// Label, color, and values for each of the four plotted series.
fn series_entries(series: &FilteredSeries) -> [(&'static str, RGBColor, &Vec<f64>); 4] {
    [
        ("Open", BLUE, &series.opens),
        ("High", GREEN, &series.highs),
        ("Low", RED, &series.lows),
        ("Close", MAGENTA, &series.closes),
    ]
}

fn draw_line_chart<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    series: &FilteredSeries,
) -> Result<(), RenderError> {
    for (label, color, values) in series_entries(series) {
        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(i, v)| (i as f64, *v)),
                color.stroke_width(2),
            ))
            .map_err(to_backend_error)?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }
    Ok(())
}

fn draw_bar_chart<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    series: &FilteredSeries,
    baseline: f64,
) -> Result<(), RenderError> {
    let group_width = 0.8;
    let bar_width = group_width / 4.0;

    for (slot, (label, color, values)) in series_entries(series).into_iter().enumerate() {
        chart
            .draw_series(values.iter().enumerate().map(|(i, v)| {
                let x0 = i as f64 - group_width / 2.0 + slot as f64 * bar_width;
                Rectangle::new([(x0, baseline), (x0 + bar_width, *v)], color.filled())
            }))
            .map_err(to_backend_error)?
            .label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }
    Ok(())
}

/// Bars grow from zero so their heights stay proportional to price.
const BAR_BASELINE: f64 = 0.0;

fn to_backend_error(error: impl std::fmt::Display) -> RenderError {
    RenderError::Backend(error.to_string())
}

/// Date-only timestamps pass through; intraday `YYYY-MM-DD HH:MM:SS`
/// timestamps are truncated to minute precision. Timestamps where byte 16
/// is not a char boundary pass through whole rather than panicking.
fn display_label(timestamp: &str) -> &str {
    if timestamp.len() >= 16 && timestamp.as_bytes()[10] == b' ' {
        timestamp.get(..16).unwrap_or(timestamp)
    } else {
        timestamp
    }
}

/// Y-axis bounds for the chart; bar charts are anchored at the zero
/// baseline, so the axis must reach down to it.
fn axis_bounds(kind: ChartKind, series: &FilteredSeries) -> (f64, f64) {
    let (y_min, y_max) = padded_bounds(series).unwrap_or((0.0, 1.0));
    match kind {
        ChartKind::Line => (y_min, y_max),
        ChartKind::Bar => (y_min.min(BAR_BASELINE), y_max),
    }
}

/// Y-axis bounds with a margin so extremes never sit on the frame.
fn padded_bounds(series: &FilteredSeries) -> Option<(f64, f64)> {
    let (lo, hi) = series.price_bounds()?;
    let pad = ((hi - lo) * 0.05).max(0.5);
    Some((lo - pad, hi + pad))
}
