//! SVG chart rendering: logged sets as a scatter with the trend overlaid.

use crate::config::ChartConfig;
use crate::trend::{epoch_seconds, TrendLine};
use crate::{DataSeries, Error, Result};
use chrono::DateTime;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

const POINT_COLOR: RGBColor = RGBColor(31, 119, 180);
const PAD_FRACTION: f64 = 0.05;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Render `series` and its trend line to an SVG file at `path`
///
/// The trend is evaluated at each of the series' own timestamps.
pub fn render_svg(
    series: &DataSeries,
    trend: &TrendLine,
    path: &Path,
    config: &ChartConfig,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    draw_chart(&root, series, trend)?;
    root.present().map_err(chart_error)?;

    tracing::info!("Rendered {} points to {:?}", series.len(), path);
    Ok(())
}

fn draw_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    series: &DataSeries,
    trend: &TrendLine,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(chart_error)?;

    let observed: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|p| (epoch_seconds(p.timestamp), p.value))
        .collect();
    let mut fitted: Vec<(f64, f64)> = observed
        .iter()
        .map(|&(t, _)| (t, trend.predict(t)))
        .collect();
    fitted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let x_range = padded_range(observed.iter().map(|p| p.0), SECONDS_PER_DAY);
    let y_range = padded_range(observed.iter().chain(&fitted).map(|p| p.1), 1.0);

    let mut chart = ChartBuilder::on(root)
        .caption(&series.exercise, ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(series.metric.label())
        .x_label_formatter(&format_date)
        .y_label_formatter(&|v| format!("{:.0}", v))
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(
            observed
                .iter()
                .map(|&point| Circle::new(point, 4, POINT_COLOR.filled())),
        )
        .map_err(chart_error)?
        .label(series.metric.label())
        .legend(|(x, y)| Circle::new((x, y), 4, POINT_COLOR.filled()));

    chart
        .draw_series(LineSeries::new(fitted, RED.stroke_width(2)))
        .map_err(chart_error)?
        .label("Trend")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(chart_error)?;

    Ok(())
}

/// Min..max of `values` widened a little, or by `fallback` when flat
fn padded_range(values: impl Iterator<Item = f64>, fallback: f64) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    let pad = if span > 0.0 { span * PAD_FRACTION } else { fallback };
    (min - pad)..(max + pad)
}

fn format_date(t: &f64) -> String {
    DateTime::from_timestamp(*t as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn chart_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Chart(err.to_string())
}
