//! Linear trend fitting over irregularly spaced timestamps.
//!
//! Timestamps are mapped to seconds since the Unix epoch (read as UTC wall
//! clock) and a straight line is fitted by ordinary least squares.

use crate::{DataSeries, Error, Result};
use chrono::NaiveDateTime;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Fitted line `value = slope * t + intercept`, with `t` in epoch seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn predict(&self, t: f64) -> f64 {
        self.slope * t + self.intercept
    }

    /// Change in value per day
    pub fn slope_per_day(&self) -> f64 {
        self.slope * SECONDS_PER_DAY
    }
}

/// Position of a timestamp on the numeric time axis
pub fn epoch_seconds(timestamp: NaiveDateTime) -> f64 {
    timestamp.and_utc().timestamp() as f64
}

/// Fit a trend line to a metric series
pub fn fit(series: &DataSeries) -> Result<TrendLine> {
    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|p| (epoch_seconds(p.timestamp), p.value))
        .collect();
    let line = fit_points(&points)?;

    tracing::debug!(
        "Fitted {} points of {:?}: slope {:.6}/s, intercept {:.3}",
        points.len(),
        series.exercise,
        line.slope,
        line.intercept
    );
    Ok(line)
}

/// Least-squares line through `(t, value)` pairs
///
/// With a single point, or when every `t` is the same, the slope is zero and
/// the line runs horizontally through the mean value.
pub fn fit_points(points: &[(f64, f64)]) -> Result<TrendLine> {
    let (first_t, _) = *points.first().ok_or(Error::EmptySeries)?;
    let n = points.len() as f64;

    let mean_t = points.iter().map(|(t, _)| t).sum::<f64>() / n;
    let mean_v = points.iter().map(|(_, v)| v).sum::<f64>() / n;

    if points.iter().all(|(t, _)| *t == first_t) {
        return Ok(TrendLine {
            slope: 0.0,
            intercept: mean_v,
        });
    }

    // Centred sums keep precision with epoch-sized t values
    let (sxx, sxy) = points.iter().fold((0.0, 0.0), |(sxx, sxy), (t, v)| {
        let dt = t - mean_t;
        (sxx + dt * dt, sxy + dt * (v - mean_v))
    });

    let slope = sxy / sxx;
    Ok(TrendLine {
        slope,
        intercept: mean_v - slope * mean_t,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataPoint, MetricKind};
    use chrono::DateTime;

    fn at(seconds: i64) -> NaiveDateTime {
        DateTime::from_timestamp(seconds, 0).unwrap().naive_utc()
    }

    fn series(points: &[(i64, f64)]) -> DataSeries {
        DataSeries {
            exercise: "Squat".into(),
            metric: MetricKind::RawWeight,
            points: points
                .iter()
                .map(|&(t, value)| DataPoint {
                    timestamp: at(t),
                    value,
                })
                .collect(),
            excluded: 0,
        }
    }

    #[test]
    fn test_exact_line() {
        let line = fit(&series(&[(0, 10.0), (1, 20.0), (2, 30.0)])).unwrap();
        assert!((line.slope - 10.0).abs() < 1e-9);
        assert!((line.intercept - 10.0).abs() < 1e-9);
        for (t, v) in [(0.0, 10.0), (1.0, 20.0), (2.0, 30.0)] {
            assert!((line.predict(t) - v).abs() < 1e-6);
        }
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = fit_points(&[(0.0, 1.0), (3.0, 4.0), (7.0, 2.0), (9.0, 8.0)]).unwrap();
        let b = fit_points(&[(9.0, 8.0), (0.0, 1.0), (7.0, 2.0), (3.0, 4.0)]).unwrap();
        assert!((a.slope - b.slope).abs() < 1e-12);
        assert!((a.intercept - b.intercept).abs() < 1e-9);
    }

    #[test]
    fn test_noisy_data_least_squares() {
        let line = fit_points(&[(0.0, 2.0), (1.0, 2.0), (2.0, 6.0), (3.0, 6.0)]).unwrap();
        assert!((line.slope - 1.6).abs() < 1e-9);
        assert!((line.intercept - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_is_horizontal() {
        let line = fit(&series(&[(1_700_000_000, 120.0)])).unwrap();
        assert_eq!(line.slope, 0.0);
        assert!((line.predict(1_700_000_000.0) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_identical_timestamps_use_mean() {
        let line = fit(&series(&[(1_700_000_000, 100.0), (1_700_000_000, 110.0)])).unwrap();
        assert_eq!(line.slope, 0.0);
        assert!((line.intercept - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_timestamps_among_distinct() {
        let line = fit_points(&[(0.0, 0.0), (0.0, 2.0), (2.0, 3.0), (2.0, 5.0)]).unwrap();
        assert!((line.slope - 1.5).abs() < 1e-9);
        assert!((line.intercept - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_epoch_scale_timestamps() {
        // One unit per day over a realistic date range
        let start = 1_704_067_200; // 2024-01-01
        let day = 86_400;
        let points: Vec<(i64, f64)> = (0..30)
            .map(|i| (start + i * day, 100.0 + i as f64))
            .collect();

        let line = fit(&series(&points)).unwrap();
        assert!((line.slope_per_day() - 1.0).abs() < 1e-6);
        assert!((line.predict(start as f64) - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(fit_points(&[]), Err(Error::EmptySeries)));
    }
}
