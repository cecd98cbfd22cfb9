//! Exercise selection and listing.

use crate::records::RawRow;
use crate::{DataPoint, DataSeries, Error, MetricKind, Record, Result};
use std::collections::BTreeSet;

/// Build the metric series for one exercise
///
/// Only rows whose exercise name matches exactly (case-sensitive) are
/// coerced, so a malformed row for some other exercise never aborts the run.
/// A malformed matching row does.
///
/// Sets for which the metric is undefined are left out of the series and
/// counted in [`DataSeries::excluded`]. If every matching set was left out,
/// the first such error is returned instead of an empty series.
pub fn filter_series(rows: &[RawRow], exercise: &str, metric: MetricKind) -> Result<DataSeries> {
    let mut points = Vec::new();
    let mut excluded = 0;
    let mut first_domain_error = None;

    for row in rows.iter().filter(|r| r.exercise_name == exercise) {
        let record = Record::try_from(row.clone())?;

        match metric.compute(record.weight, record.reps) {
            Ok(value) => points.push(DataPoint {
                timestamp: record.timestamp,
                value,
            }),
            Err(err @ Error::Domain { .. }) => {
                tracing::warn!("Excluding set on line {}: {}", row.line, err);
                excluded += 1;
                if first_domain_error.is_none() {
                    first_domain_error = Some(err);
                }
            }
            Err(err) => return Err(err),
        }
    }

    if points.is_empty() {
        return Err(first_domain_error.unwrap_or_else(|| Error::NotFound {
            exercise: exercise.to_string(),
        }));
    }

    tracing::debug!(
        "Selected {} sets of {:?} ({} excluded)",
        points.len(),
        exercise,
        excluded
    );

    Ok(DataSeries {
        exercise: exercise.to_string(),
        metric,
        points,
        excluded,
    })
}

/// Distinct exercise names, sorted
pub fn list_distinct(rows: &[RawRow]) -> BTreeSet<String> {
    rows.iter().map(|r| r.exercise_name.clone()).collect()
}
