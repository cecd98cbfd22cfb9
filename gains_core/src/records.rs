//! Record parsing for Strong-style CSV exports.
//!
//! Rows are read with their fields left as strings. Coercion into a typed
//! [`Record`] happens through `TryFrom<RawRow>` so that only the rows a
//! caller actually needs are validated.

use crate::config::InputConfig;
use crate::{Error, Record, Result};
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Format of the "Date" column
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Columns every export must carry
pub const REQUIRED_COLUMNS: [&str; 4] = ["Exercise Name", "Date", "Weight", "Reps"];

/// CSV row format as exported; any other columns are ignored
#[derive(Clone, Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Exercise Name")]
    pub exercise_name: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Weight")]
    pub weight: String,
    #[serde(rename = "Reps")]
    pub reps: String,
    /// Line in the source file, for diagnostics
    #[serde(skip)]
    pub line: u64,
}

impl TryFrom<RawRow> for Record {
    type Error = Error;

    fn try_from(row: RawRow) -> Result<Self> {
        let timestamp = parse_timestamp(&row.date, row.line)?;

        let weight = row
            .weight
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or_else(|| malformed(row.line, "Weight", &row.weight))?;

        let reps = row
            .reps
            .parse::<u32>()
            .map_err(|_| malformed(row.line, "Reps", &row.reps))?;

        Ok(Record {
            exercise_name: row.exercise_name,
            timestamp,
            weight,
            reps,
        })
    }
}

/// Parse a "Date" value using [`DATE_FORMAT`]
pub fn parse_timestamp(value: &str, line: u64) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT).map_err(|_| malformed(line, "Date", value))
}

fn malformed(line: u64, field: &'static str, value: &str) -> Error {
    Error::MalformedRecord {
        line,
        field,
        value: value.to_string(),
    }
}

/// Read every data row of an export, in file order
///
/// Fails with [`Error::FileAccess`] if the file cannot be opened or read and
/// with [`Error::MissingColumn`] if the header lacks a required column.
pub fn read_rows(path: &Path, config: &InputConfig) -> Result<Vec<RawRow>> {
    let file = File::open(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(config.delimiter_byte()?)
        .trim(Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| read_error(path, e))?
        .clone();
    check_headers(path, &headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| read_error(path, e))?;
        let mut row: RawRow = record.deserialize(Some(&headers))?;
        row.line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(row);
    }

    tracing::debug!("Read {} rows from {:?}", rows.len(), path);
    Ok(rows)
}

fn check_headers(path: &Path, headers: &StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }
    Ok(())
}

/// IO failures mid-read are file access problems, everything else is CSV
fn read_error(path: &Path, err: csv::Error) -> Error {
    if err.is_io_error() {
        Error::FileAccess {
            path: path.to_path_buf(),
            source: err.into(),
        }
    } else {
        Error::Csv(err)
    }
}
