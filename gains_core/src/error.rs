//! Error types for the gains_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for gains_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input file could not be opened or read
    #[error("Unable to open file \"{}\": {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Header row lacks a required column
    #[error("File \"{}\" has no \"{column}\" column", .path.display())]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
    },

    /// A field of a data row could not be coerced to its type
    #[error("Malformed record on line {line}: invalid {field} \"{value}\"")]
    MalformedRecord {
        line: u64,
        field: &'static str,
        value: String,
    },

    /// No data for the requested exercise
    #[error("Unable to find data for exercise \"{exercise}\"")]
    NotFound { exercise: String },

    /// Metric is undefined for the given inputs
    #[error("{metric} is undefined for {weight} x {reps} reps")]
    Domain {
        metric: &'static str,
        weight: f64,
        reps: u32,
    },

    /// Trend fitting was asked to fit nothing
    #[error("Cannot fit a trend line to an empty series")]
    EmptySeries,

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chart rendering error
    #[error("Chart error: {0}")]
    Chart(String),
}
