#![forbid(unsafe_code)]

//! Core analysis logic for gains-graph.
//!
//! This crate provides:
//! - Record parsing for Strong-style CSV exports
//! - Metric derivation (1RM, weight, set volume)
//! - Exercise filtering and listing
//! - Least-squares trend fitting
//! - SVG chart rendering

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod records;
pub mod metric;
pub mod aggregate;
pub mod trend;
pub mod chart;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use records::{read_rows, RawRow};
pub use aggregate::{filter_series, list_distinct};
pub use trend::{fit, fit_points, TrendLine};
pub use chart::render_svg;
