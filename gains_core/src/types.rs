//! Core domain types for gains-graph.
//!
//! This module defines the values that flow through the pipeline:
//! - Logged sets (records)
//! - Metric kinds
//! - Metric series for a single exercise

use chrono::NaiveDateTime;

// ============================================================================
// Record Types
// ============================================================================

/// A single logged set with typed fields
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub exercise_name: String,
    pub timestamp: NaiveDateTime,
    pub weight: f64,
    pub reps: u32,
}

// ============================================================================
// Metric Types
// ============================================================================

/// Metric derived from a set's weight and reps
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MetricKind {
    /// Estimated one-repetition maximum (Brzycki)
    #[default]
    OneRepMax,
    /// Weight lifted, reps ignored
    RawWeight,
    /// Weight times reps
    SetVolume,
}

impl MetricKind {
    /// All supported metrics, in CLI listing order
    pub const ALL: [MetricKind; 3] = [
        MetricKind::OneRepMax,
        MetricKind::RawWeight,
        MetricKind::SetVolume,
    ];

    /// Identifier accepted on the command line
    pub fn key(self) -> &'static str {
        match self {
            MetricKind::OneRepMax => "1rm",
            MetricKind::RawWeight => "weight",
            MetricKind::SetVolume => "volume",
        }
    }

    /// Human-readable label used on chart axes
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::OneRepMax => "1RM",
            MetricKind::RawWeight => "Weight",
            MetricKind::SetVolume => "Set Volume",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Series Types
// ============================================================================

/// One metric value at one point in time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

/// Metric values for a single exercise
#[derive(Clone, Debug)]
pub struct DataSeries {
    pub exercise: String,
    pub metric: MetricKind,
    pub points: Vec<DataPoint>,
    /// Matching sets left out because the metric is undefined for them
    pub excluded: usize,
}

impl DataSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
