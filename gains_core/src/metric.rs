//! Metric derivation from a set's weight and reps.

use crate::{Error, MetricKind, Result};
use std::str::FromStr;

/// Rep count at which the Brzycki denominator vanishes
const BRZYCKI_REP_LIMIT: u32 = 37;

impl MetricKind {
    /// Compute this metric for one set
    ///
    /// Fails with [`Error::Domain`] when the metric has no finite value,
    /// which only happens for 1RM at exactly 37 reps.
    pub fn compute(self, weight: f64, reps: u32) -> Result<f64> {
        match self {
            MetricKind::RawWeight => Ok(weight),
            MetricKind::SetVolume => Ok(weight * f64::from(reps)),
            MetricKind::OneRepMax => brzycki(weight, reps),
        }
    }
}

/// Brzycki estimate: weight * 36 / (37 - reps)
fn brzycki(weight: f64, reps: u32) -> Result<f64> {
    if reps == BRZYCKI_REP_LIMIT {
        return Err(Error::Domain {
            metric: MetricKind::OneRepMax.label(),
            weight,
            reps,
        });
    }
    let denominator = f64::from(BRZYCKI_REP_LIMIT) - f64::from(reps);
    Ok(weight * (36.0 / denominator))
}

impl FromStr for MetricKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MetricKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| {
                let keys: Vec<&str> = MetricKind::ALL.iter().map(|k| k.key()).collect();
                Error::Config(format!(
                    "Unknown metric \"{}\" (expected one of: {})",
                    s,
                    keys.join(", ")
                ))
            })
    }
}
