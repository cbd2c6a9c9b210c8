//! Wind series configuration

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::algorithm::population::DEFAULT_SEED;
use crate::error::{Result, SynthError};

/// Minutes between two samples by default
pub const DEFAULT_STEP_MINUTES: u32 = 10;

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap_or_default()
}

/// Configuration for the wind turbine time series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    /// Seed of the series' own random source
    pub seed: u64,
    /// First timestamp
    pub start: NaiveDateTime,
    /// Last timestamp, inclusive
    pub end: NaiveDateTime,
    /// Minutes between samples
    pub step_minutes: u32,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            start: datetime(2015, 1, 1, 0, 0),
            end: datetime(2024, 12, 31, 23, 50),
            step_minutes: DEFAULT_STEP_MINUTES,
        }
    }
}

impl WindConfig {
    /// Check the time range and step
    pub fn validate(&self) -> Result<()> {
        if self.step_minutes == 0 {
            return Err(SynthError::config("step_minutes must be greater than zero"));
        }
        if self.end < self.start {
            return Err(SynthError::config(format!(
                "series end {} is before start {}",
                self.end, self.start
            )));
        }
        Ok(())
    }

    /// Number of samples in the series
    #[must_use]
    pub fn sample_count(&self) -> usize {
        if self.step_minutes == 0 || self.end < self.start {
            return 0;
        }
        let minutes = (self.end - self.start).num_minutes();
        usize::try_from(minutes / i64::from(self.step_minutes) + 1).unwrap_or(0)
    }
}

impl fmt::Display for WindConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wind Series Configuration:")?;
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(f, "  Start: {}", self.start)?;
        writeln!(f, "  End: {}", self.end)?;
        writeln!(f, "  Step: {} min", self.step_minutes)?;
        Ok(())
    }
}
