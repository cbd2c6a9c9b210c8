//! Population configuration
//!
//! This module defines the options controlling a population generation run.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SynthError};
use crate::utils::DEFAULT_BATCH_SIZE;

/// Number of individuals generated by default
pub const DEFAULT_POPULATION_SIZE: i64 = 2_184_973;

/// Seed used when none is given
pub const DEFAULT_SEED: u64 = 42;

/// Reference date ages are computed against by default (2025-01-01)
#[must_use]
pub fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// Configuration for population generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Number of individuals to generate
    pub size: i64,
    /// Seed of the run's random source
    pub seed: u64,
    /// Date at which ages are computed
    pub reference_date: NaiveDate,
    /// Generate chunks in parallel
    pub parallel: bool,
    /// Individuals per chunk in parallel mode
    pub chunk_size: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_POPULATION_SIZE,
            seed: DEFAULT_SEED,
            reference_date: default_reference_date(),
            parallel: false,
            chunk_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl PopulationConfig {
    /// Check the configuration before any sampling happens
    pub fn validate(&self) -> Result<()> {
        if self.size < 0 {
            return Err(SynthError::InvalidCount(self.size));
        }
        if self.chunk_size == 0 {
            return Err(SynthError::config("chunk_size must be greater than zero"));
        }
        Ok(())
    }
}

impl fmt::Display for PopulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Population Configuration:")?;
        writeln!(f, "  Size: {}", self.size)?;
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(f, "  Reference Date: {}", self.reference_date)?;
        writeln!(f, "  Parallel: {}", self.parallel)?;
        if self.parallel {
            writeln!(f, "  Chunk Size: {}", self.chunk_size)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PopulationConfig::default();
        assert_eq!(config.size, 2_184_973);
        assert_eq!(config.seed, 42);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert!(!config.parallel);
        assert_eq!(config.chunk_size, 16_384);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let config = PopulationConfig {
            size: -3,
            ..PopulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(SynthError::InvalidCount(-3))));

        let config = PopulationConfig {
            chunk_size: 0,
            ..PopulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(SynthError::Config(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PopulationConfig = serde_json::from_str(r#"{"size": 10}"#).unwrap();
        assert_eq!(config.size, 10);
        assert_eq!(config.seed, DEFAULT_SEED);
    }
}
