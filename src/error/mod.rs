//! Error handling for the synthesis engine.

use std::io;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for population and time-series synthesis
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// Empty or degenerate weight table
    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),
    /// Negative population size, rejected before any sampling
    #[error("Invalid population count: {0}")]
    InvalidCount(i64),
    /// Benefit name outside the fixed benefit set
    #[error("Unknown benefit: {0}")]
    UnknownBenefit(String),
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
    /// Error opening or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Error building Arrow data or writing CSV
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
    /// Error writing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),
    /// Error converting records to Arrow arrays
    #[error("Record conversion error: {0}")]
    Record(#[from] serde_arrow::Error),
    /// Error parsing a JSON configuration file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SynthError {
    /// Create an `InvalidDistribution` error from any displayable message
    pub fn invalid_distribution(msg: impl Into<String>) -> Self {
        Self::InvalidDistribution(msg.into())
    }

    /// Create a `Config` error from any displayable message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error signals a programming error rather than bad input
    #[must_use]
    pub const fn is_programming_error(&self) -> bool {
        matches!(self, Self::UnknownBenefit(_))
    }
}

/// Result type for synthesis operations
pub type Result<T> = std::result::Result<T, SynthError>;
