//! A Rust library for generating synthetic social-benefit recipient
//! populations and wind turbine time series.
//!
//! Every run owns its random source, so a seed fully determines the output.

pub mod algorithm;
pub mod config;
pub mod demographics;
pub mod error;
pub mod export;
pub mod models;
pub mod utils;
pub mod wind;

// Re-export the most common types for easier use
// Core types
pub use config::{OutputConfig, SimulationConfig};
pub use error::{Result, SynthError};
pub use models::{Benefit, BenefitGrants, Individual, IndividualRecord};

// Generation
pub use algorithm::distribution::DistributionTable;
pub use algorithm::eligibility::EligibilityEngine;
pub use algorithm::population::{
    PopulationConfig, PopulationGenerator, PopulationIter, PopulationStatistics, generate,
    generate_parallel, generate_with,
};
pub use algorithm::random::{RandomSource, ReplaySource, seeded, seeded_stream};
pub use algorithm::sampler::AttributeSampler;

// Output
pub use export::{ExportOptions, OutputFormat, write_rows};
pub use utils::DEFAULT_BATCH_SIZE;

// Wind series
pub use wind::{WindConfig, WindRecord, WindSample, WindSeries};
