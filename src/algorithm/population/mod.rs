//! Population generation
//!
//! This module turns the attribute sampler and the eligibility engine into
//! finite populations, sequentially or in parallel chunks, and summarises
//! the result.

pub mod config;
pub mod generator;
pub mod parallel;
pub mod statistics;

// Re-export commonly used items
pub use config::{DEFAULT_POPULATION_SIZE, DEFAULT_SEED, PopulationConfig, default_reference_date};
pub use generator::{PopulationGenerator, PopulationIter, checked_count, generate, generate_with};
pub use parallel::{chunk_bounds, generate_chunk, generate_parallel};
pub use statistics::{PopulationStatistics, Tally};
