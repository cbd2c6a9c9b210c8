//! Parallel population generation
//!
//! The population is split into fixed-size chunks in index order. Chunk `k`
//! draws from its own generator, seeded with the run seed on stream `k`, so
//! the output depends only on `(n, seed, chunk_size)` and never on the
//! number of worker threads.

use indicatif::ProgressBar;
use log::{debug, info};
use rayon::prelude::*;

use super::generator::{PopulationGenerator, checked_count};
use crate::algorithm::random::seeded_stream;
use crate::error::{Result, SynthError};
use crate::models::Individual;

/// Bounds `[start, end)` of every chunk, in index order
#[must_use]
pub fn chunk_bounds(n: usize, chunk_size: usize) -> Vec<(usize, usize)> {
    if chunk_size == 0 {
        return Vec::new();
    }
    (0..n)
        .step_by(chunk_size)
        .map(|start| (start, (start + chunk_size).min(n)))
        .collect()
}

/// Generate one chunk on its own stream
pub fn generate_chunk(
    generator: &PopulationGenerator,
    seed: u64,
    chunk_index: usize,
    len: usize,
) -> Vec<Individual> {
    let mut rng = seeded_stream(seed, chunk_index as u64);
    (0..len).map(|_| generator.individual(&mut rng)).collect()
}

/// Generate `n` individuals in parallel chunks
///
/// Chunks are collected back in index order. An optional progress bar is
/// advanced by the size of each finished chunk.
pub fn generate_parallel(
    generator: &PopulationGenerator,
    n: i64,
    seed: u64,
    chunk_size: usize,
    progress: Option<&ProgressBar>,
) -> Result<Vec<Individual>> {
    let total = checked_count(n)?;
    if chunk_size == 0 {
        return Err(SynthError::config("chunk_size must be greater than zero"));
    }

    let bounds = chunk_bounds(total, chunk_size);
    info!(
        "Generating {total} individuals in {} chunks on {} threads",
        bounds.len(),
        rayon::current_num_threads()
    );

    let chunks: Vec<Vec<Individual>> = bounds
        .par_iter()
        .enumerate()
        .map(|(index, (start, end))| {
            let chunk = generate_chunk(generator, seed, index, end - start);
            debug!("Chunk {index} ({start}..{end}) done");
            if let Some(pb) = progress {
                pb.inc(chunk.len() as u64);
            }
            chunk
        })
        .collect();

    let mut population = Vec::with_capacity(total);
    for chunk in chunks {
        population.extend(chunk);
    }
    Ok(population)
}
