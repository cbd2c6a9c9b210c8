//! Random sources for reproducible generation
//!
//! Every generation run owns its random source. Any seeded `rand` generator
//! can be used directly; [`ReplaySource`] replays a recorded list of uniform
//! draws so that individual decisions can be pinned down in tests.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, SynthError};

/// Source of the uniform draws consumed by the samplers
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn uniform(&mut self) -> f64;

    /// Uniform integer in `[low, high]`; returns `low` when `high < low`
    fn uniform_int(&mut self, low: i64, high: i64) -> i64;

    /// 64 random bits
    fn bits(&mut self) -> u64;

    /// Uniform index in `[0, len)`; `len` must be non-zero
    fn index(&mut self, len: usize) -> usize {
        let high = i64::try_from(len.saturating_sub(1)).unwrap_or(i64::MAX);
        usize::try_from(self.uniform_int(0, high)).unwrap_or(0)
    }
}

impl<R: RngCore> RandomSource for R {
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.random_range(low..=high)
    }

    fn bits(&mut self) -> u64 {
        self.next_u64()
    }
}

/// Seeded generator used for every run
#[must_use]
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Seeded generator for one independent stream of a run
///
/// Streams of the same seed never overlap, which lets parallel workers
/// draw independently while the whole run stays reproducible.
#[must_use]
pub fn seeded_stream(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

/// Replays a fixed list of uniform draws, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ReplaySource {
    draws: Vec<f64>,
    position: usize,
}

impl ReplaySource {
    /// Create a replay source; every draw must lie in `[0, 1)`
    pub fn new(draws: impl Into<Vec<f64>>) -> Result<Self> {
        let draws = draws.into();
        if draws.is_empty() {
            return Err(SynthError::invalid_distribution(
                "replay source needs at least one draw",
            ));
        }
        if let Some(bad) = draws.iter().find(|u| !(0.0..1.0).contains(*u)) {
            return Err(SynthError::invalid_distribution(format!(
                "replayed draw {bad} is outside [0, 1)"
            )));
        }
        Ok(Self { draws, position: 0 })
    }

    /// Number of draws consumed so far
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.position
    }

    fn next_draw(&mut self) -> f64 {
        let u = self.draws[self.position % self.draws.len()];
        self.position += 1;
        u
    }
}

impl RandomSource for ReplaySource {
    fn uniform(&mut self) -> f64 {
        self.next_draw()
    }

    fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        let u = self.next_draw();
        if high <= low {
            return low;
        }
        let span = (high - low + 1) as f64;
        (low + (u * span).floor() as i64).min(high)
    }

    fn bits(&mut self) -> u64 {
        // 2^64 as f64; the cast saturates at u64::MAX
        (self.next_draw() * 18_446_744_073_709_551_616.0) as u64
    }
}
