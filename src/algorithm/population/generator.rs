//! Sequential population generation
//!
//! Each individual is drawn by the attribute sampler and then passed through
//! the eligibility engine, all from a single random source owned by the run.

use std::borrow::Cow;
use std::iter::FusedIterator;

use chrono::NaiveDate;
use rand_chacha::ChaCha8Rng;

use super::config::{PopulationConfig, default_reference_date};
use crate::algorithm::eligibility::EligibilityEngine;
use crate::algorithm::random::{RandomSource, seeded};
use crate::algorithm::sampler::AttributeSampler;
use crate::error::{Result, SynthError};
use crate::models::Individual;

/// Convert a requested population size, rejecting negative counts
pub fn checked_count(n: i64) -> Result<usize> {
    usize::try_from(n).map_err(|_| SynthError::InvalidCount(n))
}

/// Generates individuals from the attribute tables and the benefit rules
#[derive(Debug, Clone)]
pub struct PopulationGenerator {
    sampler: AttributeSampler,
    engine: EligibilityEngine,
}

impl PopulationGenerator {
    /// Generator with the standard rule table
    pub fn new(reference_date: NaiveDate) -> Result<Self> {
        Self::with_engine(reference_date, EligibilityEngine::standard())
    }

    /// Generator with a custom rule table
    pub fn with_engine(reference_date: NaiveDate, engine: EligibilityEngine) -> Result<Self> {
        Ok(Self {
            sampler: AttributeSampler::new(reference_date)?,
            engine,
        })
    }

    /// Generator for a configured run
    pub fn from_config(config: &PopulationConfig) -> Result<Self> {
        Self::new(config.reference_date)
    }

    /// Attribute sampler in use
    #[must_use]
    pub const fn sampler(&self) -> &AttributeSampler {
        &self.sampler
    }

    /// Eligibility engine in use
    #[must_use]
    pub const fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    /// Draw one complete individual
    pub fn individual<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Individual {
        let attributes = self.sampler.sample(rng);
        let grants = self.engine.evaluate(&attributes.profile, rng);
        Individual::new(
            attributes.id,
            attributes.identity,
            attributes.birth_date,
            attributes.residence,
            attributes.profile,
            grants,
        )
    }

    /// Lazily generate `n` individuals from `seed`
    pub fn generate(&self, n: i64, seed: u64) -> Result<PopulationIter<'_, ChaCha8Rng>> {
        let remaining = checked_count(n)?;
        Ok(PopulationIter::new(Cow::Borrowed(self), seeded(seed), remaining))
    }

    /// Lazily generate `n` individuals from any random source
    pub fn generate_with<R: RandomSource>(&self, n: i64, source: R) -> Result<PopulationIter<'_, R>> {
        let remaining = checked_count(n)?;
        Ok(PopulationIter::new(Cow::Borrowed(self), source, remaining))
    }

    /// Owned variant of [`Self::generate`]
    pub fn into_generate(self, n: i64, seed: u64) -> Result<PopulationIter<'static, ChaCha8Rng>> {
        let remaining = checked_count(n)?;
        Ok(PopulationIter::new(Cow::Owned(self), seeded(seed), remaining))
    }
}

/// Generate `n` individuals from `seed` with the default reference date
///
/// Fails with `InvalidCount` for negative `n` before anything is sampled.
pub fn generate(n: i64, seed: u64) -> Result<PopulationIter<'static, ChaCha8Rng>> {
    checked_count(n)?;
    PopulationGenerator::new(default_reference_date())?.into_generate(n, seed)
}

/// Generate `n` individuals from any random source with the default reference date
pub fn generate_with<R: RandomSource>(n: i64, source: R) -> Result<PopulationIter<'static, R>> {
    let remaining = checked_count(n)?;
    let generator = PopulationGenerator::new(default_reference_date())?;
    Ok(PopulationIter::new(Cow::Owned(generator), source, remaining))
}

/// Finite, non-restartable sequence of generated individuals
#[derive(Debug)]
pub struct PopulationIter<'a, R> {
    generator: Cow<'a, PopulationGenerator>,
    rng: R,
    remaining: usize,
}

impl<'a, R: RandomSource> PopulationIter<'a, R> {
    const fn new(generator: Cow<'a, PopulationGenerator>, rng: R, remaining: usize) -> Self {
        Self {
            generator,
            rng,
            remaining,
        }
    }

    /// Individuals still to be generated
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<R: RandomSource> Iterator for PopulationIter<'_, R> {
    type Item = Individual;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.individual(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: RandomSource> ExactSizeIterator for PopulationIter<'_, R> {}

impl<R: RandomSource> FusedIterator for PopulationIter<'_, R> {}
