//! Weighted categorical distributions
//!
//! A [`DistributionTable`] maps categories to non-negative weights and draws
//! one category per uniform draw, with probability proportional to its weight.
//! Weights need not sum to one.

use std::fmt;

use crate::algorithm::random::RandomSource;
use crate::error::{Result, SynthError};

/// Named categorical distribution
#[derive(Debug, Clone)]
pub struct DistributionTable<T> {
    name: String,
    categories: Vec<T>,
    weights: Vec<f64>,
    cumulative: Vec<f64>,
    total: f64,
}

impl<T> DistributionTable<T> {
    /// Build a table from (category, weight) pairs
    ///
    /// Fails with `InvalidDistribution` when the table is empty, when a
    /// weight is negative or not finite, or when all weights are zero.
    pub fn new(name: impl Into<String>, entries: impl IntoIterator<Item = (T, f64)>) -> Result<Self> {
        let name = name.into();
        let (categories, weights): (Vec<T>, Vec<f64>) = entries.into_iter().unzip();

        if categories.is_empty() {
            return Err(SynthError::invalid_distribution(format!(
                "table '{name}' is empty"
            )));
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(SynthError::invalid_distribution(format!(
                "table '{name}' has invalid weight {w}"
            )));
        }

        let cumulative: Vec<f64> = weights
            .iter()
            .scan(0.0, |acc, w| {
                *acc += w;
                Some(*acc)
            })
            .collect();
        let total = cumulative.last().copied().unwrap_or(0.0);
        if total <= 0.0 {
            return Err(SynthError::invalid_distribution(format!(
                "table '{name}' has zero total weight"
            )));
        }

        Ok(Self {
            name,
            categories,
            weights,
            cumulative,
            total,
        })
    }

    /// Draw one category
    ///
    /// Consumes exactly one uniform draw `u` and returns the first category
    /// whose cumulative weight exceeds `u * total`.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &T {
        let target = rng.uniform() * self.total;
        let idx = self.cumulative.partition_point(|c| *c <= target);
        &self.categories[idx.min(self.categories.len() - 1)]
    }

    /// Table name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false; empty tables cannot be built
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Sum of all weights
    #[must_use]
    pub const fn total_weight(&self) -> f64 {
        self.total
    }

    /// Iterate over (category, weight) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.categories.iter().zip(self.weights.iter().copied())
    }
}

impl<T: PartialEq> DistributionTable<T> {
    /// Normalized probability of a category, zero when absent
    #[must_use]
    pub fn probability(&self, category: &T) -> f64 {
        self.iter()
            .filter(|(c, _)| *c == category)
            .map(|(_, w)| w)
            .sum::<f64>()
            / self.total
    }
}

impl<T: fmt::Display> fmt::Display for DistributionTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name)?;
        for (i, (category, weight)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{category}: {weight}")?;
        }
        write!(f, "}}")
    }
}
