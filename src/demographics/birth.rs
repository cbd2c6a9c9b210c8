//! Birth date sampling and age derivation.

use chrono::{Days, Months, NaiveDate};

use crate::algorithm::random::RandomSource;
use crate::error::{Result, SynthError};

/// Youngest recipient age
pub const MIN_AGE: u32 = 18;
/// Oldest recipient age
pub const MAX_AGE: u32 = 90;

/// Draws birth dates uniformly among the dates that give an age in
/// `[min_age, max_age]` at the reference date.
#[derive(Debug, Clone, Copy)]
pub struct BirthDateSampler {
    reference_date: NaiveDate,
    earliest: NaiveDate,
    span_days: i64,
}

impl BirthDateSampler {
    /// Create a sampler for the given reference date and age range
    pub fn new(reference_date: NaiveDate, min_age: u32, max_age: u32) -> Result<Self> {
        if min_age > max_age {
            return Err(SynthError::config(format!(
                "minimum age {min_age} exceeds maximum age {max_age}"
            )));
        }
        let out_of_range = || {
            SynthError::config(format!(
                "reference date {reference_date} cannot cover ages {min_age}..={max_age}"
            ))
        };

        let latest = reference_date
            .checked_sub_months(Months::new(min_age * 12))
            .ok_or_else(out_of_range)?;
        // One day after the date on which the individual would turn max_age + 1
        let earliest = reference_date
            .checked_sub_months(Months::new((max_age + 1) * 12))
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .ok_or_else(out_of_range)?;

        Ok(Self {
            reference_date,
            earliest,
            span_days: (latest - earliest).num_days(),
        })
    }

    /// Sampler for the default age range
    pub fn with_default_ages(reference_date: NaiveDate) -> Result<Self> {
        Self::new(reference_date, MIN_AGE, MAX_AGE)
    }

    /// Reference date ages are computed against
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Draw a birth date (one draw) and return it with the derived age
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> (NaiveDate, u32) {
        let offset = rng.uniform_int(0, self.span_days).max(0).unsigned_abs();
        let birth_date = self
            .earliest
            .checked_add_days(Days::new(offset))
            .unwrap_or(self.earliest);
        (birth_date, age_at(birth_date, self.reference_date))
    }
}

/// Completed years between the birth date and the reference date
#[must_use]
pub fn age_at(birth_date: NaiveDate, reference_date: NaiveDate) -> u32 {
    reference_date.years_since(birth_date).unwrap_or(0)
}
