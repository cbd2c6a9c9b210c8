//! Population statistics and summaries
//!
//! Tallies are accumulated one individual at a time, so statistics can be
//! collected while a generated population streams to the emitter.

use std::fmt;
use std::hash::Hash;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::algorithm::sampler::AgeBand;
use crate::error::Result;
use crate::models::{
    Benefit, EducationLevel, FamilySituation, IncomeTier, Individual, ProfessionStatus,
};

/// Counts per category value
#[derive(Debug, Clone)]
pub struct Tally<T> {
    counts: FxHashMap<T, usize>,
}

impl<T> Default for Tally<T> {
    fn default() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }
}

impl<T: Copy + Eq + Hash> Tally<T> {
    /// Count one occurrence
    pub fn add(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    /// Occurrences of a value
    #[must_use]
    pub fn count(&self, value: T) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Share of a value among `total` observations
    #[must_use]
    pub fn share(&self, value: T, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count(value) as f64 / total as f64
        }
    }

    /// Merge another tally into this one
    pub fn merge(&mut self, other: &Self) {
        for (value, count) in &other.counts {
            *self.counts.entry(*value).or_insert(0) += count;
        }
    }
}

/// Aggregate statistics of a generated population
#[derive(Debug, Clone, Default)]
pub struct PopulationStatistics {
    individual_count: usize,
    household_members: usize,
    age_sum: u64,
    professions: Tally<ProfessionStatus>,
    situations: Tally<FamilySituation>,
    education: Tally<EducationLevel>,
    income: Tally<IncomeTier>,
    age_bands: Tally<AgeBand>,
    grants: [usize; Benefit::COUNT],
}

impl PopulationStatistics {
    /// Empty statistics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics over a whole population
    pub fn from_population<'a>(population: impl IntoIterator<Item = &'a Individual>) -> Self {
        let mut stats = Self::new();
        for individual in population {
            stats.record(individual);
        }
        stats
    }

    /// Add one individual to the tallies
    pub fn record(&mut self, individual: &Individual) {
        self.individual_count += 1;
        self.household_members += usize::from(individual.family().total());
        self.age_sum += u64::from(individual.age());
        self.professions.add(individual.profession());
        self.situations.add(individual.situation());
        self.education.add(individual.education());
        self.income.add(individual.income());
        self.age_bands.add(AgeBand::from_age(individual.age()));
        for benefit in individual.grants().granted() {
            self.grants[benefit.index()] += 1;
        }
    }

    /// Combine statistics gathered separately
    pub fn merge(&mut self, other: &Self) {
        self.individual_count += other.individual_count;
        self.household_members += other.household_members;
        self.age_sum += other.age_sum;
        self.professions.merge(&other.professions);
        self.situations.merge(&other.situations);
        self.education.merge(&other.education);
        self.income.merge(&other.income);
        self.age_bands.merge(&other.age_bands);
        for (total, count) in self.grants.iter_mut().zip(other.grants) {
            *total += count;
        }
    }

    /// Number of individuals recorded
    #[must_use]
    pub const fn individual_count(&self) -> usize {
        self.individual_count
    }

    /// Individuals with a professional status
    #[must_use]
    pub fn profession_count(&self, status: ProfessionStatus) -> usize {
        self.professions.count(status)
    }

    /// Individuals with a family situation
    #[must_use]
    pub fn situation_count(&self, situation: FamilySituation) -> usize {
        self.situations.count(situation)
    }

    /// Individuals with an education level
    #[must_use]
    pub fn education_count(&self, level: EducationLevel) -> usize {
        self.education.count(level)
    }

    /// Individuals in an income tier
    #[must_use]
    pub fn income_count(&self, tier: IncomeTier) -> usize {
        self.income.count(tier)
    }

    /// Individuals in an age band
    #[must_use]
    pub fn age_band_count(&self, band: AgeBand) -> usize {
        self.age_bands.count(band)
    }

    /// Individuals granted a benefit
    #[must_use]
    pub const fn grant_count(&self, benefit: Benefit) -> usize {
        self.grants[benefit.index()]
    }

    /// Share of individuals granted a benefit given by code or name
    pub fn grant_rate(&self, name: &str) -> Result<f64> {
        let benefit: Benefit = name.parse()?;
        Ok(self.rate(self.grant_count(benefit)))
    }

    /// Mean household size
    #[must_use]
    pub fn mean_household_size(&self) -> f64 {
        self.rate(self.household_members)
    }

    /// Mean age
    #[must_use]
    pub fn mean_age(&self) -> f64 {
        if self.individual_count == 0 {
            0.0
        } else {
            self.age_sum as f64 / self.individual_count as f64
        }
    }

    fn rate(&self, count: usize) -> f64 {
        if self.individual_count == 0 {
            0.0
        } else {
            count as f64 / self.individual_count as f64
        }
    }
}

fn write_tally<T: Copy + Eq + Hash + fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    values: &[T],
    tally: &Tally<T>,
    total: usize,
) -> fmt::Result {
    writeln!(f, "  {title}:")?;
    for value in values {
        writeln!(
            f,
            "    {value}: {} ({:.1}%)",
            tally.count(*value),
            tally.share(*value, total) * 100.0
        )?;
    }
    Ok(())
}

impl fmt::Display for PopulationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.individual_count;
        writeln!(f, "Population Summary:")?;
        writeln!(f, "  Total Individuals: {total}")?;
        writeln!(f, "  Mean Age: {:.1}", self.mean_age())?;
        writeln!(f, "  Mean Household Size: {:.2}", self.mean_household_size())?;

        writeln!(f, "  Age Bands:")?;
        for band in AgeBand::ALL {
            writeln!(
                f,
                "    {}: {} ({:.1}%)",
                band.label(),
                self.age_bands.count(band),
                self.age_bands.share(band, total) * 100.0
            )?;
        }
        write_tally(f, "Professional Status", &ProfessionStatus::ALL, &self.professions, total)?;
        write_tally(f, "Family Situation", &FamilySituation::ALL, &self.situations, total)?;
        write_tally(f, "Education Level", &EducationLevel::ALL, &self.education, total)?;
        write_tally(f, "Income Tier", &IncomeTier::ALL, &self.income, total)?;

        writeln!(f, "  Benefits (most granted first):")?;
        for benefit in Benefit::ALL
            .into_iter()
            .sorted_by_key(|b| std::cmp::Reverse(self.grant_count(*b)))
        {
            let count = self.grant_count(benefit);
            writeln!(
                f,
                "    {} ({}): {count} ({:.1}%)",
                benefit.code(),
                benefit,
                self.rate(count) * 100.0
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::population::generator::generate;
    use crate::error::SynthError;

    #[test]
    fn test_counts_add_up() {
        let population: Vec<_> = generate(200, 5).unwrap().collect();
        let stats = PopulationStatistics::from_population(&population);

        assert_eq!(stats.individual_count(), 200);
        let professions: usize = ProfessionStatus::ALL
            .iter()
            .map(|s| stats.profession_count(*s))
            .sum();
        assert_eq!(professions, 200);
        let bands: usize = AgeBand::ALL.iter().map(|b| stats.age_band_count(*b)).sum();
        assert_eq!(bands, 200);
        let size = stats.mean_household_size();
        assert!((1.0..=7.0).contains(&size));
    }

    #[test]
    fn test_grant_rate_by_name() {
        let population: Vec<_> = generate(100, 11).unwrap().collect();
        let stats = PopulationStatistics::from_population(&population);
        let expected = stats.grant_count(Benefit::HousingAid) as f64 / 100.0;
        assert!((stats.grant_rate("APL").unwrap() - expected).abs() < 1e-12);
        assert!(matches!(
            stats.grant_rate("nope"),
            Err(SynthError::UnknownBenefit(_))
        ));
    }

    #[test]
    fn test_merge_equals_single_pass() {
        let population: Vec<_> = generate(60, 8).unwrap().collect();
        let whole = PopulationStatistics::from_population(&population);
        let mut left = PopulationStatistics::from_population(&population[..25]);
        left.merge(&PopulationStatistics::from_population(&population[25..]));

        assert_eq!(left.individual_count(), whole.individual_count());
        for benefit in Benefit::ALL {
            assert_eq!(left.grant_count(benefit), whole.grant_count(benefit));
        }
        assert_eq!(left.to_string(), whole.to_string());
    }

    #[test]
    fn test_empty_summary() {
        let stats = PopulationStatistics::new();
        assert_eq!(stats.mean_household_size(), 0.0);
        assert!(stats.to_string().contains("Total Individuals: 0"));
    }
}
