//! Attribute sampling for one synthetic individual
//!
//! Draws every attribute of an individual from the run's random source, in a
//! fixed order, conditioning later draws on earlier ones:
//!
//! 1. identifier (two draws) and name (two draws)
//! 2. household composition: children, then adults
//! 3. residence: region, then department
//! 4. birth date, from which the age is derived
//! 5. professional status and family situation, selected by age band
//! 6. education level, then the education-conditioned income tier

pub mod age_band;
pub mod income;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::algorithm::distribution::DistributionTable;
use crate::algorithm::random::RandomSource;
use crate::demographics::{BirthDateSampler, NameGenerator, sample_id, sample_residence};
use crate::error::Result;
use crate::models::family::{MAX_ADULTS, MAX_CHILDREN, MIN_ADULTS};
use crate::models::{
    EducationLevel, FamilyComposition, FamilySituation, Identity, IncomeTier, ProfessionStatus,
    Profile, Residence,
};

pub use age_band::{AgeBand, BandRules, DrawRule, Fallback};
pub use income::{INCOME_WEIGHTS, IncomeModel};

/// Weights of the full professional status table
pub const PROFESSION_WEIGHTS: [(ProfessionStatus, f64); 4] = [
    (ProfessionStatus::Active, 0.424),
    (ProfessionStatus::Unemployed, 0.214),
    (ProfessionStatus::Retired, 0.170),
    (ProfessionStatus::Student, 0.192),
];

/// Weights of the full family situation table
pub const SITUATION_WEIGHTS: [(FamilySituation, f64); 5] = [
    (FamilySituation::Single, 0.267),
    (FamilySituation::Married, 0.401),
    (FamilySituation::Divorced, 0.110),
    (FamilySituation::Widowed, 0.087),
    (FamilySituation::Cohabiting, 0.135),
];

/// Everything drawn for an individual before eligibility is evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledAttributes {
    pub id: Uuid,
    pub identity: Identity,
    pub residence: Residence,
    pub birth_date: NaiveDate,
    pub profile: Profile,
}

/// Draws consistent attribute sets
///
/// All tables are built once and are immutable afterwards, so one sampler can
/// be shared by reference across workers.
#[derive(Debug, Clone)]
pub struct AttributeSampler {
    professions: DistributionTable<ProfessionStatus>,
    situations: DistributionTable<FamilySituation>,
    income: IncomeModel,
    birth: BirthDateSampler,
}

impl AttributeSampler {
    /// Build the sampler, computing ages against `reference_date`
    pub fn new(reference_date: NaiveDate) -> Result<Self> {
        Ok(Self {
            professions: DistributionTable::new("profession", PROFESSION_WEIGHTS)?,
            situations: DistributionTable::new("family_situation", SITUATION_WEIGHTS)?,
            income: IncomeModel::new()?,
            birth: BirthDateSampler::with_default_ages(reference_date)?,
        })
    }

    /// Full professional status table
    #[must_use]
    pub const fn profession_table(&self) -> &DistributionTable<ProfessionStatus> {
        &self.professions
    }

    /// Full family situation table
    #[must_use]
    pub const fn situation_table(&self) -> &DistributionTable<FamilySituation> {
        &self.situations
    }

    /// Education-conditioned income tables
    #[must_use]
    pub const fn income_model(&self) -> &IncomeModel {
        &self.income
    }

    /// Reference date ages are computed against
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.birth.reference_date()
    }

    /// Children uniform in `[0, 5]`, then adults uniform in `[1, 2]`
    pub fn sample_family_composition<R: RandomSource + ?Sized>(&self, rng: &mut R) -> FamilyComposition {
        let children = rng.uniform_int(0, i64::from(MAX_CHILDREN));
        let adults = rng.uniform_int(i64::from(MIN_ADULTS), i64::from(MAX_ADULTS));
        FamilyComposition::new(
            u8::try_from(adults).unwrap_or(MIN_ADULTS),
            u8::try_from(children).unwrap_or(0),
        )
    }

    /// Professional status, then family situation, following the age band rules
    pub fn sample_age_conditioned<R: RandomSource + ?Sized>(
        &self,
        age: u32,
        rng: &mut R,
    ) -> (ProfessionStatus, FamilySituation) {
        let rules = AgeBand::from_age(age).rules();
        let profession = rules.profession.draw(&self.professions, rng);
        let situation = rules.situation.draw(&self.situations, rng);
        (profession, situation)
    }

    /// Education uniform over the seven levels, then the income tier
    pub fn sample_education_and_income<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (EducationLevel, IncomeTier) {
        let education = EducationLevel::ALL[rng.index(EducationLevel::ALL.len())];
        let income = self.income.sample(education, rng);
        (education, income)
    }

    /// Draw a complete attribute set
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> SampledAttributes {
        let id = sample_id(rng);
        let identity = NameGenerator::identity(rng);
        let family = self.sample_family_composition(rng);
        let residence = sample_residence(rng);
        let (birth_date, age) = self.birth.sample(rng);
        let (profession, situation) = self.sample_age_conditioned(age, rng);
        let (education, income) = self.sample_education_and_income(rng);

        SampledAttributes {
            id,
            identity,
            residence,
            birth_date,
            profile: Profile {
                age,
                family,
                profession,
                situation,
                education,
                income,
            },
        }
    }
}
