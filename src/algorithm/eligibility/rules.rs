//! Declarative benefit rules
//!
//! Each benefit has a base probability (the gate) and an ordered list of
//! disqualifiers. Disqualifiers are OR'd: any match withholds the benefit.

use std::fmt;

use smallvec::SmallVec;

use crate::models::{Benefit, IncomeTier, ProfessionStatus, Profile};

const HIGH_INCOME: &[IncomeTier] = &[IncomeTier::High, IncomeTier::VeryHigh];
const LOW_INCOME: &[IncomeTier] = &[IncomeTier::VeryLow, IncomeTier::Low];
const VERY_LOW_INCOME: &[IncomeTier] = &[IncomeTier::VeryLow];
const NOT_WORKING_AGE: &[ProfessionStatus] = &[ProfessionStatus::Retired, ProfessionStatus::Student];

/// Predicate that withholds a benefit when it matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disqualifier {
    /// Fewer children than the given count
    ChildrenBelow(u8),
    /// No children at all
    NoChildren,
    /// Number of adults differs from the given count
    AdultsNot(u8),
    /// Younger than the given age
    AgeBelow(u32),
    /// Older than the given age
    AgeAbove(u32),
    /// Age outside the inclusive range
    AgeOutside { min: u32, max: u32 },
    /// Income tier is one of the listed tiers
    IncomeIn(&'static [IncomeTier]),
    /// Income tier is none of the listed tiers
    IncomeNotIn(&'static [IncomeTier]),
    /// Professional status is one of the listed statuses
    ProfessionIn(&'static [ProfessionStatus]),
}

impl Disqualifier {
    /// Whether the predicate matches, i.e. the benefit must be withheld
    #[must_use]
    pub fn matches(&self, profile: &Profile) -> bool {
        match *self {
            Self::ChildrenBelow(n) => profile.family.children() < n,
            Self::NoChildren => profile.family.children() == 0,
            Self::AdultsNot(n) => profile.family.adults() != n,
            Self::AgeBelow(age) => profile.age < age,
            Self::AgeAbove(age) => profile.age > age,
            Self::AgeOutside { min, max } => !(min..=max).contains(&profile.age),
            Self::IncomeIn(tiers) => tiers.contains(&profile.income),
            Self::IncomeNotIn(tiers) => !tiers.contains(&profile.income),
            Self::ProfessionIn(statuses) => statuses.contains(&profile.profession),
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "{{")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "}}")
}

impl fmt::Display for Disqualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChildrenBelow(n) => write!(f, "children < {n}"),
            Self::NoChildren => write!(f, "children = 0"),
            Self::AdultsNot(n) => write!(f, "adults != {n}"),
            Self::AgeBelow(age) => write!(f, "age < {age}"),
            Self::AgeAbove(age) => write!(f, "age > {age}"),
            Self::AgeOutside { min, max } => write!(f, "age < {min} or age > {max}"),
            Self::IncomeIn(tiers) => {
                write!(f, "income_tier in ")?;
                write_list(f, tiers)
            }
            Self::IncomeNotIn(tiers) => {
                write!(f, "income_tier not in ")?;
                write_list(f, tiers)
            }
            Self::ProfessionIn(statuses) => {
                write!(f, "profession in ")?;
                write_list(f, statuses)
            }
        }
    }
}

/// Gate probability and disqualifiers of one benefit
#[derive(Debug, Clone, PartialEq)]
pub struct BenefitRule {
    pub benefit: Benefit,
    pub base_probability: f64,
    pub disqualifiers: SmallVec<[Disqualifier; 2]>,
}

impl BenefitRule {
    /// Rule with a gate and no disqualifier yet
    #[must_use]
    pub fn new(benefit: Benefit, base_probability: f64) -> Self {
        Self {
            benefit,
            base_probability,
            disqualifiers: SmallVec::new(),
        }
    }

    /// Append a disqualifier
    #[must_use]
    pub fn disqualify_if(mut self, disqualifier: Disqualifier) -> Self {
        self.disqualifiers.push(disqualifier);
        self
    }

    /// Whether `draw` opens the gate
    #[must_use]
    pub fn gate_passes(&self, draw: f64) -> bool {
        draw < self.base_probability
    }

    /// First disqualifier that matches the profile, if any
    #[must_use]
    pub fn first_disqualifier(&self, profile: &Profile) -> Option<&Disqualifier> {
        self.disqualifiers.iter().find(|d| d.matches(profile))
    }

    /// Whether the profile is eligible once the gate has passed
    #[must_use]
    pub fn is_eligible(&self, profile: &Profile) -> bool {
        self.first_disqualifier(profile).is_none()
    }
}

impl fmt::Display for BenefitRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) p={}", self.benefit, self.benefit.code(), self.base_probability)?;
        for (i, d) in self.disqualifiers.iter().enumerate() {
            write!(f, "{}{d}", if i == 0 { " withheld if " } else { " or " })?;
        }
        Ok(())
    }
}

/// The fixed benefit rule table, in evaluation order
#[must_use]
pub fn standard_rules() -> Vec<BenefitRule> {
    use Disqualifier::{
        AdultsNot, AgeAbove, AgeBelow, AgeOutside, ChildrenBelow, IncomeIn, IncomeNotIn,
        NoChildren, ProfessionIn,
    };

    vec![
        BenefitRule::new(Benefit::FamilyAllowance, 0.036).disqualify_if(ChildrenBelow(2)),
        BenefitRule::new(Benefit::ActiveSolidarityIncome, 0.435)
            .disqualify_if(IncomeIn(HIGH_INCOME))
            .disqualify_if(ProfessionIn(NOT_WORKING_AGE)),
        BenefitRule::new(Benefit::HousingAid, 0.15).disqualify_if(IncomeIn(HIGH_INCOME)),
        BenefitRule::new(Benefit::LoneParentAllowance, 0.08).disqualify_if(AdultsNot(1)),
        BenefitRule::new(Benefit::YoungChildBenefit, 0.045)
            .disqualify_if(NoChildren)
            .disqualify_if(AgeAbove(40)),
        BenefitRule::new(Benefit::DisabledAdultAllowance, 0.10)
            .disqualify_if(AgeOutside { min: 18, max: 59 }),
        BenefitRule::new(Benefit::SocialHousingAid, 0.12).disqualify_if(IncomeNotIn(LOW_INCOME)),
        BenefitRule::new(Benefit::SpecificSolidarityAllowance, 0.062).disqualify_if(AgeBelow(50)),
        BenefitRule::new(Benefit::ElderlySolidarityAid, 0.159).disqualify_if(AgeBelow(60)),
        BenefitRule::new(Benefit::SpecificSolidarityAidAlt, 0.015)
            .disqualify_if(IncomeNotIn(VERY_LOW_INCOME)),
    ]
}
