//! Benefit types and per-individual grant flags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynthError};

/// One of the ten fixed social benefits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Benefit {
    /// Family Allowance (AF)
    FamilyAllowance,
    /// Active Solidarity Income (RSA)
    ActiveSolidarityIncome,
    /// Personalized Housing Aid (APL)
    HousingAid,
    /// Lone Parent Allowance (API)
    LoneParentAllowance,
    /// Young Child Benefit (PAJE)
    YoungChildBenefit,
    /// Disabled Adult Allowance (AAH)
    DisabledAdultAllowance,
    /// Social Housing Aid (ALS)
    SocialHousingAid,
    /// Specific Solidarity Allowance (ASS)
    SpecificSolidarityAllowance,
    /// Elderly Solidarity Aid (ASV)
    ElderlySolidarityAid,
    /// Specific Solidarity Aid, alternative scheme (ASI)
    SpecificSolidarityAidAlt,
}

impl Benefit {
    /// Number of benefit types
    pub const COUNT: usize = 10;

    /// All benefits in evaluation order
    pub const ALL: [Self; Self::COUNT] = [
        Self::FamilyAllowance,
        Self::ActiveSolidarityIncome,
        Self::HousingAid,
        Self::LoneParentAllowance,
        Self::YoungChildBenefit,
        Self::DisabledAdultAllowance,
        Self::SocialHousingAid,
        Self::SpecificSolidarityAllowance,
        Self::ElderlySolidarityAid,
        Self::SpecificSolidarityAidAlt,
    ];

    /// Short code, also used as the output column name (lowercased)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::FamilyAllowance => "AF",
            Self::ActiveSolidarityIncome => "RSA",
            Self::HousingAid => "APL",
            Self::LoneParentAllowance => "API",
            Self::YoungChildBenefit => "PAJE",
            Self::DisabledAdultAllowance => "AAH",
            Self::SocialHousingAid => "ALS",
            Self::SpecificSolidarityAllowance => "ASS",
            Self::ElderlySolidarityAid => "ASV",
            Self::SpecificSolidarityAidAlt => "ASI",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FamilyAllowance => "Family Allowance",
            Self::ActiveSolidarityIncome => "Active Solidarity Income",
            Self::HousingAid => "Housing Aid",
            Self::LoneParentAllowance => "Lone Parent Allowance",
            Self::YoungChildBenefit => "Young Child Benefit",
            Self::DisabledAdultAllowance => "Disabled Adult Allowance",
            Self::SocialHousingAid => "Social Housing Aid",
            Self::SpecificSolidarityAllowance => "Specific Solidarity Allowance",
            Self::ElderlySolidarityAid => "Elderly Solidarity Aid",
            Self::SpecificSolidarityAidAlt => "Specific Solidarity Aid (alt.)",
        }
    }

    /// Position in [`Benefit::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Benefit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Benefit {
    type Err = SynthError;

    /// Parse a benefit from its code or its name, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.code().eq_ignore_ascii_case(needle) || b.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SynthError::UnknownBenefit(needle.to_string()))
    }
}

/// Grant flag per benefit for one individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BenefitGrants {
    flags: [bool; Benefit::COUNT],
}

impl BenefitGrants {
    /// No benefit granted
    #[must_use]
    pub const fn none() -> Self {
        Self {
            flags: [false; Benefit::COUNT],
        }
    }

    /// Set the grant flag of a benefit
    pub fn set(&mut self, benefit: Benefit, granted: bool) {
        self.flags[benefit.index()] = granted;
    }

    /// Whether the benefit was granted
    #[must_use]
    pub const fn is_granted(&self, benefit: Benefit) -> bool {
        self.flags[benefit.index()]
    }

    /// Look up a grant flag by benefit code or name
    pub fn get_by_name(&self, name: &str) -> Result<bool> {
        let benefit: Benefit = name.parse()?;
        Ok(self.is_granted(benefit))
    }

    /// Iterate over (benefit, granted) pairs in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (Benefit, bool)> + '_ {
        Benefit::ALL.into_iter().map(|b| (b, self.is_granted(b)))
    }

    /// Benefits that were granted
    pub fn granted(&self) -> impl Iterator<Item = Benefit> + '_ {
        self.iter().filter_map(|(b, granted)| granted.then_some(b))
    }

    /// Number of benefits granted
    #[must_use]
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }
}
