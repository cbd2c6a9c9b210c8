//! Common domain type definitions
//!
//! This module contains the categorical attribute types shared by the
//! sampler, the eligibility rules and the dataset emitter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Professional status of an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProfessionStatus {
    /// In employment
    Active,
    /// Looking for work
    Unemployed,
    /// Retired from work
    Retired,
    /// In education
    Student,
}

impl ProfessionStatus {
    /// All statuses in table order
    pub const ALL: [Self; 4] = [Self::Active, Self::Unemployed, Self::Retired, Self::Student];

    /// Output label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Unemployed => "Unemployed",
            Self::Retired => "Retired",
            Self::Student => "Student",
        }
    }
}

/// Family situation of an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FamilySituation {
    /// Living alone, never married
    Single,
    /// Married
    Married,
    /// Divorced
    Divorced,
    /// Widowed
    Widowed,
    /// Living with a partner without being married
    Cohabiting,
}

impl FamilySituation {
    /// All situations in table order
    pub const ALL: [Self; 5] = [
        Self::Single,
        Self::Married,
        Self::Divorced,
        Self::Widowed,
        Self::Cohabiting,
    ];

    /// Output label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Married => "Married",
            Self::Divorced => "Divorced",
            Self::Widowed => "Widowed",
            Self::Cohabiting => "Cohabiting",
        }
    }
}

/// Highest completed education level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EducationLevel {
    /// No diploma
    None,
    /// Lower secondary certificate
    Certificate,
    /// Upper secondary diploma
    Baccalaureate,
    /// Two-year post-secondary degree
    AssociateDegree,
    /// Bachelor's degree
    Bachelor,
    /// Master's degree
    Master,
    /// Doctorate
    Doctorate,
}

impl EducationLevel {
    /// All levels, lowest first
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Certificate,
        Self::Baccalaureate,
        Self::AssociateDegree,
        Self::Bachelor,
        Self::Master,
        Self::Doctorate,
    ];

    /// Output label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Certificate => "Certificate",
            Self::Baccalaureate => "Baccalaureate",
            Self::AssociateDegree => "AssociateDegree",
            Self::Bachelor => "Bachelor",
            Self::Master => "Master",
            Self::Doctorate => "Doctorate",
        }
    }
}

/// Income tier of an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IncomeTier {
    /// Very low income
    VeryLow,
    /// Low income
    Low,
    /// Medium income
    Medium,
    /// High income
    High,
    /// Very high income
    VeryHigh,
}

impl IncomeTier {
    /// All tiers, lowest first
    pub const ALL: [Self; 5] = [
        Self::VeryLow,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::VeryHigh,
    ];

    /// Output label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "VeryLow",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "VeryHigh",
        }
    }

    /// Whether the tier is High or VeryHigh
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High | Self::VeryHigh)
    }

    /// Whether the tier is VeryLow or Low
    #[must_use]
    pub const fn is_low(self) -> bool {
        matches!(self, Self::VeryLow | Self::Low)
    }
}

macro_rules! impl_display_by_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

impl_display_by_label!(ProfessionStatus, FamilySituation, EducationLevel, IncomeTier);
