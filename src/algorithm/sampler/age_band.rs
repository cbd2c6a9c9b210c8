//! Age bands and the draw rules they select
//!
//! Each band maps to one rule for the professional status and one for the
//! family situation. Adding a band means adding a variant and its rules.

use crate::algorithm::distribution::DistributionTable;
use crate::algorithm::random::RandomSource;
use crate::models::{FamilySituation, ProfessionStatus};

/// Age at which the working band starts
pub const WORKING_AGE: u32 = 25;
/// Age at which the senior band starts
pub const SENIOR_AGE: u32 = 65;

/// Age band an individual falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBand {
    /// Under 25
    Young,
    /// 25 up to, but excluding, 65
    Working,
    /// 65 and over
    Senior,
}

impl AgeBand {
    /// All bands, youngest first
    pub const ALL: [Self; 3] = [Self::Young, Self::Working, Self::Senior];

    /// Band of the given age
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        if age < WORKING_AGE {
            Self::Young
        } else if age < SENIOR_AGE {
            Self::Working
        } else {
            Self::Senior
        }
    }

    /// Draw rules that apply within this band
    #[must_use]
    pub const fn rules(self) -> BandRules {
        match self {
            Self::Young => BandRules {
                profession: DrawRule::Override {
                    value: ProfessionStatus::Student,
                    probability: 0.7,
                    fallback: Fallback::Table,
                },
                situation: DrawRule::Override {
                    value: FamilySituation::Single,
                    probability: 0.8,
                    fallback: Fallback::Table,
                },
            },
            Self::Working => BandRules {
                profession: DrawRule::Table,
                situation: DrawRule::Table,
            },
            Self::Senior => BandRules {
                profession: DrawRule::Fixed(ProfessionStatus::Retired),
                situation: DrawRule::Override {
                    value: FamilySituation::Widowed,
                    probability: 0.3,
                    fallback: Fallback::Value(FamilySituation::Married),
                },
            },
        }
    }

    /// Label used in summaries
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Young => "18-24",
            Self::Working => "25-64",
            Self::Senior => "65+",
        }
    }
}

/// What happens when an override draw does not select the override value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback<T> {
    /// Draw from the full distribution table
    Table,
    /// Use this value without a further draw
    Value(T),
}

/// How one attribute is drawn within a band
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawRule<T> {
    /// Draw from the full distribution table (one draw)
    Table,
    /// Always this value (no draw)
    Fixed(T),
    /// `value` when a uniform draw is below `probability`, otherwise the fallback
    Override {
        value: T,
        probability: f64,
        fallback: Fallback<T>,
    },
}

impl<T: Copy> DrawRule<T> {
    /// Apply the rule
    pub fn draw<R: RandomSource + ?Sized>(&self, table: &DistributionTable<T>, rng: &mut R) -> T {
        match *self {
            Self::Table => *table.sample(rng),
            Self::Fixed(value) => value,
            Self::Override {
                value,
                probability,
                fallback,
            } => {
                if rng.uniform() < probability {
                    value
                } else {
                    match fallback {
                        Fallback::Table => *table.sample(rng),
                        Fallback::Value(other) => other,
                    }
                }
            }
        }
    }
}

/// Profession and situation rules of one band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandRules {
    pub profession: DrawRule<ProfessionStatus>,
    pub situation: DrawRule<FamilySituation>,
}
