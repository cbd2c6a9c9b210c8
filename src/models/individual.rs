//! Individual entity model
//!
//! An [`Individual`] is one synthetic benefit recipient. It is built once per
//! generation cycle, with every attribute set before the benefit grants are
//! computed, and never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::benefit::{Benefit, BenefitGrants};
use crate::models::family::FamilyComposition;
use crate::models::types::{EducationLevel, FamilySituation, IncomeTier, ProfessionStatus};

/// Generated first and last name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Family name
    pub last_name: String,
    /// Given name
    pub first_name: String,
}

/// Place of residence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Residence {
    /// Administrative region
    pub region: String,
    /// Department within the region
    pub department: String,
}

/// Attributes drawn for an individual, before any benefit is evaluated
///
/// The eligibility rules only ever look at this profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    /// Age in completed years at the reference date
    pub age: u32,
    /// Household composition
    pub family: FamilyComposition,
    /// Professional status
    pub profession: ProfessionStatus,
    /// Family situation
    pub situation: FamilySituation,
    /// Highest education level
    pub education: EducationLevel,
    /// Income tier
    pub income: IncomeTier,
}

/// One synthetic benefit recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    id: Uuid,
    identity: Identity,
    birth_date: NaiveDate,
    residence: Residence,
    profile: Profile,
    grants: BenefitGrants,
}

impl Individual {
    /// Assemble a fully generated individual
    #[must_use]
    pub const fn new(
        id: Uuid,
        identity: Identity,
        birth_date: NaiveDate,
        residence: Residence,
        profile: Profile,
        grants: BenefitGrants,
    ) -> Self {
        Self {
            id,
            identity,
            birth_date,
            residence,
            profile,
            grants,
        }
    }

    /// Unique identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Generated name
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Birth date
    #[must_use]
    pub const fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Place of residence
    #[must_use]
    pub const fn residence(&self) -> &Residence {
        &self.residence
    }

    /// Sampled attributes
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Age in completed years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.profile.age
    }

    /// Household composition
    #[must_use]
    pub const fn family(&self) -> FamilyComposition {
        self.profile.family
    }

    /// Professional status
    #[must_use]
    pub const fn profession(&self) -> ProfessionStatus {
        self.profile.profession
    }

    /// Family situation
    #[must_use]
    pub const fn situation(&self) -> FamilySituation {
        self.profile.situation
    }

    /// Education level
    #[must_use]
    pub const fn education(&self) -> EducationLevel {
        self.profile.education
    }

    /// Income tier
    #[must_use]
    pub const fn income(&self) -> IncomeTier {
        self.profile.income
    }

    /// Grant flags for all benefits
    #[must_use]
    pub const fn grants(&self) -> &BenefitGrants {
        &self.grants
    }

    /// Whether the benefit was granted
    #[must_use]
    pub const fn is_granted(&self, benefit: Benefit) -> bool {
        self.grants.is_granted(benefit)
    }
}
