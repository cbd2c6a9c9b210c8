//! Flat output records
//!
//! The dataset emitter only sees these flat rows. Column order follows
//! field order.

use serde::{Deserialize, Serialize};

use crate::models::benefit::Benefit;
use crate::models::individual::Individual;

/// One output row per individual
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualRecord {
    pub id: String,
    pub last_name: String,
    pub first_name: String,
    pub birth_date: String,
    pub age: u32,
    pub region: String,
    pub department: String,
    pub family_situation: String,
    pub profession_status: String,
    pub education_level: String,
    pub income_tier: String,
    pub adults: u8,
    pub children: u8,
    pub total: u8,
    pub af: u8,
    pub rsa: u8,
    pub apl: u8,
    pub api: u8,
    pub paje: u8,
    pub aah: u8,
    pub als: u8,
    pub ass: u8,
    pub asv: u8,
    pub asi: u8,
}

impl IndividualRecord {
    /// Column names, in output order
    pub const COLUMNS: [&'static str; 24] = [
        "id",
        "last_name",
        "first_name",
        "birth_date",
        "age",
        "region",
        "department",
        "family_situation",
        "profession_status",
        "education_level",
        "income_tier",
        "adults",
        "children",
        "total",
        "af",
        "rsa",
        "apl",
        "api",
        "paje",
        "aah",
        "als",
        "ass",
        "asv",
        "asi",
    ];

    /// Ordered key-value view of the row
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let values = [
            self.id.clone(),
            self.last_name.clone(),
            self.first_name.clone(),
            self.birth_date.clone(),
            self.age.to_string(),
            self.region.clone(),
            self.department.clone(),
            self.family_situation.clone(),
            self.profession_status.clone(),
            self.education_level.clone(),
            self.income_tier.clone(),
            self.adults.to_string(),
            self.children.to_string(),
            self.total.to_string(),
            self.af.to_string(),
            self.rsa.to_string(),
            self.apl.to_string(),
            self.api.to_string(),
            self.paje.to_string(),
            self.aah.to_string(),
            self.als.to_string(),
            self.ass.to_string(),
            self.asv.to_string(),
            self.asi.to_string(),
        ];
        Self::COLUMNS.into_iter().zip(values).collect()
    }
}

impl From<&Individual> for IndividualRecord {
    fn from(individual: &Individual) -> Self {
        let flag = |b: Benefit| u8::from(individual.is_granted(b));
        let family = individual.family();

        Self {
            id: individual.id().to_string(),
            last_name: individual.identity().last_name.clone(),
            first_name: individual.identity().first_name.clone(),
            birth_date: individual.birth_date().format("%Y-%m-%d").to_string(),
            age: individual.age(),
            region: individual.residence().region.clone(),
            department: individual.residence().department.clone(),
            family_situation: individual.situation().label().to_string(),
            profession_status: individual.profession().label().to_string(),
            education_level: individual.education().label().to_string(),
            income_tier: individual.income().label().to_string(),
            adults: family.adults(),
            children: family.children(),
            total: family.total(),
            af: flag(Benefit::FamilyAllowance),
            rsa: flag(Benefit::ActiveSolidarityIncome),
            apl: flag(Benefit::HousingAid),
            api: flag(Benefit::LoneParentAllowance),
            paje: flag(Benefit::YoungChildBenefit),
            aah: flag(Benefit::DisabledAdultAllowance),
            als: flag(Benefit::SocialHousingAid),
            ass: flag(Benefit::SpecificSolidarityAllowance),
            asv: flag(Benefit::ElderlySolidarityAid),
            asi: flag(Benefit::SpecificSolidarityAidAlt),
        }
    }
}

impl From<Individual> for IndividualRecord {
    fn from(individual: Individual) -> Self {
        Self::from(&individual)
    }
}
