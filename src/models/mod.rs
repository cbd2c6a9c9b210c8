//! Domain models for the synthetic benefit-recipient population
//!
//! This module contains the entity models produced by the attribute sampler
//! and the eligibility engine, and the flat records handed to the emitter.

pub mod benefit;
pub mod family;
pub mod individual;
pub mod record;
pub mod types;

// Re-export commonly used types
pub use benefit::{Benefit, BenefitGrants};
pub use family::FamilyComposition;
pub use individual::{Identity, Individual, Profile, Residence};
pub use record::IndividualRecord;
pub use types::{EducationLevel, FamilySituation, IncomeTier, ProfessionStatus};
