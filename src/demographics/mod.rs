//! Demographic collaborators of the attribute sampler
//!
//! Names, place of residence and birth dates carry no correlation with the
//! other attributes; they only need to be reproducible from the run's
//! random source.

pub mod birth;
pub mod geography;
pub mod identifier;
pub mod names;

pub use birth::{BirthDateSampler, MAX_AGE, MIN_AGE, age_at};
pub use geography::{REGIONS, Region, sample_residence};
pub use identifier::sample_id;
pub use names::NameGenerator;
