//! Generation algorithms
//!
//! Random sources and distribution tables at the bottom, the attribute
//! sampler and the eligibility rules on top of them, and population
//! generation tying both together.

pub mod distribution;
pub mod eligibility;
pub mod population;
pub mod random;
pub mod sampler;
