//! Benefit eligibility rule engine
//!
//! For every benefit, in table order, one uniform draw is taken. The benefit
//! is granted when the draw falls below its base probability and none of its
//! disqualifiers matches the individual's profile. The draw is taken even
//! when a disqualifier would make the outcome certain, so every individual
//! consumes the same number of draws here.

pub mod rules;

use std::fmt;

use rustc_hash::FxHashSet;

use crate::algorithm::random::RandomSource;
use crate::error::{Result, SynthError};
use crate::models::{Benefit, BenefitGrants, Profile};

pub use rules::{BenefitRule, Disqualifier, standard_rules};

/// Outcome of evaluating one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The draw was not below the base probability
    GateClosed,
    /// The gate passed but a disqualifier matched
    Disqualified(Disqualifier),
    /// The benefit is granted
    Granted,
}

impl Decision {
    /// Whether the decision grants the benefit
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Evaluates a complete rule table against profiles
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    rules: Vec<BenefitRule>,
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl EligibilityEngine {
    /// Engine over the fixed benefit table
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    /// Engine over a custom table
    ///
    /// The table must hold exactly one rule per benefit, with base
    /// probabilities in `[0, 1]`. Rules are evaluated in the given order.
    pub fn new(rules: Vec<BenefitRule>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for rule in &rules {
            if !(0.0..=1.0).contains(&rule.base_probability) {
                return Err(SynthError::invalid_distribution(format!(
                    "base probability {} of {} is outside [0, 1]",
                    rule.base_probability,
                    rule.benefit.code()
                )));
            }
            if !seen.insert(rule.benefit) {
                return Err(SynthError::config(format!(
                    "benefit {} has more than one rule",
                    rule.benefit.code()
                )));
            }
        }
        if let Some(missing) = Benefit::ALL.iter().find(|b| !seen.contains(*b)) {
            return Err(SynthError::config(format!(
                "benefit {} has no rule",
                missing.code()
            )));
        }
        Ok(Self { rules })
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[BenefitRule] {
        &self.rules
    }

    /// Rule of a benefit
    #[must_use]
    pub fn rule(&self, benefit: Benefit) -> Option<&BenefitRule> {
        self.rules.iter().find(|r| r.benefit == benefit)
    }

    /// Rule of a benefit given by code or name
    pub fn rule_by_name(&self, name: &str) -> Result<&BenefitRule> {
        let benefit: Benefit = name.parse()?;
        self.rule(benefit)
            .ok_or_else(|| SynthError::UnknownBenefit(name.to_string()))
    }

    /// Decide one rule for a given draw, without touching any random source
    #[must_use]
    pub fn decide(rule: &BenefitRule, profile: &Profile, draw: f64) -> Decision {
        if !rule.gate_passes(draw) {
            return Decision::GateClosed;
        }
        match rule.first_disqualifier(profile) {
            Some(d) => Decision::Disqualified(*d),
            None => Decision::Granted,
        }
    }

    /// Evaluate every rule, one draw each
    pub fn evaluate<R: RandomSource + ?Sized>(&self, profile: &Profile, rng: &mut R) -> BenefitGrants {
        let mut grants = BenefitGrants::none();
        for rule in &self.rules {
            let draw = rng.uniform();
            grants.set(rule.benefit, Self::decide(rule, profile, draw).is_granted());
        }
        grants
    }

    /// Evaluate every rule and report each decision
    pub fn explain<R: RandomSource + ?Sized>(
        &self,
        profile: &Profile,
        rng: &mut R,
    ) -> Vec<(Benefit, Decision)> {
        self.rules
            .iter()
            .map(|rule| (rule.benefit, Self::decide(rule, profile, rng.uniform())))
            .collect()
    }
}

impl fmt::Display for EligibilityEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Eligibility rules:")?;
        for rule in &self.rules {
            writeln!(f, "  {rule}")?;
        }
        Ok(())
    }
}
