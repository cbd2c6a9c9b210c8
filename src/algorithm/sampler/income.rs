//! Education-conditioned income tier tables

use crate::algorithm::distribution::DistributionTable;
use crate::algorithm::random::RandomSource;
use crate::error::Result;
use crate::models::{EducationLevel, IncomeTier};

/// Income tier weights per education level, in `EducationLevel::ALL` order.
/// Columns follow `IncomeTier::ALL` (VeryLow, Low, Medium, High, VeryHigh).
pub const INCOME_WEIGHTS: [[f64; 5]; 7] = [
    [0.40, 0.45, 0.10, 0.04, 0.01],
    [0.30, 0.50, 0.15, 0.04, 0.01],
    [0.20, 0.40, 0.30, 0.08, 0.02],
    [0.10, 0.30, 0.40, 0.15, 0.05],
    [0.05, 0.20, 0.40, 0.30, 0.05],
    [0.02, 0.10, 0.30, 0.45, 0.13],
    [0.01, 0.05, 0.25, 0.60, 0.09],
];

/// One income distribution per education level
#[derive(Debug, Clone)]
pub struct IncomeModel {
    tables: Vec<DistributionTable<IncomeTier>>,
}

impl IncomeModel {
    /// Build the seven fixed tables
    pub fn new() -> Result<Self> {
        let tables = EducationLevel::ALL
            .iter()
            .zip(INCOME_WEIGHTS.iter())
            .map(|(education, weights)| {
                DistributionTable::new(
                    format!("income/{education}"),
                    IncomeTier::ALL.into_iter().zip(weights.iter().copied()),
                )
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { tables })
    }

    /// Distribution table for an education level
    #[must_use]
    pub fn table(&self, education: EducationLevel) -> &DistributionTable<IncomeTier> {
        &self.tables[education as usize]
    }

    /// Draw an income tier for the education level (one draw)
    pub fn sample<R: RandomSource + ?Sized>(&self, education: EducationLevel, rng: &mut R) -> IncomeTier {
        *self.table(education).sample(rng)
    }
}
