//! Turbine revenue model

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::climate::round2;

/// Lower bound of the revenue per unit of wind speed
pub const MIN_RATE: f64 = 2.0;
/// Upper bound (exclusive) of the revenue per unit of wind speed
pub const MAX_RATE: f64 = 35.0;

/// Simulated turbine model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurbineModel {
    EcoWind,
    SkyBlade,
    GreenPower,
}

impl TurbineModel {
    /// Models in output order
    pub const ALL: [Self; 3] = [Self::EcoWind, Self::SkyBlade, Self::GreenPower];

    /// Efficiency factor applied to the base revenue
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::EcoWind => 1.187,
            Self::SkyBlade => 1.0,
            Self::GreenPower => 0.885,
        }
    }

    /// Model name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EcoWind => "EcoWind",
            Self::SkyBlade => "SkyBlade",
            Self::GreenPower => "GreenPower",
        }
    }

    /// Revenue for a wind speed, rounded to cents (one uniform draw)
    pub fn revenue<R: Rng + ?Sized>(self, wind_speed: f64, rng: &mut R) -> f64 {
        let rate = rng.random_range(MIN_RATE..MAX_RATE);
        round2(wind_speed * rate * self.factor())
    }
}

impl fmt::Display for TurbineModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Revenue of every model for one wind speed, drawn in model order
pub fn revenues<R: Rng + ?Sized>(wind_speed: f64, rng: &mut R) -> [f64; 3] {
    TurbineModel::ALL.map(|model| model.revenue(wind_speed, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::random::seeded;

    #[test]
    fn test_revenue_bounds() {
        let mut rng = seeded(42);
        for model in TurbineModel::ALL {
            for _ in 0..100 {
                let revenue = model.revenue(10.0, &mut rng);
                assert!(revenue >= round2(10.0 * MIN_RATE * model.factor()));
                assert!(revenue <= round2(10.0 * MAX_RATE * model.factor()));
            }
        }
    }

    #[test]
    fn test_no_wind_no_revenue() {
        assert_eq!(revenues(0.0, &mut seeded(1)), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_same_draw_orders_models_by_factor() {
        // Same rate for every model: revenue follows the factor
        let a = TurbineModel::EcoWind.revenue(8.0, &mut seeded(5));
        let b = TurbineModel::SkyBlade.revenue(8.0, &mut seeded(5));
        let c = TurbineModel::GreenPower.revenue(8.0, &mut seeded(5));
        assert!(a > b && b > c);
    }
}
