//! Seasonal temperature and wind speed model
//!
//! Both quantities combine a seasonal curve, a per-year factor and Gaussian
//! noise. Wind speed also carries a persistent regime that shifts it up or
//! down for windy and calm spells.

use std::f64::consts::PI;
use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::algorithm::distribution::DistributionTable;
use crate::error::{Result, SynthError};

/// Standard deviation of the temperature noise, in degrees
pub const TEMPERATURE_NOISE_SD: f64 = 2.0;
/// Standard deviation of the wind speed noise, in m/s
pub const WIND_NOISE_SD: f64 = 1.5;

/// Round to one decimal
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimals
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Seasonal mean temperature for a day of year, without the daily cycle
#[must_use]
pub fn seasonal_temperature(day_of_year: u32) -> f64 {
    15.0 * (2.0 * PI * (f64::from(day_of_year) - 80.0) / 365.0).sin() + 10.0
}

/// Day/night temperature swing for an hour of day
#[must_use]
pub fn daily_temperature_swing(hour: u32) -> f64 {
    5.0 * (2.0 * PI * (f64::from(hour) - 5.0) / 24.0).sin()
}

/// Seasonal mean wind speed for a day of year, windier in autumn and winter
#[must_use]
pub fn seasonal_wind(day_of_year: u32) -> f64 {
    3.0 * (2.0 * PI * (f64::from(day_of_year) - 300.0) / 365.0).cos() + 5.0
}

/// Per-year temperature and wind offsets
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualFactors {
    first_year: i32,
    temperature: Vec<f64>,
    wind: Vec<f64>,
}

impl AnnualFactors {
    /// Draw factors for every year in `[first_year, last_year]`
    ///
    /// All temperature factors, uniform in `[-2, 2)`, are drawn before all
    /// wind factors, uniform in `[-1, 1)`.
    pub fn draw<R: Rng + ?Sized>(first_year: i32, last_year: i32, rng: &mut R) -> Result<Self> {
        if last_year < first_year {
            return Err(SynthError::config(format!(
                "year range {first_year}..={last_year} is empty"
            )));
        }
        let years = (last_year - first_year + 1) as usize;
        let temperature = (0..years).map(|_| rng.random_range(-2.0..2.0)).collect();
        let wind = (0..years).map(|_| rng.random_range(-1.0..1.0)).collect();
        Ok(Self {
            first_year,
            temperature,
            wind,
        })
    }

    /// Years covered, inclusive
    #[must_use]
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.first_year..=self.first_year + self.temperature.len() as i32 - 1
    }

    fn slot(&self, year: i32) -> Option<usize> {
        usize::try_from(year - self.first_year).ok()
    }

    /// Temperature offset of a year, zero outside the covered range
    #[must_use]
    pub fn temperature(&self, year: i32) -> f64 {
        self.slot(year)
            .and_then(|i| self.temperature.get(i).copied())
            .unwrap_or(0.0)
    }

    /// Wind offset of a year, zero outside the covered range
    #[must_use]
    pub fn wind(&self, year: i32) -> f64 {
        self.slot(year)
            .and_then(|i| self.wind.get(i).copied())
            .unwrap_or(0.0)
    }
}

/// Persistent wind regime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindRegime {
    /// No persistent shift
    Steady,
    /// Windy spell, +2 m/s
    Windy,
    /// Calm spell, -2 m/s
    Calm,
}

impl WindRegime {
    /// Regimes with their weights
    pub const WEIGHTS: [(Self, f64); 3] = [(Self::Steady, 0.85), (Self::Windy, 0.10), (Self::Calm, 0.05)];

    /// Speed shift of the regime
    #[must_use]
    pub const fn offset(self) -> f64 {
        match self {
            Self::Steady => 0.0,
            Self::Windy => 2.0,
            Self::Calm => -2.0,
        }
    }
}

impl fmt::Display for WindRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.offset())
    }
}

/// Noise distributions and regime table of the climate model
#[derive(Debug, Clone)]
pub struct ClimateModel {
    temperature_noise: Normal<f64>,
    wind_noise: Normal<f64>,
    regimes: DistributionTable<WindRegime>,
}

impl ClimateModel {
    /// Model with the given noise standard deviations
    ///
    /// Fails with `InvalidDistribution` for a negative or non-finite
    /// standard deviation.
    pub fn new(temperature_sd: f64, wind_sd: f64) -> Result<Self> {
        let normal = |sd: f64, what: &str| {
            if !sd.is_finite() || sd < 0.0 {
                return Err(SynthError::invalid_distribution(format!(
                    "{what} noise standard deviation must be finite and non-negative, got {sd}"
                )));
            }
            Normal::new(0.0, sd).map_err(|e| {
                SynthError::invalid_distribution(format!("{what} noise (sd {sd}): {e}"))
            })
        };
        Ok(Self {
            temperature_noise: normal(temperature_sd, "temperature")?,
            wind_noise: normal(wind_sd, "wind")?,
            regimes: DistributionTable::new("wind_regime", WindRegime::WEIGHTS)?,
        })
    }

    /// Model with the standard noise levels
    pub fn standard() -> Result<Self> {
        Self::new(TEMPERATURE_NOISE_SD, WIND_NOISE_SD)
    }

    /// Temperature at a timestamp, rounded to 0.1 degree (one normal draw)
    pub fn temperature<R: Rng + ?Sized>(
        &self,
        at: NaiveDateTime,
        factors: &AnnualFactors,
        rng: &mut R,
    ) -> f64 {
        let noise = self.temperature_noise.sample(rng);
        round1(
            seasonal_temperature(at.ordinal())
                + daily_temperature_swing(at.hour())
                + factors.temperature(at.year())
                + noise,
        )
    }

    /// Wind speed at a timestamp, never negative, rounded to 0.1 m/s
    ///
    /// Draws the regime first, then the noise.
    pub fn wind_speed<R: Rng>(&self, at: NaiveDateTime, factors: &AnnualFactors, rng: &mut R) -> f64 {
        let regime = *self.regimes.sample(rng);
        let noise = self.wind_noise.sample(rng);
        let speed = seasonal_wind(at.ordinal()) + factors.wind(at.year()) + regime.offset() + noise;
        round1(speed.max(0.0))
    }
}
