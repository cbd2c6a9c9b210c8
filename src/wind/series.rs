//! Lazy wind turbine time series

use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDateTime, TimeDelta};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::climate::{AnnualFactors, ClimateModel};
use super::config::WindConfig;
use super::curtailment::is_curtailed;
use super::revenue::{TurbineModel, revenues};
use crate::algorithm::random::seeded;
use crate::error::Result;

/// Format of the timestamp column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One simulated measurement
#[derive(Debug, Clone, PartialEq)]
pub struct WindSample {
    pub timestamp: NaiveDateTime,
    /// Degrees Celsius
    pub temperature: f64,
    /// Metres per second
    pub wind_speed: f64,
    /// Revenue per turbine model, in `TurbineModel::ALL` order
    pub revenue: [f64; 3],
    pub curtailed: bool,
}

impl WindSample {
    /// Revenue of one model
    #[must_use]
    pub const fn revenue_of(&self, model: TurbineModel) -> f64 {
        self.revenue[model as usize]
    }
}

/// Flat output row of the wind series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindRecord {
    pub timestamp: String,
    pub temperature: f64,
    pub wind_speed: f64,
    pub revenue_eco_wind: f64,
    pub revenue_sky_blade: f64,
    pub revenue_green_power: f64,
    pub curtailment: u8,
}

impl From<&WindSample> for WindRecord {
    fn from(sample: &WindSample) -> Self {
        Self {
            timestamp: sample.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            temperature: sample.temperature,
            wind_speed: sample.wind_speed,
            revenue_eco_wind: sample.revenue_of(TurbineModel::EcoWind),
            revenue_sky_blade: sample.revenue_of(TurbineModel::SkyBlade),
            revenue_green_power: sample.revenue_of(TurbineModel::GreenPower),
            curtailment: u8::from(sample.curtailed),
        }
    }
}

impl From<WindSample> for WindRecord {
    fn from(sample: WindSample) -> Self {
        Self::from(&sample)
    }
}

/// Iterator over the samples of a configured series
///
/// Annual factors are drawn up front for every year of the range plus the
/// following one; each sample then draws temperature noise, the wind regime,
/// wind noise and one revenue rate per turbine model.
#[derive(Debug, Clone)]
pub struct WindSeries {
    rng: ChaCha8Rng,
    climate: ClimateModel,
    factors: AnnualFactors,
    next: NaiveDateTime,
    step: TimeDelta,
    remaining: usize,
}

impl WindSeries {
    /// Series with the standard climate model
    pub fn new(config: &WindConfig) -> Result<Self> {
        Self::with_climate(config, ClimateModel::standard()?)
    }

    /// Series with a custom climate model
    pub fn with_climate(config: &WindConfig, climate: ClimateModel) -> Result<Self> {
        config.validate()?;
        let mut rng = seeded(config.seed);
        let factors = AnnualFactors::draw(config.start.year(), config.end.year() + 1, &mut rng)?;
        Ok(Self {
            rng,
            climate,
            factors,
            next: config.start,
            step: TimeDelta::minutes(i64::from(config.step_minutes)),
            remaining: config.sample_count(),
        })
    }

    /// Annual factors of the series
    #[must_use]
    pub const fn factors(&self) -> &AnnualFactors {
        &self.factors
    }
}

impl Iterator for WindSeries {
    type Item = WindSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let timestamp = self.next;
        self.next += self.step;

        let temperature = self.climate.temperature(timestamp, &self.factors, &mut self.rng);
        let wind_speed = self.climate.wind_speed(timestamp, &self.factors, &mut self.rng);
        let revenue = revenues(wind_speed, &mut self.rng);
        Some(WindSample {
            timestamp,
            temperature,
            wind_speed,
            revenue,
            curtailed: is_curtailed(timestamp),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for WindSeries {}

impl FusedIterator for WindSeries {}

/// Lazily simulate the configured series
pub fn simulate(config: &WindConfig) -> Result<WindSeries> {
    WindSeries::new(config)
}
