//! Wind turbine time series simulator
//!
//! Produces temperature, wind speed, per-model revenue and curtailment at a
//! fixed interval. The series has its own seed and shares no random state
//! with population generation.

pub mod climate;
pub mod config;
pub mod curtailment;
pub mod revenue;
pub mod series;

pub use climate::{AnnualFactors, ClimateModel, WindRegime};
pub use config::WindConfig;
pub use curtailment::{Season, is_curtailed};
pub use revenue::TurbineModel;
pub use series::{WindRecord, WindSample, WindSeries, simulate};
