//! Model calibration constants.
//!
//! Every tunable constant of the transfer functions lives here as one
//! immutable record, passed by reference into the scoring functions so
//! the model can be exercised with alternative calibrations. The
//! defaults are the heuristic values the model ships with; none of
//! them is fitted to empirical data.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Immutable calibration record for the factor model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Centre of the size window in nanometres (log10-space Gaussian peak).
    #[serde(default = "default_size_peak_nm")]
    pub size_peak_nm: f64,

    /// Width of the size window in log10 units.
    #[serde(default = "default_size_sigma_log")]
    pub size_sigma_log: f64,

    /// Floor applied to particle size before taking the log.
    /// Non-positive sizes are clamped here rather than rejected.
    #[serde(default = "default_size_floor_nm")]
    pub size_floor_nm: f64,

    /// Centre of the lipophilicity window (logP units).
    #[serde(default = "default_logp_center")]
    pub logp_center: f64,

    /// Width of the lipophilicity window (logP units).
    #[serde(default = "default_logp_sigma")]
    pub logp_sigma: f64,

    /// Zeta potential magnitude (mV) at which the charge score hits zero.
    #[serde(default = "default_charge_half_width_mv")]
    pub charge_half_width_mv: f64,

    /// Half-saturation constant of the dose response.
    #[serde(default = "default_dose_half_saturation")]
    pub dose_half_saturation: f64,

    /// Exponent of the inflammation power curve (in (0, 1] for a
    /// concave, diminishing-returns response).
    #[serde(default = "default_inflammation_exponent")]
    pub inflammation_exponent: f64,

    /// Default global offset subtracted from the weighted sum, keeping
    /// probabilities modest when all weights sit at their defaults.
    #[serde(default = "default_offset")]
    pub default_offset: f64,
}

fn default_size_peak_nm() -> f64 { 50.0 }
fn default_size_sigma_log() -> f64 { 0.25 }
fn default_size_floor_nm() -> f64 { 0.1 }
fn default_logp_center() -> f64 { 3.0 }
fn default_logp_sigma() -> f64 { 1.0 }
fn default_charge_half_width_mv() -> f64 { 40.0 }
fn default_dose_half_saturation() -> f64 { 2.0 }
fn default_inflammation_exponent() -> f64 { 0.7 }
fn default_offset() -> f64 { 2.0 }

impl Default for Calibration {
    fn default() -> Self {
        Self {
            size_peak_nm: default_size_peak_nm(),
            size_sigma_log: default_size_sigma_log(),
            size_floor_nm: default_size_floor_nm(),
            logp_center: default_logp_center(),
            logp_sigma: default_logp_sigma(),
            charge_half_width_mv: default_charge_half_width_mv(),
            dose_half_saturation: default_dose_half_saturation(),
            inflammation_exponent: default_inflammation_exponent(),
            default_offset: default_offset(),
        }
    }
}

impl Calibration {
    /// Load from a YAML file. Missing fields fall back to defaults.
    pub fn from_yaml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let cal: Self = serde_yaml::from_str(&content)?;
        Ok(cal)
    }

    /// Load from a JSON file. Missing fields fall back to defaults.
    pub fn from_json(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let cal: Self = serde_json::from_str(&content)?;
        Ok(cal)
    }
}
