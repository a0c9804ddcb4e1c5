//! Input records for one evaluation: raw measurements and weights.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Raw physicochemical measurements for a single evaluation.
/// All values in their natural units; domain clamping happens in the
/// transfer functions, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    /// Hydrodynamic diameter in nanometres (> 0 expected).
    pub size_nm: f64,
    /// Relative ApoE3 binding affinity, 0–1.
    pub apoe3_affinity: f64,
    /// Effective logP of the particle plus protein corona.
    pub log_p: f64,
    /// Zeta potential in millivolts.
    pub zeta_mv: f64,
    /// Relative dose on an arbitrary 0–10 scale.
    pub dose_relative: f64,
    /// Relative ApoE3 carrier expression, 0–1.
    pub apoe3_expression: f64,
    /// BBB tightness/integrity, 0–1 (1 = tight and healthy).
    pub bbb_tightness: f64,
    /// Neurovascular inflammation level, 0–1.
    pub inflammation: f64,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            size_nm: 80.0,
            apoe3_affinity: 0.6,
            log_p: 2.5,
            zeta_mv: -5.0,
            dose_relative: 3.0,
            apoe3_expression: 0.7,
            bbb_tightness: 0.9,
            inflammation: 0.2,
        }
    }
}

/// One weight per factor plus a global offset for the logistic link.
/// Weights are dimensionless; negative suppresses a factor, zero
/// disables it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub w_size: f64,
    pub w_affinity: f64,
    pub w_lipophilicity: f64,
    pub w_charge: f64,
    pub w_tightness: f64,
    pub w_inflammation: f64,
    pub w_dose: f64,
    pub w_expression: f64,
    /// Subtracted from the weighted sum before the logistic link.
    pub offset: f64,
}

impl Default for WeightVector {
    /// Heuristic prior: affinity and carrier expression dominate,
    /// tightness counts against crossing.
    fn default() -> Self {
        Self {
            w_size: 2.0,
            w_affinity: 2.5,
            w_lipophilicity: 1.0,
            w_charge: 1.0,
            w_tightness: -2.0,
            w_inflammation: 0.5,
            w_dose: 1.5,
            w_expression: 2.0,
            offset: 2.0,
        }
    }
}

impl WeightVector {
    /// Weights in the same order as `FactorScores::as_array`.
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.w_size,
            self.w_affinity,
            self.w_lipophilicity,
            self.w_charge,
            self.w_tightness,
            self.w_inflammation,
            self.w_dose,
            self.w_expression,
        ]
    }

    /// Reject NaN/infinite weights before they poison the logistic link.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("w_size", self.w_size),
            ("w_affinity", self.w_affinity),
            ("w_lipophilicity", self.w_lipophilicity),
            ("w_charge", self.w_charge),
            ("w_tightness", self.w_tightness),
            ("w_inflammation", self.w_inflammation),
            ("w_dose", self.w_dose),
            ("w_expression", self.w_expression),
            ("offset", self.offset),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteWeight(name.to_string()));
            }
        }
        Ok(())
    }
}
