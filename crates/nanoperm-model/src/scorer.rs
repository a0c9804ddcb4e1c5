//! Score aggregation: factor scores → weighted sum → logistic link.

use serde::{Deserialize, Serialize};

use crate::calibration::Calibration;
use crate::inputs::{RawInputs, WeightVector};
use crate::transfer::{
    score_affinity, score_charge, score_dose, score_expression, score_inflammation,
    score_lipophilicity, score_size, score_tightness,
};

/// Normalised factor scores, all in [0, 1] by construction.
/// Derived from [`RawInputs`], never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub size: f64,
    pub affinity: f64,
    pub lipophilicity: f64,
    pub charge: f64,
    pub tightness: f64,
    pub inflammation: f64,
    pub dose: f64,
    pub expression: f64,
}

impl FactorScores {
    /// Scores in the same order as `WeightVector::as_array`.
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.size,
            self.affinity,
            self.lipophilicity,
            self.charge,
            self.tightness,
            self.inflammation,
            self.dose,
            self.expression,
        ]
    }
}

/// Full result of one evaluation: the per-factor breakdown, the
/// weighted sum fed to the logistic link, and the final probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub scores: FactorScores,
    pub z: f64,
    pub probability: f64,
}

/// Apply every transfer function to the raw inputs.
pub fn score_factors(inputs: &RawInputs, cal: &Calibration) -> FactorScores {
    FactorScores {
        size: score_size(inputs.size_nm, cal),
        affinity: score_affinity(inputs.apoe3_affinity),
        lipophilicity: score_lipophilicity(inputs.log_p, cal),
        charge: score_charge(inputs.zeta_mv, cal),
        tightness: score_tightness(inputs.bbb_tightness),
        inflammation: score_inflammation(inputs.inflammation, cal),
        dose: score_dose(inputs.dose_relative, cal),
        expression: score_expression(inputs.apoe3_expression),
    }
}

/// Logistic link, 1 / (1 + e^(-z)). Strictly in (0, 1) for finite z;
/// saturation to 0.0 or 1.0 at extreme |z| is accepted behaviour.
pub fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Combine factor scores and weights into a crossing probability:
/// z = Σ(wᵢ × scoreᵢ) − offset, probability = logistic(z).
pub fn aggregate(scores: &FactorScores, weights: &WeightVector) -> Evaluation {
    let z: f64 = scores
        .as_array()
        .iter()
        .zip(weights.as_array().iter())
        .map(|(s, w)| s * w)
        .sum::<f64>()
        - weights.offset;

    Evaluation {
        scores: scores.clone(),
        z,
        probability: logistic(z),
    }
}

/// Full pipeline: raw inputs → factor scores → probability.
pub fn evaluate(inputs: &RawInputs, weights: &WeightVector, cal: &Calibration) -> Evaluation {
    aggregate(&score_factors(inputs, cal), weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_weights(w: f64, offset: f64) -> WeightVector {
        WeightVector {
            w_size: w,
            w_affinity: w,
            w_lipophilicity: w,
            w_charge: w,
            w_tightness: w,
            w_inflammation: w,
            w_dose: w,
            w_expression: w,
            offset,
        }
    }

    #[test]
    fn test_scores_in_unit_interval() {
        let cal = Calibration::default();
        let scores = score_factors(&RawInputs::default(), &cal);
        for s in scores.as_array() {
            assert!((0.0..=1.0).contains(&s), "score out of range: {}", s);
        }
    }

    #[test]
    fn test_logistic_midpoint_and_bounds() {
        assert_eq!(logistic(0.0), 0.5);
        assert!(logistic(10.0) > 0.9999);
        assert!(logistic(-10.0) < 0.0001);
        // extreme magnitude saturates rather than erroring
        assert_eq!(logistic(1e9), 1.0);
        assert_eq!(logistic(-1e9), 0.0);
    }

    #[test]
    fn test_aggregate_monotone_in_weights() {
        let cal = Calibration::default();
        let scores = score_factors(&RawInputs::default(), &cal);
        assert!(scores.dose > 0.0);

        let mut lo = uniform_weights(1.0, 0.0);
        let mut hi = uniform_weights(1.0, 0.0);
        lo.w_dose = 0.5;
        hi.w_dose = 1.5;
        assert!(aggregate(&scores, &hi).probability > aggregate(&scores, &lo).probability);
    }

    #[test]
    fn test_aggregate_monotone_decreasing_in_offset() {
        let cal = Calibration::default();
        let scores = score_factors(&RawInputs::default(), &cal);
        let low_offset = aggregate(&scores, &uniform_weights(1.0, 0.0));
        let high_offset = aggregate(&scores, &uniform_weights(1.0, 2.0));
        assert!(high_offset.probability < low_offset.probability);
    }

    #[test]
    fn test_aggregate_deterministic() {
        let cal = Calibration::default();
        let scores = score_factors(&RawInputs::default(), &cal);
        let weights = WeightVector::default();
        let a = aggregate(&scores, &weights);
        let b = aggregate(&scores, &weights);
        // bit-identical on repeated calls
        assert_eq!(a.probability.to_bits(), b.probability.to_bits());
        assert_eq!(a.z.to_bits(), b.z.to_bits());
    }

    #[test]
    fn test_scenario_everything_favourable() {
        let cal = Calibration::default();
        let inputs = RawInputs {
            size_nm: 50.0,
            apoe3_affinity: 1.0,
            log_p: 3.0,
            zeta_mv: 0.0,
            dose_relative: 1e6,
            apoe3_expression: 1.0,
            bbb_tightness: 0.0,
            inflammation: 1.0,
        };
        let eval = evaluate(&inputs, &uniform_weights(1.0, 0.0), &cal);
        for s in eval.scores.as_array() {
            assert!(s > 0.999, "expected near-1 factor score, got {}", s);
        }
        // z ≈ 8 → P ≈ 1/(1+e^(−8)) ≈ 0.99966
        let expected = 1.0 / (1.0 + (-8.0f64).exp());
        assert!((eval.probability - expected).abs() < 1e-3);
    }

    #[test]
    fn test_scenario_suppressed() {
        let cal = Calibration::default();
        let inputs = RawInputs {
            size_nm: 5.0,  // far below the size window
            apoe3_affinity: 0.0,
            log_p: -2.0,   // far from the lipophilicity centre
            zeta_mv: 80.0, // beyond the charge cutoff
            dose_relative: 0.0,
            apoe3_expression: 0.0,
            bbb_tightness: 1.0,
            inflammation: 0.0,
        };
        let eval = evaluate(&inputs, &uniform_weights(1.0, cal.default_offset), &cal);
        assert!(eval.scores.size < 0.01);
        assert_eq!(eval.scores.charge, 0.0);
        assert_eq!(eval.scores.tightness, 0.0);
        assert!(eval.probability < 0.5);
    }

    #[test]
    fn test_scenario_zero_weights_is_half() {
        let cal = Calibration::default();
        let eval = evaluate(&RawInputs::default(), &uniform_weights(0.0, 0.0), &cal);
        assert_eq!(eval.probability, 0.5);

        // independent of the raw inputs
        let other = RawInputs {
            size_nm: 400.0,
            zeta_mv: 39.0,
            ..RawInputs::default()
        };
        let eval2 = evaluate(&other, &uniform_weights(0.0, 0.0), &cal);
        assert_eq!(eval2.probability, 0.5);
    }

    #[test]
    fn test_default_weights_keep_probability_modest() {
        let cal = Calibration::default();
        let eval = evaluate(&RawInputs::default(), &WeightVector::default(), &cal);
        assert!(eval.probability > 0.0 && eval.probability < 1.0);
    }
}
