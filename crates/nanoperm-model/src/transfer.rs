//! Per-factor transfer functions.
//!
//! Each function maps one raw measurement to a suitability score in
//! [0, 1] under a given [`Calibration`]. All of them are total over
//! the reals, pure, and deterministic.

use crate::calibration::Calibration;

/// Gaussian transfer function, output in [0, 1], peak of 1 at `mu`.
fn gaussian(x: f64, mu: f64, sigma: f64) -> f64 {
    (-0.5 * ((x - mu) / sigma).powi(2)).exp()
}

/// Size suitability: Gaussian window in log10-space around the
/// calibrated peak (~50 nm), broad enough that 20–80 nm is favoured.
///
/// Non-positive or sub-floor sizes are clamped to `size_floor_nm`
/// before the log rather than treated as an error.
pub fn score_size(size_nm: f64, cal: &Calibration) -> f64 {
    let size_nm = size_nm.max(cal.size_floor_nm);
    let x = size_nm.log10();
    let mu = cal.size_peak_nm.log10();
    gaussian(x, mu, cal.size_sigma_log).clamp(0.0, 1.0)
}

/// ApoE3 binding affinity: identity, clamped against out-of-domain callers.
pub fn score_affinity(affinity: f64) -> f64 {
    affinity.clamp(0.0, 1.0)
}

/// ApoE3 carrier expression: identity, same clamping policy as affinity.
pub fn score_expression(expression: f64) -> f64 {
    expression.clamp(0.0, 1.0)
}

/// Lipophilicity: Gaussian window around the calibrated logP centre
/// (~3), soft drop-off on both sides, defined for all reals.
pub fn score_lipophilicity(log_p: f64, cal: &Calibration) -> f64 {
    gaussian(log_p, cal.logp_center, cal.logp_sigma).clamp(0.0, 1.0)
}

/// Charge suitability: triangular, maximal at 0 mV, hard zero once
/// |zeta| reaches the calibrated half-width (~40 mV).
pub fn score_charge(zeta_mv: f64, cal: &Calibration) -> f64 {
    let half_width = cal.charge_half_width_mv;
    let val = 1.0 - zeta_mv.abs().min(half_width) / half_width;
    val.clamp(0.0, 1.0)
}

/// Barrier integrity: tighter barrier, lower permeability-like score.
pub fn score_tightness(tightness: f64) -> f64 {
    1.0 - tightness.clamp(0.0, 1.0)
}

/// Inflammation: concave power curve, so moderate-to-high inflammation
/// is emphasised. score(0) = 0, score(1) = 1, monotone non-decreasing.
pub fn score_inflammation(inflammation: f64, cal: &Calibration) -> f64 {
    inflammation
        .clamp(0.0, 1.0)
        .powf(cal.inflammation_exponent)
}

/// Dose: Michaelis–Menten saturation, dose / (K + dose). score(0) = 0,
/// score(K) = 0.5, asymptotically approaches 1.
pub fn score_dose(dose_relative: f64, cal: &Calibration) -> f64 {
    let dose = dose_relative.max(0.0);
    (dose / (cal.dose_half_saturation + dose)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_size_peak_scores_one() {
        let cal = Calibration::default();
        assert!((score_size(50.0, &cal) - 1.0).abs() < TOL);
    }

    #[test]
    fn test_size_symmetric_falloff_in_log_space() {
        let cal = Calibration::default();
        // 25 nm and 100 nm are the same log-ratio from the 50 nm peak
        let below = score_size(25.0, &cal);
        let above = score_size(100.0, &cal);
        assert!((below - above).abs() < 1e-9);
        assert!(below < 1.0);
    }

    #[test]
    fn test_size_monotone_away_from_peak() {
        let cal = Calibration::default();
        assert!(score_size(50.0, &cal) > score_size(30.0, &cal));
        assert!(score_size(30.0, &cal) > score_size(10.0, &cal));
        assert!(score_size(50.0, &cal) > score_size(90.0, &cal));
        assert!(score_size(90.0, &cal) > score_size(300.0, &cal));
    }

    #[test]
    fn test_size_nonpositive_clamped_to_floor() {
        let cal = Calibration::default();
        let at_floor = score_size(cal.size_floor_nm, &cal);
        assert_eq!(score_size(0.0, &cal), at_floor);
        assert_eq!(score_size(-5.0, &cal), at_floor);
        assert!(at_floor >= 0.0 && at_floor < 1e-6);
    }

    #[test]
    fn test_identity_scores_clamp() {
        assert_eq!(score_affinity(0.6), 0.6);
        assert_eq!(score_affinity(1.4), 1.0);
        assert_eq!(score_affinity(-0.2), 0.0);
        assert_eq!(score_expression(0.7), 0.7);
        assert_eq!(score_expression(2.0), 1.0);
    }

    #[test]
    fn test_lipophilicity_peak_and_falloff() {
        let cal = Calibration::default();
        assert!((score_lipophilicity(3.0, &cal) - 1.0).abs() < TOL);
        assert!(score_lipophilicity(3.0, &cal) > score_lipophilicity(2.0, &cal));
        assert!(score_lipophilicity(2.0, &cal) > score_lipophilicity(0.0, &cal));
        assert!(score_lipophilicity(3.0, &cal) > score_lipophilicity(4.5, &cal));
        // total over the reals, decays toward zero
        assert!(score_lipophilicity(-20.0, &cal) < 1e-12);
    }

    #[test]
    fn test_charge_triangle() {
        let cal = Calibration::default();
        assert_eq!(score_charge(0.0, &cal), 1.0);
        assert!((score_charge(20.0, &cal) - 0.5).abs() < TOL);
        assert!((score_charge(-20.0, &cal) - 0.5).abs() < TOL);
        // hard zero at and beyond the half-width
        assert_eq!(score_charge(40.0, &cal), 0.0);
        assert_eq!(score_charge(-40.0, &cal), 0.0);
        assert_eq!(score_charge(80.0, &cal), 0.0);
        // monotone toward the cutoff
        assert!(score_charge(5.0, &cal) > score_charge(15.0, &cal));
    }

    #[test]
    fn test_tightness_exact_inversion() {
        assert_eq!(score_tightness(0.0), 1.0);
        assert_eq!(score_tightness(1.0), 0.0);
        assert_eq!(score_tightness(0.25), 0.75);
        // clamped outside the unit interval
        assert_eq!(score_tightness(1.5), 0.0);
        assert_eq!(score_tightness(-0.5), 1.0);
    }

    #[test]
    fn test_inflammation_endpoints_and_monotonicity() {
        let cal = Calibration::default();
        assert_eq!(score_inflammation(0.0, &cal), 0.0);
        assert!((score_inflammation(1.0, &cal) - 1.0).abs() < TOL);
        assert!(score_inflammation(0.5, &cal) > 0.5); // concave
        assert!(score_inflammation(0.8, &cal) > score_inflammation(0.4, &cal));
    }

    #[test]
    fn test_dose_saturation() {
        let cal = Calibration::default();
        assert_eq!(score_dose(0.0, &cal), 0.0);
        assert!((score_dose(cal.dose_half_saturation, &cal) - 0.5).abs() < TOL);
        assert!(score_dose(5.0, &cal) > score_dose(3.0, &cal));
        assert!(score_dose(1e9, &cal) < 1.0);
        assert!(score_dose(1e9, &cal) > 0.999);
        // negative dose treated as zero
        assert_eq!(score_dose(-1.0, &cal), 0.0);
    }
}
