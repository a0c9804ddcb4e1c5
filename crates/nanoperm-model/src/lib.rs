//! nanoperm-model — Factor-scoring engine for nano-plastic BBB crossing.
//!
//! Maps eight raw physicochemical inputs (particle size, ApoE3 affinity,
//! lipophilicity, zeta potential, dose, carrier expression, barrier
//! tightness, inflammation) to normalised [0, 1] factor scores and
//! combines them through a weighted logistic link into a crossing
//! probability. Purely heuristic and educational — the calibration is
//! illustrative, not fitted to empirical data.

pub mod calibration;
pub mod curve;
pub mod error;
pub mod inputs;
pub mod scorer;
pub mod transfer;

pub use calibration::Calibration;
pub use curve::{size_window_curve, SizeWindowCurve};
pub use error::{ModelError, Result};
pub use inputs::{RawInputs, WeightVector};
pub use scorer::{aggregate, evaluate, logistic, score_factors, Evaluation, FactorScores};
