//! Shared application state for the web server.

use std::sync::Arc;

use nanoperm_model::Calibration;
use tracing::{info, warn};

/// Path checked at startup for a calibration override.
const CALIBRATION_FILE: &str = "calibration.yaml";

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub calibration: Calibration,
}

impl AppState {
    /// Load the calibration from `calibration.yaml` when present,
    /// otherwise fall back to the built-in defaults.
    pub fn new() -> Self {
        let calibration = if std::path::Path::new(CALIBRATION_FILE).exists() {
            match Calibration::from_yaml(CALIBRATION_FILE) {
                Ok(cal) => {
                    info!("Loaded calibration from {}", CALIBRATION_FILE);
                    cal
                }
                Err(e) => {
                    warn!("Failed to load {}: {} — using defaults", CALIBRATION_FILE, e);
                    Calibration::default()
                }
            }
        } else {
            Calibration::default()
        };
        Self { calibration }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedState = Arc<AppState>;
