//! Detector construction errors.

use super::error_code::{self, GaugeErrorCode};

/// Errors raised while building the detector registry from configuration.
/// Evaluation itself never fails: undefined baselines are neutral results.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("metric {kind} requires a threshold for its comparison strategy")]
    MissingThreshold { kind: String },

    #[error("metric {kind} has an invalid threshold {value}")]
    InvalidThreshold { kind: String, value: f64 },
}

impl GaugeErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        error_code::DETECTION_ERROR
    }
}
