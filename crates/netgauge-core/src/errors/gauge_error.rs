//! Top-level error aggregating every subsystem.

use super::error_code::GaugeErrorCode;
use super::{CollectionError, ConfigError, DetectionError, StorageError};

/// Any error netgauge can surface. Subsystem errors convert via `From`.
#[derive(Debug, thiserror::Error)]
pub enum GaugeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),

    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl GaugeErrorCode for GaugeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Collection(e) => e.error_code(),
            Self::Detection(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type GaugeResult<T> = Result<T, GaugeError>;
