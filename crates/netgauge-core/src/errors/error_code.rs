//! Stable machine-readable error codes.

/// Every netgauge error exposes a stable code for log aggregation.
pub trait GaugeErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const COLLECTION_ERROR: &str = "COLLECTION_ERROR";
pub const COLLECTION_TIMEOUT: &str = "COLLECTION_TIMEOUT";
pub const DETECTION_ERROR: &str = "DETECTION_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const STORAGE_MIGRATION: &str = "STORAGE_MIGRATION";
