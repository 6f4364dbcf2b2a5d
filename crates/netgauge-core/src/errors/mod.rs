//! Error handling for netgauge.
//! One error enum per subsystem, `thiserror` only.

pub mod collection_error;
pub mod config_error;
pub mod detection_error;
pub mod error_code;
pub mod gauge_error;
pub mod storage_error;

pub use collection_error::CollectionError;
pub use config_error::ConfigError;
pub use detection_error::DetectionError;
pub use error_code::GaugeErrorCode;
pub use gauge_error::{GaugeError, GaugeResult};
pub use storage_error::StorageError;
