//! Collection errors. Always non-fatal: a failing source contributes no
//! samples for the cycle.

use super::error_code::{self, GaugeErrorCode};

/// Errors raised by a collector while fetching or normalizing a source.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("malformed payload from {source_name}: {message}")]
    MalformedPayload { source_name: String, message: String },

    #[error("collector {source_name} timed out after {timeout_secs}s")]
    Timeout { source_name: String, timeout_secs: u64 },

    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("collector {source_name} aborted: {message}")]
    Aborted { source_name: String, message: String },
}

impl GaugeErrorCode for CollectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => error_code::COLLECTION_TIMEOUT,
            _ => error_code::COLLECTION_ERROR,
        }
    }
}
