//! Table-level queries. Writers take any `Connection` (a `Transaction`
//! derefs to one); the sink decides transaction boundaries.

pub mod findings;
pub mod metrics;
pub mod status;

pub use findings::{current_findings, replace_findings, FindingRecord};
pub use metrics::{list_metrics, replace_metrics, MetricRecord};
pub use status::{current_status, replace_status, StatusRecord};

use netgauge_core::errors::StorageError;

pub(crate) fn sqlite_error(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

/// SQLite integers are signed; saturate instead of wrapping.
pub(crate) fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

pub(crate) fn to_u64(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
