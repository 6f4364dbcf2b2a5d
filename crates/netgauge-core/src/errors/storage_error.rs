//! Storage errors for the verdict sink.

use super::error_code::{self, GaugeErrorCode};

/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("failed to open verdict store at {path}: {message}")]
    OpenFailed { path: String, message: String },
}

impl GaugeErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MigrationFailed { .. } => error_code::STORAGE_MIGRATION,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
