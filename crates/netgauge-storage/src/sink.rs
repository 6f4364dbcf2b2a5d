//! SQLite-backed `VerdictSink`.

use std::path::Path;

use netgauge_core::errors::StorageError;
use netgauge_core::traits::VerdictSink;
use netgauge_core::{MetricConfig, Verdict};

use crate::connection::writer::with_immediate_transaction;
use crate::connection::DatabaseManager;
use crate::queries::{self, FindingRecord, MetricRecord, StatusRecord};

/// Publishes verdicts to SQLite. Status and findings are replaced in one
/// immediate transaction, so a reader sees either the previous verdict or
/// the new one.
pub struct SqliteVerdictSink {
    db: DatabaseManager,
}

impl SqliteVerdictSink {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open(path)?,
        })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    /// Replace the stored metric registry with `metrics`.
    pub fn register_metrics(&self, metrics: &[MetricConfig]) -> Result<usize, StorageError> {
        let records: Vec<MetricRecord> = metrics.iter().map(MetricRecord::from).collect();
        let count = self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| queries::replace_metrics(tx, &records))
        })?;
        tracing::info!(metrics = count, "metric registry recorded");
        Ok(count)
    }

    pub fn metrics(&self) -> Result<Vec<MetricRecord>, StorageError> {
        self.db.with_reader(queries::list_metrics)
    }

    pub fn current_status(&self) -> Result<Option<StatusRecord>, StorageError> {
        self.db.with_reader(queries::current_status)
    }

    pub fn current_findings(&self) -> Result<Vec<FindingRecord>, StorageError> {
        self.db.with_reader(queries::current_findings)
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }
}

impl VerdictSink for SqliteVerdictSink {
    fn persist(&self, verdict: &Verdict) -> Result<(), StorageError> {
        let status = StatusRecord::from(verdict);
        let written = self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                queries::replace_status(tx, &status)?;
                queries::replace_findings(tx, &verdict.findings)
            })
        })?;
        tracing::debug!(
            status = %verdict.status,
            findings = written,
            timestamp = %status.timestamp,
            "verdict persisted"
        );
        Ok(())
    }
}
