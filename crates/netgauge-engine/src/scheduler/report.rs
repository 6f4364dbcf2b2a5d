use std::time::Duration;

use netgauge_core::errors::{CollectionError, StorageError};
use netgauge_core::Verdict;
use uuid::Uuid;

/// A collector that yielded no samples this cycle, and why.
#[derive(Debug)]
pub struct SourceFailure {
    pub source: String,
    pub error: CollectionError,
}

/// Outcome of one cycle. Non-fatal errors are accumulated here instead of
/// aborting the loop.
#[derive(Debug)]
pub struct CycleReport {
    pub cycle_id: Uuid,
    pub cycle: u64,
    pub verdict: Verdict,
    /// Samples evaluated this cycle.
    pub samples: usize,
    pub failures: Vec<SourceFailure>,
    pub persist_error: Option<StorageError>,
    /// WAIT that follows this cycle.
    pub wait: Duration,
}

impl CycleReport {
    pub fn persisted(&self) -> bool {
        self.persist_error.is_none()
    }

    pub fn failed_sources(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.source.as_str()).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.persist_error.is_none()
    }
}
