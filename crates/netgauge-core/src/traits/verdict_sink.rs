use crate::errors::StorageError;
use crate::models::Verdict;

/// Publish interface the engine calls once per cycle.
///
/// `persist` must replace the current status record and the whole findings
/// collection atomically: a reader never observes a partial or appended
/// verdict.
pub trait VerdictSink: Send + Sync {
    fn persist(&self, verdict: &Verdict) -> Result<(), StorageError>;
}
