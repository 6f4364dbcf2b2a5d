use netgauge_core::{AddressFamily, Finding, MetricKind};

use super::{messages, Evaluation};

/// Flags when more than `threshold` percent of a probe population failed.
/// Does not consult history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FailureRatioDetector {
    pub threshold: f64,
}

impl FailureRatioDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// `failed / total × 100`; an empty population reads as 0.
    pub fn percent_failed(failed: u64, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        failed as f64 / total as f64 * 100.0
    }

    pub fn evaluate(
        &self,
        kind: MetricKind,
        key: &str,
        failed: u64,
        total: u64,
        family: Option<AddressFamily>,
    ) -> Evaluation {
        let percent_failed = Self::percent_failed(failed, total);
        if percent_failed <= self.threshold {
            return Evaluation::none();
        }
        tracing::debug!(kind = %kind, key = %key, failed, total, percent_failed, "failure ratio finding");
        let message = messages::failure_ratio(kind, key, percent_failed, total, family);
        Evaluation::finding(Finding::new(kind, key, message))
    }
}
