use netgauge_core::{Finding, MetricKind};

use super::{messages, round1, DetectorContext, Evaluation};
use crate::history::HistoryStore;

/// Flags when the current value has dropped more than `threshold` percent
/// below the window average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageDropDetector {
    pub threshold: f64,
}

impl PercentageDropDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// `100 − round(current / avg × 100)`, or `None` for a zero baseline.
    /// Halves round to even.
    pub fn drop_percentage(current: f64, avg: f64) -> Option<f64> {
        if avg == 0.0 || !avg.is_finite() || !current.is_finite() {
            return None;
        }
        Some(100.0 - (current / avg * 100.0).round_ties_even())
    }

    pub fn triggers(&self, current: f64, avg: f64) -> Option<f64> {
        Self::drop_percentage(current, avg).filter(|pct| *pct > self.threshold)
    }

    pub fn evaluate(
        &self,
        kind: MetricKind,
        key: &str,
        current: f64,
        history: &mut HistoryStore,
        ctx: &DetectorContext,
    ) -> Evaluation {
        let avg = history.record_and_average(kind, key, current);
        match self.triggers(current, avg) {
            Some(pct) => {
                tracing::debug!(kind = %kind, key = %key, current, avg, pct, "percentage drop finding");
                let message =
                    messages::percentage_drop(kind, key, current, avg, pct, ctx.window_hours);
                Evaluation::finding(Finding::new(kind, key, message))
            }
            None => Evaluation::none(),
        }
    }
}

/// Flags moves of more than `threshold` percent in either direction relative
/// to the window average. Each direction is checked on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetricPercentageDetector {
    pub threshold: f64,
}

impl SymmetricPercentageDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// `round(current / avg × 100, 1)`; a zero baseline reads as 100.
    pub fn percent_of_average(current: f64, avg: f64) -> f64 {
        if avg == 0.0 || !avg.is_finite() || !current.is_finite() {
            return 100.0;
        }
        round1(current / avg * 100.0)
    }

    pub fn evaluate(
        &self,
        kind: MetricKind,
        key: &str,
        current: f64,
        history: &mut HistoryStore,
        ctx: &DetectorContext,
    ) -> Evaluation {
        let avg = history.record_and_average(kind, key, current);
        let pc = Self::percent_of_average(current, avg);
        let mut evaluation = Evaluation::none();

        let increase = pc - 100.0;
        if increase > self.threshold {
            let message =
                messages::symmetric(kind, key, current, avg, increase, true, ctx.window_hours);
            evaluation.findings.push(Finding::new(kind, key, message));
        }
        let decrease = 100.0 - pc;
        if decrease > self.threshold {
            let message =
                messages::symmetric(kind, key, current, avg, decrease, false, ctx.window_hours);
            evaluation.findings.push(Finding::new(kind, key, message));
        }

        if !evaluation.findings.is_empty() {
            tracing::debug!(kind = %kind, key = %key, current, avg, pc, "symmetric percentage finding");
        }
        evaluation
    }
}
