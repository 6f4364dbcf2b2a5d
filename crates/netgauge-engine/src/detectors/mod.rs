//! Detection strategies.
//!
//! Each metric kind is bound to exactly one strategy at startup by the
//! [`DetectorRegistry`]. Every strategy is total over its numeric inputs:
//! a zero baseline or an empty population is a neutral result, never a fault.

mod deviation;
mod incident;
mod membership;
mod messages;
mod percentage;
mod ratio;
mod registry;

use netgauge_core::tracing_setup::events;
use netgauge_core::{Finding, Sample, SampleValue};

use crate::aggregation::EscalationClass;
use crate::history::HistoryStore;

pub use deviation::{DeviationBand, DeviationDetector, Direction};
pub use incident::{EscalationPolicy, IncidentDetector, IncidentFilter};
pub use membership::{AsnRangeTable, MembershipDetector};
pub use percentage::{PercentageDropDetector, SymmetricPercentageDetector};
pub use ratio::FailureRatioDetector;
pub use registry::DetectorRegistry;

/// Read-only context shared by every detector in a cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorContext {
    /// Hours covered by a full history window, quoted in messages.
    pub window_hours: f64,
}

impl Default for DetectorContext {
    fn default() -> Self {
        Self { window_hours: 2.0 }
    }
}

/// Output of evaluating one sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub findings: Vec<Finding>,
    pub escalations: Vec<EscalationClass>,
}

impl Evaluation {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn finding(finding: Finding) -> Self {
        Self {
            findings: vec![finding],
            escalations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty() && self.escalations.is_empty()
    }
}

/// A comparison strategy bound to one metric kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Detector {
    Deviation(DeviationDetector),
    PercentageDrop(PercentageDropDetector),
    SymmetricPercentage(SymmetricPercentageDetector),
    FailureRatio(FailureRatioDetector),
    Incident(IncidentDetector),
    Membership(MembershipDetector),
}

impl Detector {
    /// Evaluate one sample, updating `history` in place when the strategy is
    /// baselined. A sample whose value variant does not fit the strategy is
    /// skipped with a warning.
    pub fn evaluate(
        &self,
        sample: &Sample,
        history: &mut HistoryStore,
        ctx: &DetectorContext,
    ) -> Evaluation {
        let (kind, key) = (sample.kind, sample.key.as_str());
        match (self, &sample.value) {
            (Self::Deviation(d), SampleValue::Count { value }) => {
                d.evaluate(kind, key, *value, history, ctx)
            }
            (Self::PercentageDrop(d), SampleValue::Count { value }) => {
                d.evaluate(kind, key, *value, history, ctx)
            }
            (Self::SymmetricPercentage(d), SampleValue::Count { value }) => {
                d.evaluate(kind, key, *value, history, ctx)
            }
            (Self::FailureRatio(d), SampleValue::Tally { failed, total, family }) => {
                d.evaluate(kind, key, *failed, *total, *family)
            }
            (Self::Incident(d), SampleValue::Incident { incident }) => d.evaluate(kind, incident),
            (Self::Membership(d), SampleValue::Origin { asn, visibility }) => {
                d.evaluate(kind, key, *asn, *visibility)
            }
            _ => {
                events::sample_mismatch(kind.as_str(), key, sample.value_type());
                Evaluation::none()
            }
        }
    }

    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Deviation(_) => "deviation",
            Self::PercentageDrop(_) => "percentage_drop",
            Self::SymmetricPercentage(_) => "symmetric_percentage",
            Self::FailureRatio(_) => "failure_ratio",
            Self::Incident(_) => "incident",
            Self::Membership(_) => "membership",
        }
    }
}

/// Round to one decimal place, halves to even.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
