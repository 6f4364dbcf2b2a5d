use std::collections::{BTreeSet, HashMap};
use std::fmt;

use netgauge_core::MetricKind;

/// Weight added per escalation.
pub const ESCALATION_STEP: f64 = 1.0;

/// Incident classes that raise a metric kind's weight for the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EscalationClass {
    /// Incident affects the provider globally.
    GlobalScope,
    /// Incident is reported against several products at once.
    MultipleServices,
    /// Incident has major severity.
    MajorSeverity,
    /// Incident has critical severity. Accumulates once per incident.
    CriticalSeverity,
}

impl EscalationClass {
    /// Accumulating classes add a step per occurrence; the rest add one step
    /// per kind per cycle no matter how many incidents raise them.
    pub fn is_accumulating(self) -> bool {
        matches!(self, Self::CriticalSeverity)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GlobalScope => "global_scope",
            Self::MultipleServices => "multiple_services",
            Self::MajorSeverity => "major_severity",
            Self::CriticalSeverity => "critical_severity",
        }
    }
}

impl fmt::Display for EscalationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
struct KindBumps {
    flags: BTreeSet<EscalationClass>,
    accumulated: u32,
}

/// Transient per-kind weight bumps for one cycle. Built empty at the start of
/// every cycle, so an escalation never outlives the cycle that raised it.
#[derive(Debug, Clone, Default)]
pub struct EffectiveWeights {
    bumps: HashMap<MetricKind, KindBumps>,
}

impl EffectiveWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one escalation. Returns `true` if the kind's weight changed.
    pub fn escalate(&mut self, kind: MetricKind, class: EscalationClass) -> bool {
        let bumps = self.bumps.entry(kind).or_default();
        if class.is_accumulating() {
            bumps.accumulated += 1;
            true
        } else {
            bumps.flags.insert(class)
        }
    }

    /// Total bump for `kind` this cycle.
    pub fn bump(&self, kind: MetricKind) -> f64 {
        self.bumps.get(&kind).map_or(0.0, |b| {
            (b.flags.len() as f64 + f64::from(b.accumulated)) * ESCALATION_STEP
        })
    }

    /// `base` plus this cycle's bump.
    pub fn effective(&self, kind: MetricKind, base: f64) -> f64 {
        base + self.bump(kind)
    }

    pub fn is_escalated(&self, kind: MetricKind) -> bool {
        self.bump(kind) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_classes_count_once() {
        let mut weights = EffectiveWeights::new();
        assert!(weights.escalate(MetricKind::Gcp, EscalationClass::GlobalScope));
        assert!(!weights.escalate(MetricKind::Gcp, EscalationClass::GlobalScope));
        assert_eq!(weights.effective(MetricKind::Gcp, 1.0), 2.0);
    }

    #[test]
    fn critical_count_accumulates_on_top_of_flags() {
        let mut weights = EffectiveWeights::new();
        weights.escalate(MetricKind::Cloudflare, EscalationClass::CriticalSeverity);
        weights.escalate(MetricKind::Cloudflare, EscalationClass::CriticalSeverity);
        weights.escalate(MetricKind::Cloudflare, EscalationClass::MajorSeverity);
        assert_eq!(weights.effective(MetricKind::Cloudflare, 1.0), 4.0);
        assert!(!weights.is_escalated(MetricKind::Slack));
    }
}
