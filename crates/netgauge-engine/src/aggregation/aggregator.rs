use std::collections::HashMap;

use chrono::{DateTime, Utc};
use netgauge_core::tracing_setup::events;
use netgauge_core::{Finding, MetricConfig, MetricKind, Verdict};

use super::{EffectiveWeights, EscalationClass, StatusTable};

/// Folds a cycle's findings into a verdict.
///
/// `weighted_score = Σ findings[kind] × effective_weight[kind]`, where the
/// effective weight is the configured base weight plus any escalation raised
/// during the current cycle.
#[derive(Debug, Clone)]
pub struct ScoreAggregator {
    base_weights: HashMap<MetricKind, f64>,
    status: StatusTable,
    weights: EffectiveWeights,
}

impl ScoreAggregator {
    pub fn new(metrics: &[MetricConfig], status: StatusTable) -> Self {
        Self {
            base_weights: metrics.iter().map(|m| (m.kind, m.base_weight)).collect(),
            status,
            weights: EffectiveWeights::new(),
        }
    }

    /// Discard every escalation from the previous cycle. Called before any
    /// detector runs.
    pub fn begin_cycle(&mut self) {
        self.weights = EffectiveWeights::new();
    }

    pub fn escalate(&mut self, kind: MetricKind, class: EscalationClass) {
        if self.weights.escalate(kind, class) {
            events::weight_escalated(kind.as_str(), class.as_str(), self.effective_weight(kind));
        }
    }

    pub fn base_weight(&self, kind: MetricKind) -> f64 {
        self.base_weights.get(&kind).copied().unwrap_or(0.0)
    }

    pub fn effective_weight(&self, kind: MetricKind) -> f64 {
        self.weights.effective(kind, self.base_weight(kind))
    }

    pub fn weights(&self) -> &EffectiveWeights {
        &self.weights
    }

    pub fn status_table(&self) -> &StatusTable {
        &self.status
    }

    /// Stamp each finding with its effective weight, order them by metric
    /// kind then message, and build the verdict.
    pub fn aggregate(
        &self,
        mut findings: Vec<Finding>,
        timestamp: DateTime<Utc>,
        duration_secs: u64,
    ) -> Verdict {
        findings.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.message.cmp(&b.message)));

        let mut weighted_score = 0.0;
        for finding in &mut findings {
            finding.weight = self.effective_weight(finding.kind);
            weighted_score += finding.weight;
        }
        let unweighted_score = findings.len() as u64;

        Verdict {
            status: self.status.resolve(weighted_score).to_string(),
            weighted_score,
            unweighted_score,
            timestamp,
            duration_secs,
            findings,
        }
    }
}
