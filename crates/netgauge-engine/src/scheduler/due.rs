use std::collections::HashMap;

use chrono::{DateTime, Utc};
use netgauge_core::{MetricConfig, MetricKind};

/// Tracks when each metric kind was last collected and whether its poll
/// frequency has elapsed.
#[derive(Debug, Clone, Default)]
pub struct DueTracker {
    frequencies: HashMap<MetricKind, chrono::Duration>,
    last_collected: HashMap<MetricKind, DateTime<Utc>>,
}

impl DueTracker {
    pub fn new(metrics: &[MetricConfig]) -> Self {
        Self {
            frequencies: metrics
                .iter()
                .map(|m| {
                    let secs = i64::try_from(m.poll_frequency_secs).unwrap_or(i64::MAX);
                    (m.kind, chrono::Duration::try_seconds(secs).unwrap_or(chrono::Duration::MAX))
                })
                .collect(),
            last_collected: HashMap::new(),
        }
    }

    /// Never collected, or collected at least one poll period ago. Kinds
    /// without a configured frequency are due every cycle.
    pub fn is_due(&self, kind: MetricKind, now: DateTime<Utc>) -> bool {
        match (self.last_collected.get(&kind), self.frequencies.get(&kind)) {
            (None, _) | (Some(_), None) => true,
            (Some(last), Some(every)) => now - *last >= *every,
        }
    }

    pub fn mark_collected(&mut self, kind: MetricKind, at: DateTime<Utc>) {
        self.last_collected.insert(kind, at);
    }

    pub fn last_collected(&self, kind: MetricKind) -> Option<DateTime<Utc>> {
        self.last_collected.get(&kind).copied()
    }
}
