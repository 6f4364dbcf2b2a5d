use serde::{Deserialize, Serialize};

use super::MetricKind;

/// One detected anomaly within a single evaluation cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: MetricKind,
    pub key: String,
    pub message: String,
    /// Zero when emitted by a detector; the aggregator stamps the kind's
    /// effective weight when it builds the verdict.
    pub weight: f64,
}

impl Finding {
    pub fn new(kind: MetricKind, key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            message: message.into(),
            weight: 0.0,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}
