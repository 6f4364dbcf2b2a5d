use serde::{Deserialize, Serialize};

use super::MetricKind;

/// Static per-metric configuration, resolved once at startup and read-only
/// afterwards. Transient weight escalation lives in the engine, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricConfig {
    pub kind: MetricKind,
    pub enabled: bool,
    pub base_weight: f64,
    /// Percentage threshold (or visibility floor for membership checks).
    pub threshold: Option<f64>,
    pub poll_frequency_secs: u64,
    pub description: String,
}
