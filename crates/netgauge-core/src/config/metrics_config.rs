use serde::{Deserialize, Serialize};

use super::defaults::MetricDefault;
use crate::models::MetricConfig;

/// Per-metric overrides from `[metrics.<kind>]`. Unset fields keep the
/// compiled default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricOverride {
    pub enabled: Option<bool>,
    pub weight: Option<f64>,
    pub threshold: Option<f64>,
    pub poll_frequency_secs: Option<u64>,
    pub description: Option<String>,
}

impl MetricOverride {
    /// Resolve a full `MetricConfig` from a compiled default plus this override.
    pub fn resolve(&self, default: &MetricDefault, default_poll_secs: u64) -> MetricConfig {
        MetricConfig {
            kind: default.kind,
            enabled: self.enabled.unwrap_or(true),
            base_weight: self.weight.unwrap_or(default.weight),
            threshold: self.threshold.or(default.threshold),
            poll_frequency_secs: self.poll_frequency_secs.unwrap_or(default_poll_secs),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| default.description.to_string()),
        }
    }
}
