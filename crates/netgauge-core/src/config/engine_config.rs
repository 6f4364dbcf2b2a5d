use serde::{Deserialize, Serialize};

use super::defaults;

/// Evaluation engine and scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Sliding window capacity per (metric kind, entity).
    pub max_history: usize,
    /// Target period of one full cycle (seconds).
    pub cycle_interval_secs: u64,
    /// Deviation band: "above" only flags when the average is below this.
    pub low_activity_cutoff: f64,
    /// Deviation band: "below" only flags when the average is above this.
    pub high_activity_cutoff: f64,
    /// Deviation band: "below" only flags when the current value is under this.
    pub collapse_ceiling: f64,
    /// Run collectors as concurrent tasks joined before evaluation.
    pub parallel_collection: bool,
}

impl EngineConfig {
    /// Hours covered by a full history window, used in finding messages.
    pub fn window_hours(&self) -> f64 {
        (self.max_history as f64 * self.cycle_interval_secs as f64) / 3600.0
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_history: defaults::DEFAULT_MAX_HISTORY,
            cycle_interval_secs: defaults::DEFAULT_CYCLE_INTERVAL_SECS,
            low_activity_cutoff: defaults::DEFAULT_LOW_ACTIVITY_CUTOFF,
            high_activity_cutoff: defaults::DEFAULT_HIGH_ACTIVITY_CUTOFF,
            collapse_ceiling: defaults::DEFAULT_COLLAPSE_CEILING,
            parallel_collection: defaults::DEFAULT_PARALLEL_COLLECTION,
        }
    }
}
