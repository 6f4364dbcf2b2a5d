use serde::{Deserialize, Serialize};

use super::defaults;

/// One status tier: selected when the weighted score strictly exceeds `above`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusTierConfig {
    pub above: f64,
    pub label: String,
}

/// Status label table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Label used when no tier bound is exceeded.
    pub default_label: String,
    /// Tiers, strictly descending by `above`.
    pub tiers: Vec<StatusTierConfig>,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            default_label: defaults::DEFAULT_STATUS_LABEL.to_string(),
            tiers: defaults::DEFAULT_STATUS_TIERS
                .iter()
                .map(|(above, label)| StatusTierConfig {
                    above: *above,
                    label: label.to_string(),
                })
                .collect(),
        }
    }
}
