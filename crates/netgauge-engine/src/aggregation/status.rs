use netgauge_core::config::StatusConfig;
use netgauge_core::errors::ConfigError;

/// Ordered `(bound, label)` tiers. The first bound the score strictly exceeds
/// selects the label; scores exceeding no bound get the default label.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTable {
    tiers: Vec<(f64, String)>,
    default_label: String,
}

impl StatusTable {
    /// Build a table, rejecting bounds that are not finite, negative, or not
    /// strictly descending.
    pub fn new(
        tiers: Vec<(f64, String)>,
        default_label: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        for (i, (bound, _)) in tiers.iter().enumerate() {
            if !bound.is_finite() || *bound < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "status.tiers".to_string(),
                    message: format!("bound {bound} must be finite and non-negative"),
                });
            }
            if i > 0 && *bound >= tiers[i - 1].0 {
                return Err(ConfigError::ValidationFailed {
                    field: "status.tiers".to_string(),
                    message: "bounds must be strictly descending".to_string(),
                });
            }
        }
        Ok(Self {
            tiers,
            default_label: default_label.into(),
        })
    }

    pub fn from_config(config: &StatusConfig) -> Result<Self, ConfigError> {
        Self::new(
            config
                .tiers
                .iter()
                .map(|tier| (tier.above, tier.label.clone()))
                .collect(),
            config.default_label.clone(),
        )
    }

    pub fn resolve(&self, score: f64) -> &str {
        self.tiers
            .iter()
            .find(|(bound, _)| score > *bound)
            .map_or(self.default_label.as_str(), |(_, label)| label.as_str())
    }

    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl Default for StatusTable {
    fn default() -> Self {
        let config = StatusConfig::default();
        Self {
            tiers: config
                .tiers
                .into_iter()
                .map(|tier| (tier.above, tier.label))
                .collect(),
            default_label: config.default_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StatusTable {
        StatusTable::new(
            vec![(10.0, "high".to_string()), (5.0, "mid".to_string()), (0.0, "low".to_string())],
            "none",
        )
        .unwrap()
    }

    #[test]
    fn bound_must_be_strictly_exceeded() {
        let table = table();
        assert_eq!(table.resolve(10.0), "mid");
        assert_eq!(table.resolve(10.01), "high");
        assert_eq!(table.resolve(5.0), "low");
        assert_eq!(table.resolve(0.0), "none");
    }

    #[test]
    fn ascending_bounds_are_rejected() {
        let result = StatusTable::new(
            vec![(1.0, "a".to_string()), (2.0, "b".to_string())],
            "none",
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_table_always_returns_default() {
        let table = StatusTable::new(Vec::new(), "calm").unwrap();
        assert_eq!(table.resolve(1_000.0), "calm");
    }
}
