//! Top-level netgauge configuration with layered resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults::DEFAULT_METRICS;
use super::{
    CollectionConfig, EngineConfig, MetricOverride, ObservabilityConfig, StatusConfig,
    StorageConfig,
};
use crate::constants::{CONFIG_FILE_NAME, USER_CONFIG_DIR};
use crate::errors::ConfigError;
use crate::models::{MetricConfig, MetricKind};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`NETGAUGE_*`)
/// 2. Explicit config file (CLI argument or `NETGAUGE_CONFIG`)
/// 3. Project config (`netgauge.toml` in the working directory)
/// 4. User config (`~/.netgauge/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GaugeConfig {
    pub engine: EngineConfig,
    pub metrics: BTreeMap<MetricKind, MetricOverride>,
    pub status: StatusConfig,
    pub collection: CollectionConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl GaugeConfig {
    /// Load configuration with layered resolution, then validate.
    ///
    /// An explicit path that does not exist is an error; the implicit user
    /// and project files are optional.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self, ConfigError> {
        let mut merged = toml::Value::Table(toml::map::Map::new());

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                merge_values(&mut merged, read_toml_value(&user_path)?);
            }
        }

        let project_path = root.join(CONFIG_FILE_NAME);
        if project_path.exists() {
            merge_values(&mut merged, read_toml_value(&project_path)?);
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            merge_values(&mut merged, read_toml_value(path)?);
        }

        let mut config: GaugeConfig =
            merged.try_into().map_err(|e: toml::de::Error| ConfigError::ParseError {
                path: "<merged>".to_string(),
                message: e.to_string(),
            })?;

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Resolved metric registry in registry order: compiled defaults with
    /// `[metrics.<kind>]` overrides applied.
    pub fn metric_configs(&self) -> Vec<MetricConfig> {
        let empty = MetricOverride::default();
        DEFAULT_METRICS
            .iter()
            .map(|default| {
                self.metrics
                    .get(&default.kind)
                    .unwrap_or(&empty)
                    .resolve(default, self.engine.cycle_interval_secs)
            })
            .collect()
    }

    /// Validate the configuration values.
    pub fn validate(config: &GaugeConfig) -> Result<(), ConfigError> {
        if config.engine.max_history == 0 {
            return Err(invalid("engine.max_history", "must be greater than 0"));
        }
        if config.engine.cycle_interval_secs == 0 {
            return Err(invalid("engine.cycle_interval_secs", "must be greater than 0"));
        }
        for (field, value) in [
            ("engine.low_activity_cutoff", config.engine.low_activity_cutoff),
            ("engine.high_activity_cutoff", config.engine.high_activity_cutoff),
            ("engine.collapse_ceiling", config.engine.collapse_ceiling),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a finite, non-negative number"));
            }
        }
        if config.collection.timeout_secs == 0 {
            return Err(invalid("collection.timeout_secs", "must be greater than 0"));
        }
        if config.storage.db_path.trim().is_empty() {
            return Err(invalid("storage.db_path", "must not be empty"));
        }

        for (kind, metric) in &config.metrics {
            if let Some(weight) = metric.weight {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(invalid(
                        &format!("metrics.{kind}.weight"),
                        "must be a finite, non-negative number",
                    ));
                }
            }
            if let Some(threshold) = metric.threshold {
                if !threshold.is_finite() || threshold < 0.0 {
                    return Err(invalid(
                        &format!("metrics.{kind}.threshold"),
                        "must be a finite, non-negative number",
                    ));
                }
            }
            if metric.poll_frequency_secs == Some(0) {
                return Err(invalid(
                    &format!("metrics.{kind}.poll_frequency_secs"),
                    "must be greater than 0",
                ));
            }
        }

        let mut previous: Option<f64> = None;
        for tier in &config.status.tiers {
            if !tier.above.is_finite() || tier.above < 0.0 {
                return Err(invalid("status.tiers", "bounds must be finite and non-negative"));
            }
            if let Some(prev) = previous {
                if tier.above >= prev {
                    return Err(invalid("status.tiers", "bounds must be strictly descending"));
                }
            }
            previous = Some(tier.above);
        }

        Ok(())
    }

    /// Returns the user config path: `~/.netgauge/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Apply environment variable overrides.
    /// Pattern: `NETGAUGE_ENGINE_MAX_HISTORY`, `NETGAUGE_STORAGE_DB_PATH`, etc.
    fn apply_env_overrides(config: &mut GaugeConfig) {
        if let Some(v) = env_parse::<usize>("NETGAUGE_ENGINE_MAX_HISTORY") {
            config.engine.max_history = v;
        }
        if let Some(v) = env_parse::<u64>("NETGAUGE_ENGINE_CYCLE_INTERVAL_SECS") {
            config.engine.cycle_interval_secs = v;
        }
        if let Some(v) = env_parse::<bool>("NETGAUGE_ENGINE_PARALLEL_COLLECTION") {
            config.engine.parallel_collection = v;
        }
        if let Some(v) = env_parse::<u64>("NETGAUGE_COLLECTION_TIMEOUT_SECS") {
            config.collection.timeout_secs = v;
        }
        if let Ok(v) = std::env::var("NETGAUGE_COLLECTION_USER_AGENT") {
            config.collection.user_agent = v;
        }
        if let Ok(v) = std::env::var("NETGAUGE_STORAGE_DB_PATH") {
            config.storage.db_path = v;
        }
        if let Ok(v) = std::env::var("NETGAUGE_OBSERVABILITY_LOG_LEVEL") {
            config.observability.log_level = v;
        }
        if let Some(v) = env_parse::<bool>("NETGAUGE_OBSERVABILITY_JSON_LOGS") {
            config.observability.json_logs = v;
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

fn read_toml_value(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.display().to_string(),
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Deep-merge `overlay` into `base`. Tables merge key by key; any other
/// value in `overlay` replaces the one in `base`.
fn merge_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overlays_nested_tables() {
        let mut base: toml::Value = toml::from_str("[engine]\nmax_history = 4\ncycle_interval_secs = 10").unwrap();
        let overlay: toml::Value = toml::from_str("[engine]\nmax_history = 8").unwrap();
        merge_values(&mut base, overlay);
        let engine = base.get("engine").unwrap();
        assert_eq!(engine.get("max_history").unwrap().as_integer(), Some(8));
        assert_eq!(engine.get("cycle_interval_secs").unwrap().as_integer(), Some(10));
    }

    #[test]
    fn metric_configs_follow_registry_order() {
        let config = GaugeConfig::default();
        let kinds: Vec<MetricKind> = config.metric_configs().iter().map(|m| m.kind).collect();
        assert_eq!(kinds, MetricKind::ALL.to_vec());
    }
}
