//! Configuration system for netgauge.
//! TOML-based, layered resolution: env > project file > user file > defaults.

pub mod collection_config;
pub mod defaults;
pub mod engine_config;
pub mod gauge_config;
pub mod metrics_config;
pub mod observability_config;
pub mod status_config;
pub mod storage_config;

pub use collection_config::{AtlasConfig, AtlasTarget, AwsConfig, CollectionConfig, EndpointConfig};
pub use engine_config::EngineConfig;
pub use gauge_config::GaugeConfig;
pub use metrics_config::MetricOverride;
pub use observability_config::ObservabilityConfig;
pub use status_config::{StatusConfig, StatusTierConfig};
pub use storage_config::StorageConfig;
