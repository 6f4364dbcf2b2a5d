use serde::{Deserialize, Serialize};

use super::defaults;

/// Collector configuration: HTTP budget, endpoints, and measurement tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Per-call timeout budget (seconds). Also bounds each collector as a whole.
    pub timeout_secs: u64,
    pub user_agent: String,
    pub endpoints: EndpointConfig,
    pub atlas: AtlasConfig,
    pub aws: AwsConfig,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            endpoints: EndpointConfig::default(),
            atlas: AtlasConfig::default(),
            aws: AwsConfig::default(),
        }
    }
}

/// Source URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub routing_table: String,
    pub rpki_status: String,
    pub atlas_base: String,
    pub gcp_incidents: String,
    pub cloudflare_incidents: String,
    pub discord_incidents: String,
    pub slack_status: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            routing_table: defaults::DEFAULT_ROUTING_TABLE_URL.to_string(),
            rpki_status: defaults::DEFAULT_RPKI_STATUS_URL.to_string(),
            atlas_base: defaults::DEFAULT_ATLAS_BASE_URL.to_string(),
            gcp_incidents: defaults::DEFAULT_GCP_INCIDENTS_URL.to_string(),
            cloudflare_incidents: defaults::DEFAULT_CLOUDFLARE_INCIDENTS_URL.to_string(),
            discord_incidents: defaults::DEFAULT_DISCORD_INCIDENTS_URL.to_string(),
            slack_status: defaults::DEFAULT_SLACK_STATUS_URL.to_string(),
        }
    }
}

/// One probe target with its per-family measurement IDs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasTarget {
    pub name: String,
    #[serde(default)]
    pub v4: Option<u64>,
    #[serde(default)]
    pub v6: Option<u64>,
}

impl AtlasTarget {
    fn from_pair(name: &str, v4: Option<u64>, v6: Option<u64>) -> Self {
        Self {
            name: name.to_string(),
            v4,
            v6,
        }
    }
}

/// RIPE Atlas measurement tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub root_dns: Vec<AtlasTarget>,
    /// Public resolvers carry a single measurement, stored under `v4`.
    pub public_dns: Vec<AtlasTarget>,
    pub ntp: Vec<AtlasTarget>,
    pub tls: Vec<AtlasTarget>,
    pub probe_status_measurement: u64,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            root_dns: defaults::DEFAULT_ROOT_DNS_MEASUREMENTS
                .iter()
                .map(|(name, v4, v6)| AtlasTarget::from_pair(name, *v4, *v6))
                .collect(),
            public_dns: defaults::DEFAULT_PUBLIC_DNS_MEASUREMENTS
                .iter()
                .map(|(name, id)| AtlasTarget::from_pair(name, Some(*id), None))
                .collect(),
            ntp: defaults::DEFAULT_NTP_MEASUREMENTS
                .iter()
                .map(|(name, v4, v6)| AtlasTarget::from_pair(name, *v4, *v6))
                .collect(),
            tls: defaults::DEFAULT_TLS_MEASUREMENTS
                .iter()
                .map(|(name, v4, v6)| AtlasTarget::from_pair(name, *v4, *v6))
                .collect(),
            probe_status_measurement: defaults::DEFAULT_PROBE_STATUS_MEASUREMENT,
        }
    }
}

/// AWS reachability checkpoint files: JSON maps of `{region: [url, ...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    pub v4_checkpoints: String,
    pub v6_checkpoints: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            v4_checkpoints: defaults::DEFAULT_AWS_V4_FILE.to_string(),
            v6_checkpoints: defaults::DEFAULT_AWS_V6_FILE.to_string(),
        }
    }
}
