use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every metric the engine knows how to evaluate.
///
/// Declaration order is registry order: findings in a verdict are sorted by
/// kind in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Origins,
    BogonAsns,
    Prefixes,
    DnsRoot,
    AtlasConnected,
    InvalidRoa,
    TotalRoa,
    Dfz,
    Ntp,
    PublicDns,
    Aws,
    Gcp,
    Tls,
    Cloudflare,
    Slack,
    Discord,
}

impl MetricKind {
    pub const COUNT: usize = 16;

    pub const ALL: [MetricKind; Self::COUNT] = [
        Self::Origins,
        Self::BogonAsns,
        Self::Prefixes,
        Self::DnsRoot,
        Self::AtlasConnected,
        Self::InvalidRoa,
        Self::TotalRoa,
        Self::Dfz,
        Self::Ntp,
        Self::PublicDns,
        Self::Aws,
        Self::Gcp,
        Self::Tls,
        Self::Cloudflare,
        Self::Slack,
        Self::Discord,
    ];

    /// Stable identifier used in config files and the persisted tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Origins => "origins",
            Self::BogonAsns => "bogon_asns",
            Self::Prefixes => "prefixes",
            Self::DnsRoot => "dns_root",
            Self::AtlasConnected => "atlas_connected",
            Self::InvalidRoa => "invalid_roa",
            Self::TotalRoa => "total_roa",
            Self::Dfz => "dfz",
            Self::Ntp => "ntp",
            Self::PublicDns => "public_dns",
            Self::Aws => "aws",
            Self::Gcp => "gcp",
            Self::Tls => "tls",
            Self::Cloudflare => "cloudflare",
            Self::Slack => "slack",
            Self::Discord => "discord",
        }
    }

    /// Bracketed tag that prefixes every finding message for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Origins => "[Origins]",
            Self::BogonAsns => "[BogonASN]",
            Self::Prefixes => "[Prefixes]",
            Self::DnsRoot | Self::PublicDns => "[DNS]",
            Self::AtlasConnected => "[RIPE Atlas]",
            Self::InvalidRoa | Self::TotalRoa => "[RPKI]",
            Self::Dfz => "[DFZ]",
            Self::Ntp => "[NTP]",
            Self::Aws => "[AWS]",
            Self::Gcp => "[GCP]",
            Self::Tls => "[TLS]",
            Self::Cloudflare => "[Cloudflare]",
            Self::Slack => "[Slack]",
            Self::Discord => "[Discord]",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown metric kind: {s}"))
    }
}
