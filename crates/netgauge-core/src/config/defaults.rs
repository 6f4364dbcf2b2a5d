//! Compiled defaults. Single source of truth for every config section.

use crate::models::MetricKind;

// Engine
pub const DEFAULT_MAX_HISTORY: usize = 4;
pub const DEFAULT_CYCLE_INTERVAL_SECS: u64 = 1800;
pub const DEFAULT_LOW_ACTIVITY_CUTOFF: f64 = 2.0;
pub const DEFAULT_HIGH_ACTIVITY_CUTOFF: f64 = 5.0;
pub const DEFAULT_COLLAPSE_CEILING: f64 = 2.0;
pub const DEFAULT_PARALLEL_COLLECTION: bool = true;

// Collection
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_USER_AGENT: &str = "netgauge";
pub const DEFAULT_ROUTING_TABLE_URL: &str = "https://bgp.tools/table.jsonl";
pub const DEFAULT_RPKI_STATUS_URL: &str = "https://rpki-validator.ripe.net/api/v1/status";
pub const DEFAULT_ATLAS_BASE_URL: &str = "https://atlas.ripe.net/api/v2/measurements/";
pub const DEFAULT_GCP_INCIDENTS_URL: &str = "https://status.cloud.google.com/incidents.json";
pub const DEFAULT_CLOUDFLARE_INCIDENTS_URL: &str =
    "https://www.cloudflarestatus.com/api/v2/incidents/unresolved.json";
pub const DEFAULT_DISCORD_INCIDENTS_URL: &str =
    "https://discordstatus.com/api/v2/incidents/unresolved.json";
pub const DEFAULT_SLACK_STATUS_URL: &str = "https://status.slack.com/api/v2.0.0/current";
pub const DEFAULT_AWS_V4_FILE: &str = "aws_ec2_checkpoints.json";
pub const DEFAULT_AWS_V6_FILE: &str = "aws_ec2_checkpointsv6.json";
pub const DEFAULT_PROBE_STATUS_MEASUREMENT: u64 = 7000;

// Storage
pub const DEFAULT_DB_PATH: &str = "netgauge.db";

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// Status
pub const DEFAULT_STATUS_LABEL: &str = "The Internet is degraded no more than usual";

/// `(bound, label)` pairs, strictly descending. The first bound a score
/// strictly exceeds selects the label.
pub const DEFAULT_STATUS_TIERS: &[(f64, &str)] = &[
    (200.0, "The Internet is totally, utterly, and completely degraded"),
    (100.0, "The Internet is completely degraded"),
    (60.0, "The Internet is utterly degraded"),
    (50.0, "The Internet is totally degraded"),
    (40.0, "The Internet is really degraded"),
    (30.0, "The Internet is rather degraded"),
    (20.0, "The Internet is quite degraded"),
    (15.0, "The Internet is pretty degraded"),
    (10.0, "The Internet is somewhat degraded"),
    (5.0, "The Internet is only partially degraded"),
    (0.0, "The Internet is just a little bit degraded"),
];

/// Compiled per-metric defaults.
#[derive(Debug, Clone, Copy)]
pub struct MetricDefault {
    pub kind: MetricKind,
    pub weight: f64,
    pub threshold: Option<f64>,
    pub description: &'static str,
}

pub const DEFAULT_METRICS: [MetricDefault; MetricKind::COUNT] = [
    MetricDefault {
        kind: MetricKind::Origins,
        weight: 0.1,
        threshold: None,
        description: "Number of origin AS per prefix",
    },
    MetricDefault {
        kind: MetricKind::BogonAsns,
        weight: 0.01,
        threshold: Some(100.0),
        description: "Prefixes originated by private or invalid ASNs",
    },
    MetricDefault {
        kind: MetricKind::Prefixes,
        weight: 0.2,
        threshold: Some(85.0),
        description: "Dramatic decrease in advertised prefixes by an AS",
    },
    MetricDefault {
        kind: MetricKind::DnsRoot,
        weight: 10.0,
        threshold: Some(10.0),
        description: "DNS root-server reachability using RIPE Atlas",
    },
    MetricDefault {
        kind: MetricKind::AtlasConnected,
        weight: 1.0,
        threshold: Some(20.0),
        description: "RIPE Atlas probe connected status",
    },
    MetricDefault {
        kind: MetricKind::InvalidRoa,
        weight: 1.0,
        threshold: None,
        description: "RPKI ROA validity",
    },
    MetricDefault {
        kind: MetricKind::TotalRoa,
        weight: 5.0,
        threshold: Some(90.0),
        description: "Dramatic decrease in published RPKI ROAs",
    },
    MetricDefault {
        kind: MetricKind::Dfz,
        weight: 3.0,
        threshold: Some(1.0),
        description: "Dramatic increase or decrease of DFZ size",
    },
    MetricDefault {
        kind: MetricKind::Ntp,
        weight: 2.0,
        threshold: Some(30.0),
        description: "NTP Pool Project checks using RIPE Atlas",
    },
    MetricDefault {
        kind: MetricKind::PublicDns,
        weight: 5.0,
        threshold: Some(25.0),
        description: "Public DNS resolver checks using RIPE Atlas",
    },
    MetricDefault {
        kind: MetricKind::Aws,
        weight: 6.0,
        threshold: Some(10.0),
        description: "AWS connectivity checks",
    },
    MetricDefault {
        kind: MetricKind::Gcp,
        weight: 1.0,
        threshold: None,
        description: "GCP incident notifications",
    },
    MetricDefault {
        kind: MetricKind::Tls,
        weight: 1.0,
        threshold: Some(10.0),
        description: "TLS cert validation of popular sites, using RIPE Atlas",
    },
    MetricDefault {
        kind: MetricKind::Cloudflare,
        weight: 1.0,
        threshold: None,
        description: "Open Cloudflare incidents",
    },
    MetricDefault {
        kind: MetricKind::Slack,
        weight: 1.0,
        threshold: None,
        description: "Open Slack incidents",
    },
    MetricDefault {
        kind: MetricKind::Discord,
        weight: 1.0,
        threshold: None,
        description: "Open Discord incidents",
    },
];

/// Root DNS measurement IDs: `(server, v4, v6)`.
pub const DEFAULT_ROOT_DNS_MEASUREMENTS: &[(&str, Option<u64>, Option<u64>)] = &[
    ("a.root-servers.net", Some(10009), Some(10509)),
    ("b.root-servers.net", Some(10010), Some(10510)),
    ("c.root-servers.net", Some(10011), Some(10511)),
    ("d.root-servers.net", Some(10012), Some(10512)),
    ("e.root-servers.net", Some(10013), Some(10513)),
    ("f.root-servers.net", Some(10004), Some(10504)),
    ("g.root-servers.net", Some(10014), Some(10514)),
    ("h.root-servers.net", Some(10015), Some(10515)),
    ("i.root-servers.net", Some(10005), Some(10505)),
    ("j.root-servers.net", Some(10016), Some(10516)),
    ("k.root-servers.net", Some(10001), Some(10501)),
    ("l.root-servers.net", Some(10008), Some(10510)),
    ("m.root-servers.net", Some(10009), Some(10506)),
];

/// Public resolver measurement IDs: `(resolver, measurement)`.
pub const DEFAULT_PUBLIC_DNS_MEASUREMENTS: &[(&str, u64)] = &[
    ("8.8.8.8", 43869257),
    ("1.1.1.1", 12001626),
    ("1.0.0.1", 62471673),
    ("208.67.222.123", 56955213),
    ("208.67.220.123", 56955214),
    ("2001:4860:4860::8888", 62469965),
    ("2001:4860:4860::8844", 62470008),
    ("2606:4700:4700::1111", 62469962),
    ("2606:4700:4700::1001", 62469963),
    ("2620:119:35::35", 62469959),
    ("2620:119:53::53", 62469961),
];

/// NTP pool measurement IDs: `(pool, v4, v6)`.
pub const DEFAULT_NTP_MEASUREMENTS: &[(&str, Option<u64>, Option<u64>)] = &[
    ("africa.pool.ntp.org", Some(58750160), None),
    ("asia.pool.ntp.org", Some(58750162), None),
    ("europe.pool.ntp.org", Some(58750164), None),
    ("north-america.pool.ntp.org", Some(58750166), None),
    ("oceania.pool.ntp.org", Some(58750168), None),
    ("south-america.pool.ntp.org", Some(58750170), None),
    ("2.africa.pool.ntp.org", None, Some(58749906)),
    ("2.asia.pool.ntp.org", None, Some(58749908)),
    ("2.europe.pool.ntp.org", None, Some(58749909)),
    ("2.north-america.pool.ntp.org", None, Some(58749919)),
    ("2.oceania.pool.ntp.org", None, Some(58749922)),
    ("2.south-america.pool.ntp.org", None, Some(58749923)),
];

/// TLS measurement IDs: `(site, v4, v6)`.
pub const DEFAULT_TLS_MEASUREMENTS: &[(&str, Option<u64>, Option<u64>)] = &[
    ("www.youtube.com", Some(62517825), Some(62517823)),
    ("www.netflix.com", Some(62517771), Some(62517770)),
    ("www.amazon.com", Some(62517773), Some(62517772)),
    ("www.ebay.com", Some(62517853), None),
    ("www.paypal.com", Some(62517854), None),
    ("www.tiktok.com", Some(62696644), None),
    ("www.aliexpress.com", Some(62696649), None),
];
