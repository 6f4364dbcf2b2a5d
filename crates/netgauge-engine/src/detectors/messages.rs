//! Finding message text, one phrasing per metric kind.

use netgauge_core::{AddressFamily, Incident, IncidentScope, IncidentStatus, MetricKind};

use super::deviation::Direction;

/// Render a count without a trailing `.0` when it is integral.
pub(crate) fn num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

fn family_label(key: &str) -> String {
    match key {
        "v4" => AddressFamily::V4.to_string(),
        "v6" => AddressFamily::V6.to_string(),
        other => other.to_string(),
    }
}

fn over(family: Option<AddressFamily>) -> String {
    family.map(|f| format!(" over {f}")).unwrap_or_default()
}

pub(crate) fn deviation(
    kind: MetricKind,
    key: &str,
    current: f64,
    avg: f64,
    direction: Direction,
    window_hours: f64,
) -> String {
    let tag = kind.tag();
    let side = direction.as_str();
    let hrs = num(window_hours);
    match kind {
        MetricKind::Origins => format!(
            "{tag} {key} is being originated by {} ASNs, {side} the {hrs}hrs average of {}",
            num(current),
            avg.floor()
        ),
        MetricKind::InvalidRoa => format!(
            "{tag} {} ROAs from {key} have invalid routes being advertised to the DFZ, {} the {hrs}hrs average of {}",
            num(current),
            if direction == Direction::Above { "more than" } else { "fewer than" },
            avg.floor()
        ),
        _ => format!(
            "{tag} {key} is at {}, {side} the {hrs}hrs average of {}",
            num(current),
            num(avg)
        ),
    }
}

pub(crate) fn percentage_drop(
    kind: MetricKind,
    key: &str,
    current: f64,
    avg: f64,
    percentage: f64,
    window_hours: f64,
) -> String {
    let tag = kind.tag();
    let hrs = num(window_hours);
    match kind {
        MetricKind::Prefixes => format!(
            "{tag} AS{key} is originating only {} prefixes, {}% fewer than the {hrs}hrs average of {}",
            num(current),
            num(percentage),
            avg.ceil()
        ),
        MetricKind::TotalRoa => format!(
            "{tag} {key} has decreased published ROAs by {}%, from an average of {} to {}",
            num(percentage),
            avg.floor(),
            num(current)
        ),
        _ => format!(
            "{tag} {key} dropped {}% below the {hrs}hrs average of {}",
            num(percentage),
            num(avg)
        ),
    }
}

pub(crate) fn symmetric(
    kind: MetricKind,
    key: &str,
    current: f64,
    avg: f64,
    change: f64,
    increased: bool,
    window_hours: f64,
) -> String {
    let tag = kind.tag();
    let verb = if increased { "increased" } else { "decreased" };
    let hrs = num(window_hours);
    match kind {
        MetricKind::Dfz => format!(
            "{tag} {} DFZ has {verb} by {change:.1}% from the {hrs}hrs average of {} to {}",
            family_label(key),
            avg.floor(),
            num(current)
        ),
        _ => format!(
            "{tag} {key} has {verb} by {change:.1}% from the {hrs}hrs average of {}",
            num(avg)
        ),
    }
}

pub(crate) fn failure_ratio(
    kind: MetricKind,
    key: &str,
    percent_failed: f64,
    total: u64,
    family: Option<AddressFamily>,
) -> String {
    let tag = kind.tag();
    let pct = format!("{percent_failed:.1}");
    match kind {
        MetricKind::DnsRoot => format!(
            "{tag} {key} failed to respond to {pct}% of {total} RIPE Atlas probes{}",
            over(family)
        ),
        MetricKind::PublicDns => format!(
            "{tag} {key} failed to recurse an A query from {pct}% of {total} RIPE Atlas probes"
        ),
        MetricKind::Ntp => format!(
            "{tag} {key} failed to respond to {pct}% of {total} RIPE Atlas probes{}",
            over(family)
        ),
        MetricKind::Tls => format!(
            "{tag} {pct}% of {total} RIPE Atlas probes received invalid certs for {key}{}",
            over(family)
        ),
        MetricKind::AtlasConnected => format!(
            "{tag} {pct}% of recently active RIPE Atlas probes are disconnected"
        ),
        MetricKind::Aws => format!(
            "{tag} {key} {pct}% of connectivity checks{} failed",
            over(family)
        ),
        _ => format!("{tag} {key}: {pct}% of {total} checks failed{}", over(family)),
    }
}

pub(crate) fn incident(kind: MetricKind, incident: &Incident) -> String {
    let tag = kind.tag();
    let title = &incident.title;
    match kind {
        MetricKind::Gcp => {
            let verb = if incident.multiple_services { "are" } else { "is" };
            match &incident.scope {
                IncidentScope::Global => format!("{tag} {title} {verb} down globally"),
                IncidentScope::Regions(regions) if !regions.is_empty() => {
                    format!("{tag} {title} {verb} down in regions: {}", regions.join(", "))
                }
                _ => format!("{tag} {title} {verb} down"),
            }
        }
        MetricKind::Cloudflare => {
            format!("{tag} has an open {} incident: {title}", incident.severity)
        }
        MetricKind::Discord => match incident.status {
            IncidentStatus::Investigating => format!("{tag} are investigating: {title}"),
            _ => format!("{tag} has an open incident: {title}"),
        },
        MetricKind::Slack => match &incident.scope {
            IncidentScope::Services(services) if !services.is_empty() => {
                format!("{tag} {title} - Services Impacted: {}", services.join(", "))
            }
            _ => format!("{tag} {title}"),
        },
        _ => format!("{tag} {title} ({})", incident.status.as_str()),
    }
}

pub(crate) fn membership(kind: MetricKind, key: &str, asn: u32, visibility: u64) -> String {
    format!(
        "{} {key} is originated by a private or invalid ASN AS{asn}, visible by {visibility}",
        kind.tag()
    )
}
