use netgauge_core::models::*;

#[test]
fn metric_kind_round_trips_through_str() {
    for kind in MetricKind::ALL {
        assert_eq!(kind.as_str().parse::<MetricKind>().unwrap(), kind);
    }
    assert!("bogus".parse::<MetricKind>().is_err());
}

#[test]
fn metric_kind_serializes_snake_case() {
    let json = serde_json::to_string(&MetricKind::AtlasConnected).unwrap();
    assert_eq!(json, "\"atlas_connected\"");
}

#[test]
fn registry_order_follows_declaration() {
    let mut shuffled = vec![MetricKind::Discord, MetricKind::Origins, MetricKind::Dfz];
    shuffled.sort();
    assert_eq!(
        shuffled,
        vec![MetricKind::Origins, MetricKind::Dfz, MetricKind::Discord]
    );
}

#[test]
fn severity_is_ordered() {
    assert!(Severity::Critical > Severity::Major);
    assert!(Severity::Major > Severity::Minor);
    assert!(Severity::Minor > Severity::None);
    assert_eq!(Severity::from_impact("Critical"), Severity::Critical);
    assert_eq!(Severity::from_impact("maintenance"), Severity::None);
}

#[test]
fn incident_status_parses_provider_strings() {
    assert_eq!(IncidentStatus::parse("investigating"), IncidentStatus::Investigating);
    assert_eq!(IncidentStatus::parse("IDENTIFIED"), IncidentStatus::Identified);
    assert_eq!(IncidentStatus::parse("resolved"), IncidentStatus::Resolved);
    assert_eq!(IncidentStatus::parse("scheduled"), IncidentStatus::Other);
}

#[test]
fn address_family_from_prefix() {
    assert_eq!(AddressFamily::of_prefix("192.0.2.0/24"), AddressFamily::V4);
    assert_eq!(AddressFamily::of_prefix("2001:db8::/32"), AddressFamily::V6);
    assert_eq!(AddressFamily::V6.to_string(), "IPv6");
}

#[test]
fn sample_value_serializes_tagged() {
    let sample = Sample::tally(MetricKind::Ntp, "europe.pool.ntp.org", 1, 10, Some(AddressFamily::V4));
    let json = serde_json::to_value(&sample).unwrap();
    assert_eq!(json["value"]["type"], "tally");
    assert_eq!(json["value"]["family"], "v4");
    assert_eq!(sample.value_type(), "tally");
}

#[test]
fn incident_sample_is_keyed_by_title() {
    let incident = Incident {
        provider: "Discord".into(),
        title: "API latency".into(),
        status: IncidentStatus::Investigating,
        severity: Severity::Major,
        scope: IncidentScope::Unspecified,
        multiple_services: false,
        url: None,
    };
    let sample = Sample::incident(MetricKind::Discord, incident);
    assert_eq!(sample.key, "API latency");
}

#[test]
fn verdict_timestamp_renders_utc_seconds() {
    use chrono::TimeZone;
    let verdict = Verdict {
        status: "ok".into(),
        weighted_score: 0.0,
        unweighted_score: 0,
        timestamp: chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap(),
        duration_secs: 42,
        findings: vec![],
    };
    assert_eq!(verdict.timestamp_string(), "2024-03-01 12:30:05Z");
    assert!(verdict.is_clean());
}

#[test]
fn finding_starts_unweighted() {
    let finding = Finding::new(MetricKind::Origins, "192.0.2.0/24", "msg");
    assert_eq!(finding.weight, 0.0);
    assert_eq!(finding.with_weight(0.1).weight, 0.1);
}
