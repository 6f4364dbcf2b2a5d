//! Verdict sink tests: replacement semantics, registry, file-backed reads.

use chrono::{TimeZone, Utc};
use netgauge_core::traits::VerdictSink;
use netgauge_core::{Finding, GaugeConfig, MetricKind, Verdict};
use netgauge_storage::queries::status::status_rows;
use netgauge_storage::SqliteVerdictSink;
use tempfile::TempDir;

fn verdict(status: &str, findings: Vec<Finding>) -> Verdict {
    let weighted_score = findings.iter().map(|f| f.weight).sum();
    Verdict {
        status: status.to_string(),
        weighted_score,
        unweighted_score: findings.len() as u64,
        timestamp: Utc.with_ymd_and_hms(2026, 7, 14, 8, 30, 0).unwrap(),
        duration_secs: 95,
        findings,
    }
}

fn finding(kind: MetricKind, key: &str, weight: f64) -> Finding {
    Finding::new(kind, key, format!("{} {key} looks wrong", kind.tag())).with_weight(weight)
}

#[test]
fn persist_writes_status_and_findings() {
    let sink = SqliteVerdictSink::open_in_memory().unwrap();
    let v = verdict(
        "The Internet is only partially degraded",
        vec![
            finding(MetricKind::DnsRoot, "k.root-servers.net", 10.0),
            finding(MetricKind::Ntp, "pool.ntp.org", 2.0),
        ],
    );
    sink.persist(&v).unwrap();

    let status = sink.current_status().unwrap().unwrap();
    assert_eq!(status.status, "The Internet is only partially degraded");
    assert_eq!(status.timestamp, "2026-07-14 08:30:00Z");
    assert_eq!(status.duration_secs, 95);
    assert_eq!(status.weighted_score, 12.0);
    assert_eq!(status.unweighted_score, 2);

    let findings = sink.current_findings().unwrap();
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].metric, "dns_root");
    assert_eq!(findings[0].entity, "k.root-servers.net");
    assert_eq!(findings[0].reason, "[DNS] k.root-servers.net looks wrong");
    assert_eq!(findings[0].weight, 10.0);
    assert_eq!(findings[1].position, 1);
}

#[test]
fn empty_verdict_clears_previous_findings() {
    let sink = SqliteVerdictSink::open_in_memory().unwrap();
    sink.persist(&verdict(
        "degraded",
        vec![finding(MetricKind::Aws, "us-east-1", 6.0)],
    ))
    .unwrap();
    sink.persist(&verdict("calm", Vec::new())).unwrap();

    assert!(sink.current_findings().unwrap().is_empty());
    assert_eq!(sink.current_status().unwrap().unwrap().status, "calm");
}

#[test]
fn status_table_never_holds_more_than_one_row() {
    let sink = SqliteVerdictSink::open_in_memory().unwrap();
    assert!(sink.current_status().unwrap().is_none());
    for i in 0..5 {
        sink.persist(&verdict(&format!("cycle {i}"), Vec::new())).unwrap();
    }
    let rows = sink.database().with_reader(status_rows).unwrap();
    assert_eq!(rows, 1);
    assert_eq!(sink.current_status().unwrap().unwrap().status, "cycle 4");
}

#[test]
fn register_metrics_replaces_registry() {
    let sink = SqliteVerdictSink::open_in_memory().unwrap();
    let metrics = GaugeConfig::default().metric_configs();
    assert_eq!(sink.register_metrics(&metrics).unwrap(), MetricKind::COUNT);
    assert_eq!(sink.register_metrics(&metrics[..3]).unwrap(), 3);

    let stored = sink.metrics().unwrap();
    assert_eq!(stored.len(), 3);
    let origins = stored.iter().find(|m| m.metric == "origins").unwrap();
    assert_eq!(origins.weight, 0.1);
    assert_eq!(origins.frequency_secs, 1800);
    assert!(origins.enabled);
}

#[test]
fn file_backed_sink_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("netgauge.db");
    {
        let sink = SqliteVerdictSink::open(&path).unwrap();
        sink.persist(&verdict(
            "degraded",
            vec![finding(MetricKind::Tls, "example.com", 1.0)],
        ))
        .unwrap();
        assert_eq!(sink.current_findings().unwrap().len(), 1);
    }

    let reopened = SqliteVerdictSink::open(&path).unwrap();
    assert_eq!(reopened.current_status().unwrap().unwrap().status, "degraded");
    assert_eq!(reopened.current_findings().unwrap()[0].metric, "tls");
}

#[test]
fn open_in_unwritable_location_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("nested").join("netgauge.db");
    let result = SqliteVerdictSink::open(&path);
    assert!(matches!(
        result,
        Err(netgauge_core::errors::StorageError::OpenFailed { .. })
    ));
}
