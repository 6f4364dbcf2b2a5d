//! Full cycle against a file-backed sink: feed payload → collector samples →
//! engine → persisted verdict.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use netgauge_collectors::{HttpFetcher, IncidentCollector};
use netgauge_core::errors::CollectionError;
use netgauge_core::traits::Collector;
use netgauge_core::{GaugeConfig, MetricKind, Sample};
use netgauge_engine::{CycleScheduler, EvaluationEngine, ManualClock, SchedulerConfig};
use netgauge_storage::SqliteVerdictSink;

const OPEN_INCIDENTS: &str = r#"{"incidents": [
    {"name": "Dashboard slow", "status": "investigating", "impact": "minor"},
    {"name": "DNS errors", "status": "identified", "impact": "critical"},
    {"name": "Cache purge delays", "status": "monitoring", "impact": "minor"}
]}"#;

const NO_INCIDENTS: &str = r#"{"incidents": []}"#;

/// Replays canned Statuspage bodies through the real incident parser.
struct ReplayFeed {
    parser: IncidentCollector,
    bodies: Mutex<VecDeque<&'static str>>,
}

impl ReplayFeed {
    fn new(bodies: Vec<&'static str>) -> Self {
        let fetcher = Arc::new(HttpFetcher::new(&GaugeConfig::default().collection).unwrap());
        Self {
            parser: IncidentCollector::cloudflare(fetcher, "http://127.0.0.1:1/unresolved.json"),
            bodies: Mutex::new(bodies.into()),
        }
    }
}

#[async_trait]
impl Collector for ReplayFeed {
    fn name(&self) -> &str {
        "cloudflare"
    }

    fn kinds(&self) -> &[MetricKind] {
        self.parser.kinds()
    }

    async fn collect(&self) -> Result<Vec<Sample>, CollectionError> {
        let body = self.bodies.lock().unwrap().pop_front().unwrap_or(NO_INCIDENTS);
        self.parser.samples(body)
    }
}

#[tokio::test]
async fn verdicts_replace_each_other_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("netgauge.db");
    let config = GaugeConfig::default();
    let metrics = config.metric_configs();

    let sink = SqliteVerdictSink::open(&path).unwrap();
    sink.register_metrics(&metrics).unwrap();
    let sink = Arc::new(sink);

    let engine = EvaluationEngine::from_metrics(&config, &metrics).unwrap();
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap());
    let mut scheduler = CycleScheduler::new(
        engine,
        &metrics,
        sink.clone(),
        clock,
        SchedulerConfig::from_config(&config),
    )
    .with_collector(Arc::new(ReplayFeed::new(vec![OPEN_INCIDENTS, NO_INCIDENTS])));

    let first = scheduler.run_cycles(1).await.remove(0);
    assert!(first.is_clean());
    assert_eq!(first.samples, 3);

    let status = sink.current_status().unwrap().unwrap();
    // Two open incidents at base weight 1, plus one critical bump.
    assert_eq!(status.unweighted_score, 2);
    assert_eq!(status.weighted_score, 4.0);
    assert_eq!(status.timestamp, "2026-09-01 00:00:00Z");

    let findings = sink.current_findings().unwrap();
    let reasons: Vec<&str> = findings.iter().map(|f| f.reason.as_str()).collect();
    assert_eq!(
        reasons,
        vec![
            "[Cloudflare] has an open critical incident: DNS errors",
            "[Cloudflare] has an open minor incident: Dashboard slow",
        ]
    );
    assert!(findings.iter().all(|f| f.metric == "cloudflare"));

    let second = scheduler.run_cycles(1).await.remove(0);
    assert!(second.persisted());

    // A fresh connection sees only the latest verdict.
    let reopened = SqliteVerdictSink::open(&path).unwrap();
    let status = reopened.current_status().unwrap().unwrap();
    assert_eq!(status.weighted_score, 0.0);
    assert_eq!(status.status, "The Internet is degraded no more than usual");
    assert!(reopened.current_findings().unwrap().is_empty());
    assert_eq!(reopened.metrics().unwrap().len(), MetricKind::COUNT);
}
