#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use netgauge_core::errors::{CollectionError, StorageError};
use netgauge_core::traits::{Collector, VerdictSink};
use netgauge_core::{MetricConfig, MetricKind, Sample, Verdict};
use netgauge_engine::ManualClock;

/// Metric config with the given weight and threshold, enabled, 1800s poll.
pub fn metric(kind: MetricKind, weight: f64, threshold: Option<f64>) -> MetricConfig {
    MetricConfig {
        kind,
        enabled: true,
        base_weight: weight,
        threshold,
        poll_frequency_secs: 1800,
        description: kind.as_str().to_string(),
    }
}

/// Sink that keeps every persisted verdict.
#[derive(Default)]
pub struct RecordingSink {
    pub verdicts: Mutex<Vec<Verdict>>,
}

impl RecordingSink {
    pub fn last(&self) -> Option<Verdict> {
        self.verdicts.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.verdicts.lock().unwrap().len()
    }
}

impl VerdictSink for RecordingSink {
    fn persist(&self, verdict: &Verdict) -> Result<(), StorageError> {
        self.verdicts.lock().unwrap().push(verdict.clone());
        Ok(())
    }
}

/// Sink that always fails.
pub struct FailingSink;

impl VerdictSink for FailingSink {
    fn persist(&self, _verdict: &Verdict) -> Result<(), StorageError> {
        Err(StorageError::SqliteError {
            message: "database is locked".into(),
        })
    }
}

/// Collector that returns the next scripted batch on every call, and the
/// last batch once the script runs out.
pub struct ScriptedCollector {
    name: String,
    kinds: Vec<MetricKind>,
    batches: Mutex<VecDeque<Vec<Sample>>>,
    last: Mutex<Vec<Sample>>,
    pub calls: Mutex<usize>,
    clock: Option<(ManualClock, Duration)>,
}

impl ScriptedCollector {
    pub fn new(name: &str, kinds: Vec<MetricKind>, batches: Vec<Vec<Sample>>) -> Self {
        Self {
            name: name.to_string(),
            kinds,
            batches: Mutex::new(batches.into()),
            last: Mutex::new(Vec::new()),
            calls: Mutex::new(0),
            clock: None,
        }
    }

    /// Advance `clock` by `work` on every call, simulating a slow source.
    pub fn taking(mut self, clock: ManualClock, work: Duration) -> Self {
        self.clock = Some((clock, work));
        self
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Collector for ScriptedCollector {
    fn name(&self) -> &str {
        &self.name
    }

    fn kinds(&self) -> &[MetricKind] {
        &self.kinds
    }

    async fn collect(&self) -> Result<Vec<Sample>, CollectionError> {
        *self.calls.lock().unwrap() += 1;
        if let Some((clock, work)) = &self.clock {
            clock.advance(*work);
        }
        let mut batches = self.batches.lock().unwrap();
        let mut last = self.last.lock().unwrap();
        if let Some(batch) = batches.pop_front() {
            *last = batch;
        }
        Ok(last.clone())
    }
}

/// Collector that always fails with a network error.
pub struct FailingCollector {
    pub kinds: Vec<MetricKind>,
}

#[async_trait]
impl Collector for FailingCollector {
    fn name(&self) -> &str {
        "broken"
    }

    fn kinds(&self) -> &[MetricKind] {
        &self.kinds
    }

    async fn collect(&self) -> Result<Vec<Sample>, CollectionError> {
        Err(CollectionError::Network {
            url: "https://unreachable.invalid".into(),
            reason: "connection refused".into(),
        })
    }
}

/// Collector that never finishes within any reasonable timeout.
pub struct HangingCollector {
    pub kinds: Vec<MetricKind>,
}

#[async_trait]
impl Collector for HangingCollector {
    fn name(&self) -> &str {
        "hanging"
    }

    fn kinds(&self) -> &[MetricKind] {
        &self.kinds
    }

    async fn collect(&self) -> Result<Vec<Sample>, CollectionError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }
}
