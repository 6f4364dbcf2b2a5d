//! The cycle loop: COLLECT → EVALUATE → AGGREGATE → PERSIST → WAIT, forever.

mod clock;
mod due;
mod report;

use std::sync::Arc;
use std::time::Duration;

use netgauge_core::errors::{CollectionError, GaugeErrorCode, StorageError};
use netgauge_core::tracing_setup::{events, spans};
use netgauge_core::traits::{Clock, Collector, VerdictSink};
use netgauge_core::{GaugeConfig, MetricConfig, MetricKind, Sample, Verdict};
use tracing::Instrument;
use uuid::Uuid;

use crate::engine::EvaluationEngine;

pub use clock::{ManualClock, SystemClock};
pub use due::DueTracker;
pub use report::{CycleReport, SourceFailure};

/// Timing knobs for the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub cycle_interval: Duration,
    /// Budget for one collector's whole `collect` call.
    pub collect_timeout: Duration,
    /// Run due collectors as concurrent tasks joined before evaluation.
    pub parallel: bool,
}

impl SchedulerConfig {
    pub fn from_config(config: &GaugeConfig) -> Self {
        Self {
            cycle_interval: Duration::from_secs(config.engine.cycle_interval_secs),
            collect_timeout: Duration::from_secs(config.collection.timeout_secs),
            parallel: config.engine.parallel_collection,
        }
    }
}

/// `max(0, interval − elapsed)`. An overrunning cycle is not compensated.
pub fn next_wait(interval: Duration, elapsed: Duration) -> Duration {
    interval.saturating_sub(elapsed)
}

/// Drives the engine over a set of collectors and publishes every verdict.
pub struct CycleScheduler<C: Clock> {
    collectors: Vec<Arc<dyn Collector>>,
    engine: EvaluationEngine,
    sink: Arc<dyn VerdictSink>,
    clock: C,
    config: SchedulerConfig,
    due: DueTracker,
    cycle: u64,
}

impl<C: Clock> CycleScheduler<C> {
    pub fn new(
        engine: EvaluationEngine,
        metrics: &[MetricConfig],
        sink: Arc<dyn VerdictSink>,
        clock: C,
        config: SchedulerConfig,
    ) -> Self {
        Self {
            collectors: Vec::new(),
            engine,
            sink,
            clock,
            config,
            due: DueTracker::new(metrics),
            cycle: 0,
        }
    }

    /// Register a collector. Collection results are evaluated in
    /// registration order regardless of completion order.
    pub fn add_collector(&mut self, collector: Arc<dyn Collector>) {
        self.collectors.push(collector);
    }

    pub fn with_collector(mut self, collector: Arc<dyn Collector>) -> Self {
        self.add_collector(collector);
        self
    }

    pub fn engine(&self) -> &EvaluationEngine {
        &self.engine
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn cycles_run(&self) -> u64 {
        self.cycle
    }

    /// Run one full cycle without the trailing WAIT.
    pub async fn run_cycle(&mut self) -> CycleReport {
        self.cycle += 1;
        let cycle_id = Uuid::new_v4();
        let span = tracing::info_span!(
            spans::CYCLE,
            cycle = self.cycle,
            cycle_id = %cycle_id
        );
        self.run_cycle_inner(cycle_id).instrument(span).await
    }

    async fn run_cycle_inner(&mut self, cycle_id: Uuid) -> CycleReport {
        let started = self.clock.now();
        let due_kinds: Vec<MetricKind> = self
            .engine
            .registry()
            .kinds()
            .filter(|kind| self.due.is_due(*kind, started))
            .collect();
        let due_collectors: Vec<Arc<dyn Collector>> = self
            .collectors
            .iter()
            .filter(|c| c.kinds().iter().any(|k| due_kinds.contains(k)))
            .cloned()
            .collect();
        events::cycle_started(self.cycle, due_collectors.len());

        // COLLECT
        let outcomes = self
            .collect(&due_collectors)
            .instrument(tracing::info_span!(spans::COLLECT, sources = due_collectors.len()))
            .await;

        let mut samples: Vec<Sample> = Vec::new();
        let mut failures = Vec::new();
        for (collector, outcome) in due_collectors.iter().zip(outcomes) {
            match outcome {
                Ok(batch) => {
                    events::source_collected(collector.name(), batch.len());
                    for kind in collector.kinds().iter().filter(|k| due_kinds.contains(k)) {
                        self.due.mark_collected(*kind, started);
                    }
                    samples.extend(batch.into_iter().filter(|s| due_kinds.contains(&s.kind)));
                }
                Err(error) => {
                    events::source_failed(collector.name(), error.error_code(), &error.to_string());
                    failures.push(SourceFailure {
                        source: collector.name().to_string(),
                        error,
                    });
                }
            }
        }

        // EVALUATE + AGGREGATE
        let findings = self.engine.evaluate(&samples);
        let finished = self.clock.now();
        let duration_secs = elapsed(started, finished).as_secs();
        let verdict = self.engine.verdict(findings, finished, duration_secs);

        // PERSIST
        let persist_error = match self
            .persist(&verdict)
            .instrument(tracing::info_span!(spans::PERSIST))
            .await
        {
            Ok(()) => {
                events::verdict_published(&verdict.status, verdict.weighted_score, verdict.unweighted_score);
                None
            }
            Err(error) => {
                events::persist_failed(&error.to_string());
                Some(error)
            }
        };

        let wait = next_wait(self.config.cycle_interval, elapsed(started, self.clock.now()));
        events::cycle_completed(
            self.cycle,
            verdict.findings.len(),
            duration_secs,
            wait.as_secs(),
        );

        CycleReport {
            cycle_id,
            cycle: self.cycle,
            verdict,
            samples: samples.len(),
            failures,
            persist_error,
            wait,
        }
    }

    /// Hand the verdict to the sink on the blocking pool; sinks do file I/O.
    async fn persist(&self, verdict: &Verdict) -> Result<(), StorageError> {
        let sink = Arc::clone(&self.sink);
        let verdict = verdict.clone();
        let span = tracing::Span::current();
        tokio::task::spawn_blocking(move || span.in_scope(|| sink.persist(&verdict)))
            .await
            .unwrap_or_else(|e| {
                Err(StorageError::SqliteError {
                    message: format!("persist task failed: {e}"),
                })
            })
    }

    /// Run `n` cycles, each followed by its WAIT.
    pub async fn run_cycles(&mut self, n: usize) -> Vec<CycleReport> {
        let mut reports = Vec::with_capacity(n);
        for _ in 0..n {
            let report = self.run_cycle().await;
            self.clock.sleep(report.wait).await;
            reports.push(report);
        }
        reports
    }

    /// Run until the process exits.
    pub async fn run_forever(&mut self) {
        loop {
            let report = self.run_cycle().await;
            self.clock.sleep(report.wait).await;
        }
    }

    async fn collect(
        &self,
        collectors: &[Arc<dyn Collector>],
    ) -> Vec<Result<Vec<Sample>, CollectionError>> {
        let timeout = self.config.collect_timeout;
        if !self.config.parallel {
            let mut outcomes = Vec::with_capacity(collectors.len());
            for collector in collectors {
                outcomes.push(collect_with_timeout(Arc::clone(collector), timeout).await);
            }
            return outcomes;
        }

        let handles: Vec<_> = collectors
            .iter()
            .map(|collector| tokio::spawn(collect_with_timeout(Arc::clone(collector), timeout)))
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for (collector, handle) in collectors.iter().zip(handles) {
            outcomes.push(match handle.await {
                Ok(outcome) => outcome,
                Err(join_error) => Err(CollectionError::Aborted {
                    source_name: collector.name().to_string(),
                    message: join_error.to_string(),
                }),
            });
        }
        outcomes
    }
}

async fn collect_with_timeout(
    collector: Arc<dyn Collector>,
    timeout: Duration,
) -> Result<Vec<Sample>, CollectionError> {
    match tokio::time::timeout(timeout, collector.collect()).await {
        Ok(outcome) => outcome,
        Err(_) => Err(CollectionError::Timeout {
            source_name: collector.name().to_string(),
            timeout_secs: timeout.as_secs(),
        }),
    }
}

fn elapsed(from: chrono::DateTime<chrono::Utc>, to: chrono::DateTime<chrono::Utc>) -> Duration {
    (to - from).to_std().unwrap_or(Duration::ZERO)
}
