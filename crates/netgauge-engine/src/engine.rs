use chrono::{DateTime, Utc};
use netgauge_core::tracing_setup::spans;
use netgauge_core::{Finding, GaugeConfig, GaugeResult, MetricConfig, Sample, Verdict};

use crate::aggregation::{ScoreAggregator, StatusTable};
use crate::detectors::{DetectorContext, DetectorRegistry};
use crate::history::HistoryStore;

/// One evaluation pass per cycle: route every sample to its kind's detector,
/// collect findings and escalations, and build the verdict.
///
/// Owns the history store exclusively; evaluation is single-threaded.
#[derive(Debug, Clone)]
pub struct EvaluationEngine {
    registry: DetectorRegistry,
    history: HistoryStore,
    aggregator: ScoreAggregator,
    context: DetectorContext,
}

impl EvaluationEngine {
    pub fn new(
        registry: DetectorRegistry,
        history: HistoryStore,
        aggregator: ScoreAggregator,
        context: DetectorContext,
    ) -> Self {
        Self {
            registry,
            history,
            aggregator,
            context,
        }
    }

    /// Build the registry, history store, and aggregator from configuration.
    pub fn from_config(config: &GaugeConfig) -> GaugeResult<Self> {
        let metrics = config.metric_configs();
        Self::from_metrics(config, &metrics)
    }

    pub fn from_metrics(config: &GaugeConfig, metrics: &[MetricConfig]) -> GaugeResult<Self> {
        let registry = DetectorRegistry::build(metrics, &config.engine)?;
        let status = StatusTable::from_config(&config.status)?;
        Ok(Self::new(
            registry,
            HistoryStore::new(config.engine.max_history),
            ScoreAggregator::new(metrics, status),
            DetectorContext {
                window_hours: config.engine.window_hours(),
            },
        ))
    }

    /// Evaluate one cycle's samples. Clears last cycle's escalations first.
    /// Samples for disabled or unknown kinds are ignored.
    pub fn evaluate(&mut self, samples: &[Sample]) -> Vec<Finding> {
        let _span = tracing::debug_span!(spans::EVALUATE, samples = samples.len()).entered();
        self.aggregator.begin_cycle();

        let mut findings = Vec::new();
        for sample in samples {
            let Some(detector) = self.registry.get(sample.kind) else {
                tracing::trace!(kind = %sample.kind, key = %sample.key, "no detector for kind, sample ignored");
                continue;
            };
            let evaluation = detector.evaluate(sample, &mut self.history, &self.context);
            for class in evaluation.escalations {
                self.aggregator.escalate(sample.kind, class);
            }
            findings.extend(evaluation.findings);
        }
        findings
    }

    /// Fold findings into the cycle's verdict.
    pub fn verdict(
        &self,
        findings: Vec<Finding>,
        timestamp: DateTime<Utc>,
        duration_secs: u64,
    ) -> Verdict {
        self.aggregator.aggregate(findings, timestamp, duration_secs)
    }

    pub fn registry(&self) -> &DetectorRegistry {
        &self.registry
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn aggregator(&self) -> &ScoreAggregator {
        &self.aggregator
    }

    pub fn context(&self) -> &DetectorContext {
        &self.context
    }
}
