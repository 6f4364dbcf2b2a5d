use std::collections::BTreeMap;

use netgauge_core::config::EngineConfig;
use netgauge_core::errors::DetectionError;
use netgauge_core::{IncidentStatus, MetricConfig, MetricKind, Severity};

use super::{
    AsnRangeTable, DeviationBand, DeviationDetector, Detector, EscalationPolicy,
    FailureRatioDetector, IncidentDetector, IncidentFilter, MembershipDetector,
    PercentageDropDetector, SymmetricPercentageDetector,
};

/// Static binding of metric kind to detection strategy, built once at
/// startup from the enabled metric configs.
#[derive(Debug, Clone, Default)]
pub struct DetectorRegistry {
    detectors: BTreeMap<MetricKind, Detector>,
}

impl DetectorRegistry {
    /// Build detectors for every enabled metric. Disabled kinds are absent,
    /// so their samples are ignored.
    pub fn build(metrics: &[MetricConfig], engine: &EngineConfig) -> Result<Self, DetectionError> {
        let band = DeviationBand {
            low_activity_cutoff: engine.low_activity_cutoff,
            high_activity_cutoff: engine.high_activity_cutoff,
            collapse_ceiling: engine.collapse_ceiling,
        };
        let mut detectors = BTreeMap::new();
        for metric in metrics.iter().filter(|m| m.enabled) {
            detectors.insert(metric.kind, Self::detector_for(metric, band)?);
        }
        Ok(Self { detectors })
    }

    /// The strategy each metric kind is evaluated with.
    pub fn detector_for(metric: &MetricConfig, band: DeviationBand) -> Result<Detector, DetectionError> {
        let detector = match metric.kind {
            MetricKind::Origins => Detector::Deviation(DeviationDetector::banded(band)),
            MetricKind::InvalidRoa => Detector::Deviation(DeviationDetector::unbanded()),
            MetricKind::BogonAsns => Detector::Membership(MembershipDetector::new(
                AsnRangeTable::bogon_asns(),
                required_threshold(metric)?,
            )),
            MetricKind::Prefixes | MetricKind::TotalRoa => {
                Detector::PercentageDrop(PercentageDropDetector::new(required_threshold(metric)?))
            }
            MetricKind::Dfz => Detector::SymmetricPercentage(SymmetricPercentageDetector::new(
                required_threshold(metric)?,
            )),
            MetricKind::DnsRoot
            | MetricKind::AtlasConnected
            | MetricKind::Ntp
            | MetricKind::PublicDns
            | MetricKind::Aws
            | MetricKind::Tls => {
                Detector::FailureRatio(FailureRatioDetector::new(required_threshold(metric)?))
            }
            MetricKind::Gcp => Detector::Incident(IncidentDetector::new(
                IncidentFilter::new(vec![IncidentStatus::Active], Severity::Critical),
                EscalationPolicy {
                    global_scope: true,
                    multiple_services: true,
                    ..EscalationPolicy::none()
                },
            )),
            MetricKind::Cloudflare => Detector::Incident(IncidentDetector::new(
                IncidentFilter::new(
                    vec![IncidentStatus::Investigating, IncidentStatus::Identified],
                    Severity::Minor,
                ),
                EscalationPolicy {
                    major_severity: true,
                    critical_count: true,
                    ..EscalationPolicy::none()
                },
            )),
            MetricKind::Discord => Detector::Incident(IncidentDetector::new(
                IncidentFilter::new(
                    vec![IncidentStatus::Investigating, IncidentStatus::Identified],
                    Severity::None,
                ),
                EscalationPolicy {
                    critical_count: true,
                    ..EscalationPolicy::none()
                },
            )),
            MetricKind::Slack => Detector::Incident(IncidentDetector::new(
                IncidentFilter::new(vec![IncidentStatus::Active], Severity::None),
                EscalationPolicy::none(),
            )),
        };
        Ok(detector)
    }

    pub fn get(&self, kind: MetricKind) -> Option<&Detector> {
        self.detectors.get(&kind)
    }

    pub fn is_enabled(&self, kind: MetricKind) -> bool {
        self.detectors.contains_key(&kind)
    }

    /// Enabled kinds in registry order.
    pub fn kinds(&self) -> impl Iterator<Item = MetricKind> + '_ {
        self.detectors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

fn required_threshold(metric: &MetricConfig) -> Result<f64, DetectionError> {
    match metric.threshold {
        None => Err(DetectionError::MissingThreshold {
            kind: metric.kind.to_string(),
        }),
        Some(value) if !value.is_finite() || value < 0.0 => Err(DetectionError::InvalidThreshold {
            kind: metric.kind.to_string(),
            value,
        }),
        Some(value) => Ok(value),
    }
}
