//! RIPE Atlas measurement collectors.
//!
//! One collector per check, each reading `{base}{id}/latest/` for every
//! configured measurement. Measurements are fetched concurrently; a failed
//! fetch skips that measurement only.

pub mod certs;
pub mod classify;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use netgauge_core::config::{AtlasConfig, AtlasTarget};
use netgauge_core::errors::CollectionError;
use netgauge_core::tracing_setup::events;
use netgauge_core::traits::Collector;
use netgauge_core::{AddressFamily, MetricKind, Sample};
use serde_json::Value;

use self::certs::CertVerifier;
use self::classify::ProbeTally;
use crate::http::HttpFetcher;

/// Key used for the single probe-status sample.
pub const PROBE_STATUS_KEY: &str = "probes";

/// Which Atlas check a collector runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtlasCheck {
    RootDns,
    PublicDns,
    Ntp,
    Tls,
    ProbeStatus,
}

impl AtlasCheck {
    pub const ALL: [AtlasCheck; 5] = [
        Self::RootDns,
        Self::PublicDns,
        Self::Ntp,
        Self::Tls,
        Self::ProbeStatus,
    ];

    pub fn kind(self) -> MetricKind {
        match self {
            Self::RootDns => MetricKind::DnsRoot,
            Self::PublicDns => MetricKind::PublicDns,
            Self::Ntp => MetricKind::Ntp,
            Self::Tls => MetricKind::Tls,
            Self::ProbeStatus => MetricKind::AtlasConnected,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::RootDns => "atlas_root_dns",
            Self::PublicDns => "atlas_public_dns",
            Self::Ntp => "atlas_ntp",
            Self::Tls => "atlas_tls",
            Self::ProbeStatus => "atlas_probe_status",
        }
    }

    /// Whether samples carry the measurement's address family.
    fn reports_family(self) -> bool {
        matches!(self, Self::RootDns | Self::Ntp | Self::Tls)
    }

    /// Measurement targets for this check from config.
    pub fn targets(self, config: &AtlasConfig) -> Vec<AtlasTarget> {
        match self {
            Self::RootDns => config.root_dns.clone(),
            Self::PublicDns => config.public_dns.clone(),
            Self::Ntp => config.ntp.clone(),
            Self::Tls => config.tls.clone(),
            Self::ProbeStatus => vec![AtlasTarget {
                name: PROBE_STATUS_KEY.to_string(),
                v4: Some(config.probe_status_measurement),
                v6: None,
            }],
        }
    }
}

/// One measurement to fetch: target name, family, measurement ID.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Measurement {
    target: String,
    family: AddressFamily,
    id: u64,
}

pub struct AtlasCollector {
    fetcher: Arc<HttpFetcher>,
    base_url: String,
    check: AtlasCheck,
    kinds: [MetricKind; 1],
    measurements: Vec<Measurement>,
    verifier: Arc<CertVerifier>,
}

impl AtlasCollector {
    pub fn new(
        fetcher: Arc<HttpFetcher>,
        base_url: impl Into<String>,
        check: AtlasCheck,
        targets: &[AtlasTarget],
    ) -> Self {
        let measurements = targets
            .iter()
            .flat_map(|t| {
                [(AddressFamily::V4, t.v4), (AddressFamily::V6, t.v6)]
                    .into_iter()
                    .filter_map(move |(family, id)| {
                        id.map(|id| Measurement {
                            target: t.name.clone(),
                            family,
                            id,
                        })
                    })
            })
            .collect();
        Self {
            fetcher,
            base_url: base_url.into(),
            check,
            kinds: [check.kind()],
            measurements,
            verifier: Arc::new(CertVerifier::webpki_roots()),
        }
    }

    /// Replace the trust anchors TLS chains are verified against.
    pub fn with_verifier(mut self, verifier: Arc<CertVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    pub fn from_config(fetcher: Arc<HttpFetcher>, base_url: &str, check: AtlasCheck, config: &AtlasConfig) -> Self {
        Self::new(fetcher, base_url, check, &check.targets(config))
    }

    pub fn check(&self) -> AtlasCheck {
        self.check
    }

    /// Number of measurements fetched per collection.
    pub fn measurement_count(&self) -> usize {
        self.measurements.len()
    }

    fn url(&self, id: u64) -> String {
        format!("{}{id}/latest/", self.base_url)
    }

    /// Sample for one fetched measurement, or `None` when it had no results.
    fn sample(&self, measurement: &Measurement, results: &[Value], at: DateTime<Utc>) -> Option<Sample> {
        if results.is_empty() {
            return None;
        }
        let tally = self.classify(measurement, results, at);
        let family = self.check.reports_family().then_some(measurement.family);
        let sample = Sample::tally(
            self.check.kind(),
            measurement.target.clone(),
            tally.failed,
            tally.total,
            family,
        );
        Some(sample.at(at))
    }

    fn classify(&self, measurement: &Measurement, results: &[Value], at: DateTime<Utc>) -> ProbeTally {
        match self.check {
            AtlasCheck::RootDns => classify::root_dns(results),
            AtlasCheck::PublicDns => classify::public_dns(results),
            AtlasCheck::Ntp => classify::ntp(results),
            AtlasCheck::Tls => classify::tls(results, &measurement.target, &self.verifier, at),
            AtlasCheck::ProbeStatus => classify::probe_status(results),
        }
    }

    /// Turn per-measurement fetch outcomes into samples. The source counts as
    /// failed only when no measurement was fetched at all.
    fn fold_outcomes(
        &self,
        outcomes: Vec<Result<Vec<Value>, CollectionError>>,
        at: DateTime<Utc>,
    ) -> Result<Vec<Sample>, CollectionError> {
        let mut samples = Vec::new();
        let mut fetched = 0usize;
        let mut last_error = None;
        for (measurement, outcome) in self.measurements.iter().zip(outcomes) {
            match outcome {
                Ok(results) => {
                    fetched += 1;
                    samples.extend(self.sample(measurement, &results, at));
                }
                Err(error) => {
                    events::measurement_skipped(
                        self.check.name(),
                        &format!("{} ({}, #{})", measurement.target, measurement.family, measurement.id),
                        &error.to_string(),
                    );
                    last_error = Some(error);
                }
            }
        }

        match last_error {
            Some(error) if fetched == 0 => Err(error),
            _ => Ok(samples),
        }
    }
}

#[async_trait]
impl Collector for AtlasCollector {
    fn name(&self) -> &str {
        self.check.name()
    }

    fn kinds(&self) -> &[MetricKind] {
        &self.kinds
    }

    async fn collect(&self) -> Result<Vec<Sample>, CollectionError> {
        let handles: Vec<_> = self
            .measurements
            .iter()
            .map(|m| {
                let fetcher = Arc::clone(&self.fetcher);
                let url = self.url(m.id);
                let source = self.check.name();
                tokio::spawn(async move { fetcher.get_json::<Vec<Value>>(source, &url).await })
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            outcomes.push(handle.await.unwrap_or_else(|e| {
                Err(CollectionError::Aborted {
                    source_name: self.check.name().to_string(),
                    message: e.to_string(),
                })
            }));
        }
        self.fold_outcomes(outcomes, Utc::now())
    }
}
