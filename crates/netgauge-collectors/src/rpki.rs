//! RPKI validator status (routinator `/api/v1/status`).

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use netgauge_core::errors::CollectionError;
use netgauge_core::traits::Collector;
use netgauge_core::{MetricKind, Sample};
use serde::Deserialize;

use crate::http::HttpFetcher;

const NAME: &str = "rpki";
const KINDS: [MetricKind; 2] = [MetricKind::InvalidRoa, MetricKind::TotalRoa];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RepositoryStatus {
    #[serde(rename = "validROAs", default)]
    pub valid_roas: u64,
    #[serde(rename = "invalidROAs", default)]
    pub invalid_roas: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidatorStatus {
    #[serde(default)]
    pub repositories: BTreeMap<String, RepositoryStatus>,
}

impl ValidatorStatus {
    pub fn parse(body: &str) -> Result<Self, CollectionError> {
        serde_json::from_str(body).map_err(|e| CollectionError::MalformedPayload {
            source_name: NAME.to_string(),
            message: e.to_string(),
        })
    }

    /// `invalid_roa` and `total_roa` per repository.
    pub fn samples(&self, at: DateTime<Utc>) -> Vec<Sample> {
        let mut samples = Vec::with_capacity(self.repositories.len() * 2);
        for (repo, status) in &self.repositories {
            let total = status.valid_roas + status.invalid_roas;
            samples.push(
                Sample::count(MetricKind::InvalidRoa, repo.clone(), status.invalid_roas as f64)
                    .at(at),
            );
            samples.push(Sample::count(MetricKind::TotalRoa, repo.clone(), total as f64).at(at));
        }
        samples
    }
}

pub struct RpkiCollector {
    fetcher: Arc<HttpFetcher>,
    url: String,
}

impl RpkiCollector {
    pub fn new(fetcher: Arc<HttpFetcher>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Collector for RpkiCollector {
    fn name(&self) -> &str {
        NAME
    }

    fn kinds(&self) -> &[MetricKind] {
        &KINDS
    }

    async fn collect(&self) -> Result<Vec<Sample>, CollectionError> {
        let body = self.fetcher.get_text(&self.url).await?;
        Ok(ValidatorStatus::parse(&body)?.samples(Utc::now()))
    }
}
