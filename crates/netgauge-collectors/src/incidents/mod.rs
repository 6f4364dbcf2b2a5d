//! Provider incident feeds.
//!
//! Each feed only parses; which incidents count is decided by the incident
//! detector of the matching metric kind.

pub mod gcp;
pub mod slack;
pub mod statuspage;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use netgauge_core::errors::CollectionError;
use netgauge_core::traits::Collector;
use netgauge_core::{Incident, MetricKind, Sample};

use crate::http::HttpFetcher;

/// Payload format of an incident feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentFeed {
    Gcp,
    Statuspage,
    Slack,
}

impl IncidentFeed {
    pub fn parse(self, provider: &str, body: &str) -> Result<Vec<Incident>, CollectionError> {
        match self {
            Self::Gcp => gcp::parse(body),
            Self::Statuspage => statuspage::parse(provider, body),
            Self::Slack => slack::parse(body),
        }
    }
}

pub struct IncidentCollector {
    name: String,
    kinds: [MetricKind; 1],
    url: String,
    fetcher: Arc<HttpFetcher>,
    feed: IncidentFeed,
}

impl IncidentCollector {
    pub fn new(
        fetcher: Arc<HttpFetcher>,
        kind: MetricKind,
        feed: IncidentFeed,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: kind.as_str().to_string(),
            kinds: [kind],
            url: url.into(),
            fetcher,
            feed,
        }
    }

    pub fn gcp(fetcher: Arc<HttpFetcher>, url: impl Into<String>) -> Self {
        Self::new(fetcher, MetricKind::Gcp, IncidentFeed::Gcp, url)
    }

    pub fn cloudflare(fetcher: Arc<HttpFetcher>, url: impl Into<String>) -> Self {
        Self::new(fetcher, MetricKind::Cloudflare, IncidentFeed::Statuspage, url)
    }

    pub fn discord(fetcher: Arc<HttpFetcher>, url: impl Into<String>) -> Self {
        Self::new(fetcher, MetricKind::Discord, IncidentFeed::Statuspage, url)
    }

    pub fn slack(fetcher: Arc<HttpFetcher>, url: impl Into<String>) -> Self {
        Self::new(fetcher, MetricKind::Slack, IncidentFeed::Slack, url)
    }

    pub fn feed(&self) -> IncidentFeed {
        self.feed
    }

    /// Provider name as it appears in findings: the kind's tag without
    /// brackets.
    fn provider(&self) -> &'static str {
        self.kinds[0].tag().trim_matches(['[', ']'])
    }

    pub fn samples(&self, body: &str) -> Result<Vec<Sample>, CollectionError> {
        let now = Utc::now();
        let kind = self.kinds[0];
        Ok(self
            .feed
            .parse(self.provider(), body)?
            .into_iter()
            .map(|incident| Sample::incident(kind, incident).at(now))
            .collect())
    }
}

#[async_trait]
impl Collector for IncidentCollector {
    fn name(&self) -> &str {
        &self.name
    }

    fn kinds(&self) -> &[MetricKind] {
        &self.kinds
    }

    async fn collect(&self) -> Result<Vec<Sample>, CollectionError> {
        let body = self.fetcher.get_text(&self.url).await?;
        self.samples(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netgauge_core::config::CollectionConfig;
    use netgauge_core::SampleValue;

    fn fetcher() -> Arc<HttpFetcher> {
        Arc::new(HttpFetcher::new(&CollectionConfig::default()).unwrap())
    }

    #[test]
    fn statuspage_samples_are_keyed_by_title() {
        let collector = IncidentCollector::discord(fetcher(), "https://discordstatus.example/unresolved.json");
        let body = r#"{"incidents": [{"name": "Voice degraded", "status": "investigating", "impact": "major"}]}"#;
        let samples = collector.samples(body).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].kind, MetricKind::Discord);
        assert_eq!(samples[0].key, "Voice degraded");
        match &samples[0].value {
            SampleValue::Incident { incident } => assert_eq!(incident.provider, "Discord"),
            other => panic!("unexpected value {other:?}"),
        }
    }

    #[test]
    fn collector_name_follows_kind() {
        let collector = IncidentCollector::cloudflare(fetcher(), "https://cf.example");
        assert_eq!(collector.name(), "cloudflare");
        assert_eq!(collector.kinds(), &[MetricKind::Cloudflare]);
        assert_eq!(collector.feed(), IncidentFeed::Statuspage);
    }
}
