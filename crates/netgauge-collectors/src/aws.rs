//! AWS EC2 reachability checks.
//!
//! Checkpoint files map each region to a handful of endpoint URLs. Every URL
//! is probed with a GET; a 2xx response is a pass. One tally per region and
//! address family.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use netgauge_core::errors::CollectionError;
use netgauge_core::traits::Collector;
use netgauge_core::{AddressFamily, MetricKind, Sample};

use crate::http::HttpFetcher;

const NAME: &str = "aws";
const KINDS: [MetricKind; 1] = [MetricKind::Aws];

/// `{region: [url, ...]}` as stored in a checkpoint file.
pub type Checkpoints = BTreeMap<String, Vec<String>>;

pub fn parse_checkpoints(body: &str, path: &Path) -> Result<Checkpoints, CollectionError> {
    serde_json::from_str(body).map_err(|e| CollectionError::MalformedPayload {
        source_name: NAME.to_string(),
        message: format!("{}: {e}", path.display()),
    })
}

pub async fn load_checkpoints(path: &Path) -> Result<Checkpoints, CollectionError> {
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CollectionError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    parse_checkpoints(&body, path)
}

pub struct AwsCollector {
    fetcher: Arc<HttpFetcher>,
    files: Vec<(AddressFamily, PathBuf)>,
}

impl AwsCollector {
    pub fn new(fetcher: Arc<HttpFetcher>, files: Vec<(AddressFamily, PathBuf)>) -> Self {
        Self { fetcher, files }
    }

    pub fn files(&self) -> &[(AddressFamily, PathBuf)] {
        &self.files
    }

    /// Probe every URL of one region concurrently and tally the failures.
    async fn probe_region(&self, urls: &[String]) -> (u64, u64) {
        let handles: Vec<_> = urls
            .iter()
            .map(|url| {
                let fetcher = Arc::clone(&self.fetcher);
                let url = url.clone();
                tokio::spawn(async move { fetcher.reachable(&url).await })
            })
            .collect();

        let mut failed = 0;
        for handle in handles {
            if !handle.await.unwrap_or(false) {
                failed += 1;
            }
        }
        (failed, urls.len() as u64)
    }
}

#[async_trait]
impl Collector for AwsCollector {
    fn name(&self) -> &str {
        NAME
    }

    fn kinds(&self) -> &[MetricKind] {
        &KINDS
    }

    async fn collect(&self) -> Result<Vec<Sample>, CollectionError> {
        let mut samples = Vec::new();
        for (family, path) in &self.files {
            let checkpoints = load_checkpoints(path).await?;
            let now = Utc::now();
            for (region, urls) in &checkpoints {
                if urls.is_empty() {
                    continue;
                }
                let (failed, total) = self.probe_region(urls).await;
                samples.push(
                    Sample::tally(MetricKind::Aws, region.clone(), failed, total, Some(*family))
                        .at(now),
                );
            }
        }
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netgauge_core::config::CollectionConfig;
    use netgauge_core::SampleValue;

    fn fetcher() -> Arc<HttpFetcher> {
        let config = CollectionConfig {
            timeout_secs: 2,
            ..CollectionConfig::default()
        };
        Arc::new(HttpFetcher::new(&config).unwrap())
    }

    #[test]
    fn checkpoints_parse_region_map() {
        let body = r#"{"us-east-1": ["http://ec2.us-east-1.amazonaws.com/ping"], "eu-west-1": []}"#;
        let parsed = parse_checkpoints(body, Path::new("aws.json")).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["us-east-1"].len(), 1);
    }

    #[test]
    fn malformed_checkpoints_name_the_file() {
        let err = parse_checkpoints("[1, 2]", Path::new("aws_v6.json")).unwrap_err();
        assert!(err.to_string().contains("aws_v6.json"));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let collector = AwsCollector::new(
            fetcher(),
            vec![(AddressFamily::V4, PathBuf::from("/nonexistent/aws.json"))],
        );
        assert!(matches!(
            collector.collect().await,
            Err(CollectionError::Io { .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_endpoints_count_as_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aws.json");
        std::fs::write(
            &path,
            r#"{"local-1": ["http://127.0.0.1:1/", "http://127.0.0.1:1/ping"], "empty-1": []}"#,
        )
        .unwrap();

        let collector = AwsCollector::new(fetcher(), vec![(AddressFamily::V6, path)]);
        let samples = collector.collect().await.unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].key, "local-1");
        assert_eq!(
            samples[0].value,
            SampleValue::Tally {
                failed: 2,
                total: 2,
                family: Some(AddressFamily::V6)
            }
        );
    }
}
