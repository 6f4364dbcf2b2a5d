//! Builds the collector set for a configuration.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use netgauge_core::errors::CollectionError;
use netgauge_core::traits::Collector;
use netgauge_core::{AddressFamily, GaugeConfig, MetricKind};

use crate::atlas::{AtlasCheck, AtlasCollector};
use crate::aws::AwsCollector;
use crate::http::HttpFetcher;
use crate::incidents::IncidentCollector;
use crate::routing::RoutingTableCollector;
use crate::rpki::RpkiCollector;

/// One collector per source that reports at least one enabled kind, all
/// sharing a single HTTP client.
pub fn build_collectors(config: &GaugeConfig) -> Result<Vec<Arc<dyn Collector>>, CollectionError> {
    let enabled: BTreeSet<MetricKind> = config
        .metric_configs()
        .into_iter()
        .filter(|m| m.enabled)
        .map(|m| m.kind)
        .collect();
    let collection = &config.collection;
    let endpoints = &collection.endpoints;
    let fetcher = Arc::new(HttpFetcher::new(collection)?);

    let mut candidates: Vec<Arc<dyn Collector>> = Vec::new();
    candidates.push(Arc::new(RoutingTableCollector::new(
        Arc::clone(&fetcher),
        endpoints.routing_table.clone(),
    )));
    candidates.push(Arc::new(RpkiCollector::new(
        Arc::clone(&fetcher),
        endpoints.rpki_status.clone(),
    )));
    for check in AtlasCheck::ALL {
        candidates.push(Arc::new(AtlasCollector::from_config(
            Arc::clone(&fetcher),
            &endpoints.atlas_base,
            check,
            &collection.atlas,
        )));
    }
    candidates.push(Arc::new(IncidentCollector::gcp(
        Arc::clone(&fetcher),
        endpoints.gcp_incidents.clone(),
    )));
    candidates.push(Arc::new(IncidentCollector::cloudflare(
        Arc::clone(&fetcher),
        endpoints.cloudflare_incidents.clone(),
    )));
    candidates.push(Arc::new(IncidentCollector::discord(
        Arc::clone(&fetcher),
        endpoints.discord_incidents.clone(),
    )));
    candidates.push(Arc::new(IncidentCollector::slack(
        Arc::clone(&fetcher),
        endpoints.slack_status.clone(),
    )));

    if enabled.contains(&MetricKind::Aws) {
        let files: Vec<(AddressFamily, PathBuf)> = [
            (AddressFamily::V4, &collection.aws.v4_checkpoints),
            (AddressFamily::V6, &collection.aws.v6_checkpoints),
        ]
        .into_iter()
        .map(|(family, path)| (family, PathBuf::from(path)))
        .filter(|(family, path)| {
            let exists = path.exists();
            if !exists {
                tracing::warn!(
                    family = %family,
                    path = %path.display(),
                    "AWS checkpoint file not found, skipping"
                );
            }
            exists
        })
        .collect();
        if !files.is_empty() {
            candidates.push(Arc::new(AwsCollector::new(Arc::clone(&fetcher), files)));
        }
    }

    let collectors: Vec<Arc<dyn Collector>> = candidates
        .into_iter()
        .filter(|c| c.kinds().iter().any(|k| enabled.contains(k)))
        .collect();
    tracing::info!(
        collectors = collectors.len(),
        enabled_kinds = enabled.len(),
        "collectors built"
    );
    Ok(collectors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netgauge_core::config::MetricOverride;

    fn names(collectors: &[Arc<dyn Collector>]) -> Vec<String> {
        collectors.iter().map(|c| c.name().to_string()).collect()
    }

    fn disable(config: &mut GaugeConfig, kind: MetricKind) {
        config.metrics.insert(
            kind,
            MetricOverride {
                enabled: Some(false),
                ..MetricOverride::default()
            },
        );
    }

    #[test]
    fn missing_aws_checkpoints_skip_the_collector() {
        let mut config = GaugeConfig::default();
        config.collection.aws.v4_checkpoints = "/nonexistent/v4.json".into();
        config.collection.aws.v6_checkpoints = "/nonexistent/v6.json".into();
        let collectors = build_collectors(&config).unwrap();
        let names = names(&collectors);
        assert!(!names.contains(&"aws".to_string()));
        assert!(names.contains(&"routing_table".to_string()));
        assert!(names.contains(&"atlas_probe_status".to_string()));
        assert_eq!(collectors.len(), 11);
    }

    #[test]
    fn aws_uses_existing_checkpoint_files() {
        let dir = tempfile::tempdir().unwrap();
        let v4 = dir.path().join("v4.json");
        std::fs::write(&v4, "{}").unwrap();
        let mut config = GaugeConfig::default();
        config.collection.aws.v4_checkpoints = v4.display().to_string();
        config.collection.aws.v6_checkpoints = "/nonexistent/v6.json".into();
        let collectors = build_collectors(&config).unwrap();
        assert!(names(&collectors).contains(&"aws".to_string()));
    }

    #[test]
    fn sources_with_only_disabled_kinds_are_dropped() {
        let mut config = GaugeConfig::default();
        config.collection.aws.v4_checkpoints = "/nonexistent/v4.json".into();
        config.collection.aws.v6_checkpoints = "/nonexistent/v6.json".into();
        disable(&mut config, MetricKind::Slack);
        disable(&mut config, MetricKind::InvalidRoa);
        let names = names(&build_collectors(&config).unwrap());
        assert!(!names.contains(&"slack".to_string()));
        // total_roa still needs the validator status.
        assert!(names.contains(&"rpki".to_string()));
    }
}
