//! Global routing table snapshot (bgp.tools `table.jsonl`).
//!
//! One JSON object per line: `{"CIDR": "192.0.2.0/24", "ASN": 64500, "Hits": 812}`.
//! Yields origins per prefix, prefixes per ASN, DFZ size per family, and one
//! origin observation per route for the bogon check.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use netgauge_core::errors::CollectionError;
use netgauge_core::traits::Collector;
use netgauge_core::{AddressFamily, MetricKind, Sample};
use serde::Deserialize;

use crate::http::HttpFetcher;

const NAME: &str = "routing_table";
const KINDS: [MetricKind; 4] = [
    MetricKind::Origins,
    MetricKind::BogonAsns,
    MetricKind::Prefixes,
    MetricKind::Dfz,
];

/// One route as announced to the collector's peers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteEntry {
    #[serde(rename = "CIDR")]
    pub cidr: String,
    #[serde(rename = "ASN")]
    pub asn: u32,
    /// How many feeders see the route.
    #[serde(rename = "Hits", default)]
    pub hits: u64,
}

/// Parsed table, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingTable {
    pub entries: Vec<RouteEntry>,
}

impl RoutingTable {
    /// Parse a jsonl snapshot. Reading stops at the first line that is not
    /// a route, keeping everything read before it.
    pub fn parse(body: &str) -> Self {
        let mut entries = Vec::new();
        for (line_no, line) in body.lines().enumerate() {
            match serde_json::from_str::<RouteEntry>(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    if !line.trim().is_empty() {
                        tracing::debug!(line = line_no + 1, error = %e, "routing table truncated at malformed line");
                    }
                    break;
                }
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of originating entries per prefix.
    pub fn origins_per_prefix(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.cidr.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of announced prefixes per ASN.
    pub fn prefixes_per_asn(&self) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.asn).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct prefixes per address family.
    pub fn dfz_size(&self) -> (usize, usize) {
        let prefixes: BTreeSet<&str> = self.entries.iter().map(|e| e.cidr.as_str()).collect();
        let v6 = prefixes
            .iter()
            .filter(|p| AddressFamily::of_prefix(p) == AddressFamily::V6)
            .count();
        (prefixes.len() - v6, v6)
    }

    pub fn samples(&self, at: DateTime<Utc>) -> Vec<Sample> {
        let mut samples = Vec::with_capacity(self.entries.len() * 2);
        for (prefix, origins) in self.origins_per_prefix() {
            samples.push(Sample::count(MetricKind::Origins, prefix, origins as f64).at(at));
        }
        for (asn, prefixes) in self.prefixes_per_asn() {
            samples.push(Sample::count(MetricKind::Prefixes, asn.to_string(), prefixes as f64).at(at));
        }
        let (v4, v6) = self.dfz_size();
        samples.push(Sample::count(MetricKind::Dfz, AddressFamily::V4.as_str(), v4 as f64).at(at));
        samples.push(Sample::count(MetricKind::Dfz, AddressFamily::V6.as_str(), v6 as f64).at(at));
        for entry in &self.entries {
            samples.push(
                Sample::origin(MetricKind::BogonAsns, entry.cidr.clone(), entry.asn, entry.hits)
                    .at(at),
            );
        }
        samples
    }
}

pub struct RoutingTableCollector {
    fetcher: Arc<HttpFetcher>,
    url: String,
}

impl RoutingTableCollector {
    pub fn new(fetcher: Arc<HttpFetcher>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Collector for RoutingTableCollector {
    fn name(&self) -> &str {
        NAME
    }

    fn kinds(&self) -> &[MetricKind] {
        &KINDS
    }

    async fn collect(&self) -> Result<Vec<Sample>, CollectionError> {
        let body = self.fetcher.get_text(&self.url).await?;
        let table = RoutingTable::parse(&body);
        if table.is_empty() {
            return Err(CollectionError::MalformedPayload {
                source_name: NAME.to_string(),
                message: "no routes in table".to_string(),
            });
        }
        tracing::debug!(routes = table.len(), "routing table parsed");
        Ok(table.samples(Utc::now()))
    }
}
