use async_trait::async_trait;

use crate::errors::CollectionError;
use crate::models::{MetricKind, Sample};

/// A data source that produces normalized samples for one or more metric kinds.
///
/// Each collector owns the key-space of the kinds it reports, so collectors
/// can run concurrently without sharing history entries.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Short source name used in logs and failure reports.
    fn name(&self) -> &str;

    /// Metric kinds this collector produces samples for.
    fn kinds(&self) -> &[MetricKind];

    async fn collect(&self) -> Result<Vec<Sample>, CollectionError>;
}
