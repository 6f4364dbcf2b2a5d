//! Data model shared by collectors, the engine, and the verdict sink.

pub mod finding;
pub mod incident;
pub mod metric_config;
pub mod metric_kind;
pub mod sample;
pub mod verdict;

pub use finding::Finding;
pub use incident::{Incident, IncidentScope, IncidentStatus, Severity};
pub use metric_config::MetricConfig;
pub use metric_kind::MetricKind;
pub use sample::{AddressFamily, Sample, SampleValue};
pub use verdict::Verdict;
