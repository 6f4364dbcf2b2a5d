//! # netgauge-core
//!
//! Foundation crate for the netgauge Internet health engine.
//! Defines the sample, finding and verdict types, the collaborator traits,
//! errors, configuration, and tracing setup. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GaugeConfig;
pub use errors::{GaugeError, GaugeResult};
pub use models::{
    AddressFamily, Finding, Incident, IncidentScope, IncidentStatus, MetricConfig, MetricKind,
    Sample, SampleValue, Severity, Verdict,
};
