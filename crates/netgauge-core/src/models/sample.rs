use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Incident, MetricKind};

/// Address family a probe result was measured over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Classify a CIDR prefix by its textual form.
    pub fn of_prefix(prefix: &str) -> Self {
        if prefix.contains(':') {
            Self::V6
        } else {
            Self::V4
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::V4 => "v4",
            Self::V6 => "v6",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => f.write_str("IPv4"),
            Self::V6 => f.write_str("IPv6"),
        }
    }
}

/// The normalized observation a collector hands to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SampleValue {
    /// A scalar baselined against history.
    Count { value: f64 },
    /// Failed vs. total observations among a fixed probe population.
    Tally {
        failed: u64,
        total: u64,
        family: Option<AddressFamily>,
    },
    /// One open provider incident.
    Incident { incident: Incident },
    /// An originating AS number with its corroborating visibility count.
    Origin { asn: u32, visibility: u64 },
}

/// One immutable per-entity observation, consumed once per cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub kind: MetricKind,
    /// Monitored entity: a prefix, an AS number, a repository, a probe target.
    pub key: String,
    pub value: SampleValue,
    pub timestamp: DateTime<Utc>,
}

impl Sample {
    pub fn new(kind: MetricKind, key: impl Into<String>, value: SampleValue) -> Self {
        Self {
            kind,
            key: key.into(),
            value,
            timestamp: Utc::now(),
        }
    }

    pub fn count(kind: MetricKind, key: impl Into<String>, value: f64) -> Self {
        Self::new(kind, key, SampleValue::Count { value })
    }

    pub fn tally(
        kind: MetricKind,
        key: impl Into<String>,
        failed: u64,
        total: u64,
        family: Option<AddressFamily>,
    ) -> Self {
        Self::new(kind, key, SampleValue::Tally { failed, total, family })
    }

    pub fn incident(kind: MetricKind, incident: Incident) -> Self {
        let key = incident.title.clone();
        Self::new(kind, key, SampleValue::Incident { incident })
    }

    pub fn origin(kind: MetricKind, key: impl Into<String>, asn: u32, visibility: u64) -> Self {
        Self::new(kind, key, SampleValue::Origin { asn, visibility })
    }

    /// Override the observation time (collectors stamp at fetch time).
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Short name of the value variant, used in mismatch warnings.
    pub fn value_type(&self) -> &'static str {
        match self.value {
            SampleValue::Count { .. } => "count",
            SampleValue::Tally { .. } => "tally",
            SampleValue::Incident { .. } => "incident",
            SampleValue::Origin { .. } => "origin",
        }
    }
}
