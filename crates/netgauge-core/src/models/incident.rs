use std::fmt;

use serde::{Deserialize, Serialize};

/// Incident severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Minor,
    Major,
    Critical,
}

impl Severity {
    /// Map a Statuspage `impact` string. Unknown values are `None`.
    pub fn from_impact(impact: &str) -> Self {
        match impact.to_ascii_lowercase().as_str() {
            "minor" => Self::Minor,
            "major" => Self::Major,
            "critical" => Self::Critical,
            _ => Self::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Investigating,
    Identified,
    Monitoring,
    Active,
    Resolved,
    Other,
}

impl IncidentStatus {
    pub fn parse(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "investigating" => Self::Investigating,
            "identified" => Self::Identified,
            "monitoring" => Self::Monitoring,
            "active" => Self::Active,
            "resolved" | "completed" | "postmortem" => Self::Resolved,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Investigating => "investigating",
            Self::Identified => "identified",
            Self::Monitoring => "monitoring",
            Self::Active => "active",
            Self::Resolved => "resolved",
            Self::Other => "other",
        }
    }
}

/// What part of the provider's footprint the incident affects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "names", rename_all = "snake_case")]
pub enum IncidentScope {
    Global,
    Regions(Vec<String>),
    Services(Vec<String>),
    Unspecified,
}

/// One open incident from a provider status feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub provider: String,
    pub title: String,
    pub status: IncidentStatus,
    pub severity: Severity,
    pub scope: IncidentScope,
    /// The provider reports the incident against several products at once.
    pub multiple_services: bool,
    pub url: Option<String>,
}
