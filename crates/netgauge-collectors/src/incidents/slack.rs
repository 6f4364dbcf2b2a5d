//! Slack status API (`api/v2.0.0/current`).

use netgauge_core::errors::CollectionError;
use netgauge_core::{Incident, IncidentScope, IncidentStatus, Severity};
use serde::Deserialize;

pub const PROVIDER: &str = "Slack";

/// Incident type Slack uses for announcements that are not outages.
const NOTICE: &str = "notice";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackIncident {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "type")]
    pub incident_type: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Current {
    #[serde(default)]
    active_incidents: Vec<SlackIncident>,
}

pub fn parse(body: &str) -> Result<Vec<Incident>, CollectionError> {
    let current: Current =
        serde_json::from_str(body).map_err(|e| CollectionError::MalformedPayload {
            source_name: "slack".to_string(),
            message: e.to_string(),
        })?;
    Ok(current
        .active_incidents
        .into_iter()
        .filter(|i| i.incident_type != NOTICE)
        .map(|i| {
            let severity = if i.incident_type == "outage" {
                Severity::Major
            } else {
                Severity::Minor
            };
            Incident {
                provider: PROVIDER.to_string(),
                title: i.title,
                status: IncidentStatus::parse(&i.status),
                severity,
                scope: IncidentScope::Services(i.services),
                multiple_services: false,
                url: i.url,
            }
        })
        .collect())
}
