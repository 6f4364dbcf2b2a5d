//! Atlassian Statuspage `incidents/unresolved.json`, used by Cloudflare and
//! Discord.

use netgauge_core::errors::CollectionError;
use netgauge_core::{Incident, IncidentScope, IncidentStatus, Severity};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatuspageIncident {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub shortlink: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Unresolved {
    #[serde(default)]
    incidents: Vec<StatuspageIncident>,
}

pub fn parse(provider: &str, body: &str) -> Result<Vec<Incident>, CollectionError> {
    let page: Unresolved =
        serde_json::from_str(body).map_err(|e| CollectionError::MalformedPayload {
            source_name: provider.to_ascii_lowercase(),
            message: e.to_string(),
        })?;
    Ok(page
        .incidents
        .into_iter()
        .map(|i| Incident {
            provider: provider.to_string(),
            title: i.name,
            status: IncidentStatus::parse(&i.status),
            severity: Severity::from_impact(&i.impact),
            scope: IncidentScope::Unspecified,
            multiple_services: false,
            url: i.shortlink,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_and_impact() {
        let body = r#"{"page": {"id": "x", "name": "Cloudflare"}, "incidents": [
            {"name": "Dashboard slow", "status": "investigating", "impact": "minor", "shortlink": "https://stspg.io/a"},
            {"name": "DNS errors", "status": "identified", "impact": "critical"},
            {"name": "Cleanup", "status": "monitoring", "impact": "none"}
        ]}"#;
        let incidents = parse("Cloudflare", body).unwrap();
        assert_eq!(incidents.len(), 3);
        assert_eq!(incidents[0].status, IncidentStatus::Investigating);
        assert_eq!(incidents[0].severity, Severity::Minor);
        assert_eq!(incidents[0].url.as_deref(), Some("https://stspg.io/a"));
        assert_eq!(incidents[1].severity, Severity::Critical);
        assert_eq!(incidents[2].status, IncidentStatus::Monitoring);
        assert!(incidents.iter().all(|i| i.provider == "Cloudflare"));
    }

    #[test]
    fn empty_page_has_no_incidents() {
        assert!(parse("Discord", r#"{"incidents": []}"#).unwrap().is_empty());
    }

    #[test]
    fn html_error_page_is_malformed() {
        let err = parse("Discord", "<html>502</html>").unwrap_err();
        assert!(matches!(err, CollectionError::MalformedPayload { ref source_name, .. } if source_name == "discord"));
    }
}
