//! Google Cloud `incidents.json`.

use netgauge_core::errors::CollectionError;
use netgauge_core::{Incident, IncidentScope, IncidentStatus, Severity};
use serde::Deserialize;

pub const PROVIDER: &str = "GCP";

/// Service name GCP uses when one incident spans several products.
pub const MULTIPLE_PRODUCTS: &str = "Multiple Products";

const GLOBAL_LOCATION: &str = "global";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GcpIncident {
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub status_impact: String,
    #[serde(default)]
    pub currently_affected_locations: Vec<Location>,
    #[serde(default)]
    pub uri: Option<String>,
}

fn severity(raw: &str) -> Severity {
    match raw.to_ascii_lowercase().as_str() {
        "low" => Severity::Minor,
        "medium" => Severity::Major,
        "high" => Severity::Critical,
        _ => Severity::None,
    }
}

/// Disruptions and outages are active; informational notices are not.
fn status(impact: &str) -> IncidentStatus {
    match impact {
        "SERVICE_DISRUPTION" | "SERVICE_OUTAGE" => IncidentStatus::Active,
        _ => IncidentStatus::Other,
    }
}

impl GcpIncident {
    fn into_incident(self) -> Incident {
        let scope = if self
            .currently_affected_locations
            .iter()
            .any(|l| l.id == GLOBAL_LOCATION)
        {
            IncidentScope::Global
        } else {
            IncidentScope::Regions(
                self.currently_affected_locations
                    .iter()
                    .map(|l| l.id.clone())
                    .collect(),
            )
        };
        Incident {
            provider: PROVIDER.to_string(),
            multiple_services: self.service_name == MULTIPLE_PRODUCTS,
            status: status(&self.status_impact),
            severity: severity(&self.severity),
            title: self.service_name,
            scope,
            url: self.uri,
        }
    }
}

/// Incidents still affecting at least one location. Closed incidents stay
/// in the feed with an empty location list and are dropped here.
pub fn parse(body: &str) -> Result<Vec<Incident>, CollectionError> {
    let raw: Vec<GcpIncident> =
        serde_json::from_str(body).map_err(|e| CollectionError::MalformedPayload {
            source_name: "gcp".to_string(),
            message: e.to_string(),
        })?;
    Ok(raw
        .into_iter()
        .filter(|i| !i.currently_affected_locations.is_empty())
        .map(GcpIncident::into_incident)
        .collect())
}
