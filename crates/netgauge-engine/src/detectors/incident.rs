use netgauge_core::{Finding, Incident, IncidentScope, IncidentStatus, MetricKind, Severity};

use super::{messages, Evaluation};
use crate::aggregation::EscalationClass;

/// Which open incidents count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentFilter {
    pub statuses: Vec<IncidentStatus>,
    pub min_severity: Severity,
}

impl IncidentFilter {
    pub fn new(statuses: Vec<IncidentStatus>, min_severity: Severity) -> Self {
        Self {
            statuses,
            min_severity,
        }
    }

    pub fn matches(&self, incident: &Incident) -> bool {
        self.statuses.contains(&incident.status) && incident.severity >= self.min_severity
    }
}

/// Which incident classes raise the kind's weight for the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EscalationPolicy {
    pub global_scope: bool,
    pub multiple_services: bool,
    pub major_severity: bool,
    pub critical_count: bool,
}

impl EscalationPolicy {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn classes_for(&self, incident: &Incident) -> Vec<EscalationClass> {
        let mut classes = Vec::new();
        if self.global_scope && incident.scope == IncidentScope::Global {
            classes.push(EscalationClass::GlobalScope);
        }
        if self.multiple_services && incident.multiple_services {
            classes.push(EscalationClass::MultipleServices);
        }
        if self.major_severity && incident.severity == Severity::Major {
            classes.push(EscalationClass::MajorSeverity);
        }
        if self.critical_count && incident.severity == Severity::Critical {
            classes.push(EscalationClass::CriticalSeverity);
        }
        classes
    }
}

/// One finding per matching open incident, plus any escalations its policy
/// raises. No threshold applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentDetector {
    pub filter: IncidentFilter,
    pub policy: EscalationPolicy,
}

impl IncidentDetector {
    pub fn new(filter: IncidentFilter, policy: EscalationPolicy) -> Self {
        Self { filter, policy }
    }

    pub fn evaluate(&self, kind: MetricKind, incident: &Incident) -> Evaluation {
        if !self.filter.matches(incident) {
            return Evaluation::none();
        }
        tracing::debug!(
            kind = %kind,
            provider = %incident.provider,
            title = %incident.title,
            severity = %incident.severity,
            "incident finding"
        );
        Evaluation {
            findings: vec![Finding::new(
                kind,
                incident.title.clone(),
                messages::incident(kind, incident),
            )],
            escalations: self.policy.classes_for(incident),
        }
    }
}
