use netgauge_core::{Finding, MetricKind};

use super::{messages, DetectorContext, Evaluation};
use crate::history::HistoryStore;

/// Which side of the baseline a deviation fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Above,
    Below,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
        }
    }
}

/// Exclusion band for the deviation strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationBand {
    /// "Above" only flags while the average stays under this cutoff, so
    /// naturally multi-sourced entities are ignored.
    pub low_activity_cutoff: f64,
    /// "Below" needs the average above this cutoff.
    pub high_activity_cutoff: f64,
    /// "Below" also needs the current value under this ceiling.
    pub collapse_ceiling: f64,
}

impl Default for DeviationBand {
    fn default() -> Self {
        Self {
            low_activity_cutoff: 2.0,
            high_activity_cutoff: 5.0,
            collapse_ceiling: 2.0,
        }
    }
}

/// Flags any deviation from the window average (new sample included) that
/// the band admits. No percentage threshold applies.
///
/// Without a band, every rise above the average flags and the collapse rule
/// is off.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeviationDetector {
    pub band: Option<DeviationBand>,
}

impl DeviationDetector {
    pub fn banded(band: DeviationBand) -> Self {
        Self { band: Some(band) }
    }

    pub fn unbanded() -> Self {
        Self { band: None }
    }

    /// Pure decision over a current value and its baseline.
    pub fn classify(&self, current: f64, avg: f64) -> Option<Direction> {
        match self.band {
            Some(band) => {
                if current > avg && avg < band.low_activity_cutoff {
                    Some(Direction::Above)
                } else if current < band.collapse_ceiling && avg > band.high_activity_cutoff {
                    Some(Direction::Below)
                } else {
                    None
                }
            }
            None => (current > avg).then_some(Direction::Above),
        }
    }

    pub fn evaluate(
        &self,
        kind: MetricKind,
        key: &str,
        current: f64,
        history: &mut HistoryStore,
        ctx: &DetectorContext,
    ) -> Evaluation {
        let avg = history.record_and_average(kind, key, current);
        match self.classify(current, avg) {
            Some(direction) => {
                let message =
                    messages::deviation(kind, key, current, avg, direction, ctx.window_hours);
                tracing::debug!(kind = %kind, key = %key, current, avg, "deviation finding");
                Evaluation::finding(Finding::new(kind, key, message))
            }
            None => Evaluation::none(),
        }
    }
}
