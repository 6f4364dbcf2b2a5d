use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Finding;
use crate::constants::TIMESTAMP_FORMAT;

/// The published outcome of one evaluation cycle. Each cycle's verdict fully
/// replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: String,
    pub weighted_score: f64,
    pub unweighted_score: u64,
    pub timestamp: DateTime<Utc>,
    pub duration_secs: u64,
    pub findings: Vec<Finding>,
}

impl Verdict {
    /// Timestamp rendered the way the display layer reads it.
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
