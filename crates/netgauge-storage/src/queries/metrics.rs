//! metrics table queries.

use netgauge_core::errors::StorageError;
use netgauge_core::MetricConfig;
use rusqlite::{params, Connection};

use super::{sqlite_error, to_i64, to_u64};

/// A registered metric as the display layer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub metric: String,
    pub description: String,
    pub weight: f64,
    pub frequency_secs: u64,
    pub enabled: bool,
}

impl From<&MetricConfig> for MetricRecord {
    fn from(config: &MetricConfig) -> Self {
        Self {
            metric: config.kind.as_str().to_string(),
            description: config.description.clone(),
            weight: config.base_weight,
            frequency_secs: config.poll_frequency_secs,
            enabled: config.enabled,
        }
    }
}

/// Replace the whole registry.
pub fn replace_metrics(conn: &Connection, metrics: &[MetricRecord]) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM metrics", []).map_err(sqlite_error)?;

    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO metrics (metric, description, weight, frequency, enabled)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .map_err(sqlite_error)?;
    for m in metrics {
        stmt.execute(params![
            m.metric,
            m.description,
            m.weight,
            to_i64(m.frequency_secs),
            m.enabled,
        ])
        .map_err(sqlite_error)?;
    }
    Ok(metrics.len())
}

/// Every registered metric, ordered by name.
pub fn list_metrics(conn: &Connection) -> Result<Vec<MetricRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT metric, description, weight, frequency, enabled
             FROM metrics ORDER BY metric",
        )
        .map_err(sqlite_error)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MetricRecord {
                metric: row.get(0)?,
                description: row.get(1)?,
                weight: row.get(2)?,
                frequency_secs: to_u64(row.get(3)?),
                enabled: row.get(4)?,
            })
        })
        .map_err(sqlite_error)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(sqlite_error)?);
    }
    Ok(result)
}
