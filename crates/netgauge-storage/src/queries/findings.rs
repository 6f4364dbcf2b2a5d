//! findings table queries.

use netgauge_core::errors::StorageError;
use netgauge_core::Finding;
use rusqlite::{params, Connection};

use super::{sqlite_error, to_i64, to_u64};

/// A persisted finding.
#[derive(Debug, Clone, PartialEq)]
pub struct FindingRecord {
    pub position: u64,
    pub reason: String,
    pub metric: String,
    pub entity: String,
    pub weight: f64,
}

/// Replace the whole findings collection, preserving the given order.
pub fn replace_findings(conn: &Connection, findings: &[Finding]) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM findings", []).map_err(sqlite_error)?;

    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO findings (position, reason, metric, entity, weight)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .map_err(sqlite_error)?;
    for (position, f) in findings.iter().enumerate() {
        stmt.execute(params![
            to_i64(position as u64),
            f.message,
            f.kind.as_str(),
            f.key,
            f.weight,
        ])
        .map_err(sqlite_error)?;
    }
    Ok(findings.len())
}

/// The current findings in publication order.
pub fn current_findings(conn: &Connection) -> Result<Vec<FindingRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT position, reason, metric, entity, weight
             FROM findings ORDER BY position",
        )
        .map_err(sqlite_error)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(FindingRecord {
                position: to_u64(row.get(0)?),
                reason: row.get(1)?,
                metric: row.get(2)?,
                entity: row.get(3)?,
                weight: row.get(4)?,
            })
        })
        .map_err(sqlite_error)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(sqlite_error)?);
    }
    Ok(result)
}
