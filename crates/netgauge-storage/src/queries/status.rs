//! status table queries. The table holds at most one row.

use netgauge_core::errors::StorageError;
use netgauge_core::Verdict;
use rusqlite::{params, Connection, OptionalExtension};

use super::{sqlite_error, to_i64, to_u64};

/// The persisted current status.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRecord {
    pub status: String,
    /// `YYYY-MM-DD HH:MM:SSZ`.
    pub timestamp: String,
    pub duration_secs: u64,
    pub weighted_score: f64,
    pub unweighted_score: u64,
}

impl From<&Verdict> for StatusRecord {
    fn from(verdict: &Verdict) -> Self {
        Self {
            status: verdict.status.clone(),
            timestamp: verdict.timestamp_string(),
            duration_secs: verdict.duration_secs,
            weighted_score: verdict.weighted_score,
            unweighted_score: verdict.unweighted_score,
        }
    }
}

/// Replace the current status row.
pub fn replace_status(conn: &Connection, record: &StatusRecord) -> Result<(), StorageError> {
    conn.execute("DELETE FROM status", []).map_err(sqlite_error)?;
    conn.execute(
        "INSERT INTO status (id, status, timestamp, duration, weighted_score, unweighted_score)
         VALUES (1, ?1, ?2, ?3, ?4, ?5)",
        params![
            record.status,
            record.timestamp,
            to_i64(record.duration_secs),
            record.weighted_score,
            to_i64(record.unweighted_score),
        ],
    )
    .map_err(sqlite_error)?;
    Ok(())
}

/// The current status, if any verdict has been published.
pub fn current_status(conn: &Connection) -> Result<Option<StatusRecord>, StorageError> {
    conn.query_row(
        "SELECT status, timestamp, duration, weighted_score, unweighted_score
         FROM status WHERE id = 1",
        [],
        |row| {
            Ok(StatusRecord {
                status: row.get(0)?,
                timestamp: row.get(1)?,
                duration_secs: to_u64(row.get(2)?),
                weighted_score: row.get(3)?,
                unweighted_score: to_u64(row.get(4)?),
            })
        },
    )
    .optional()
    .map_err(sqlite_error)
}

/// Number of rows in the status table.
pub fn status_rows(conn: &Connection) -> Result<u64, StorageError> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM status", [], |row| row.get(0))
        .map_err(sqlite_error)?;
    Ok(to_u64(count))
}
