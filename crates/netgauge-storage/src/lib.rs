//! # netgauge-storage
//!
//! SQLite persistence for published verdicts. One serialized writer, WAL
//! mode, schema migrations via `PRAGMA user_version`, and a `VerdictSink`
//! that replaces the current status and findings in a single transaction.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod sink;

pub use connection::DatabaseManager;
pub use queries::{FindingRecord, MetricRecord, StatusRecord};
pub use sink::SqliteVerdictSink;
