//! V001: metric registry, current status, current findings.

pub const MIGRATION_SQL: &str = r#"
-- Configured metric registry, rewritten at startup for the display layer.
CREATE TABLE IF NOT EXISTS metrics (
    metric TEXT PRIMARY KEY,
    description TEXT NOT NULL,
    weight REAL NOT NULL,
    frequency INTEGER NOT NULL,
    enabled INTEGER NOT NULL DEFAULT 1
) STRICT;

-- The latest verdict. Never more than one row.
CREATE TABLE IF NOT EXISTS status (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    status TEXT NOT NULL,
    timestamp TEXT NOT NULL,
    duration INTEGER NOT NULL,
    weighted_score REAL NOT NULL,
    unweighted_score INTEGER NOT NULL
) STRICT;

-- Findings behind the latest verdict, in publication order.
CREATE TABLE IF NOT EXISTS findings (
    position INTEGER PRIMARY KEY,
    reason TEXT NOT NULL,
    metric TEXT NOT NULL,
    entity TEXT NOT NULL,
    weight REAL NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_findings_metric ON findings(metric);
"#;
