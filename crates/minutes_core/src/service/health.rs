//! Liveness reporting for the tracker's moving parts.

use crate::extract::extraction_healthy;
use rusqlite::Connection;
use serde::Serialize;

/// Component statuses; `"ok"` or `"error: <detail>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub backend: String,
    pub database: String,
    pub extractor: String,
}

impl HealthReport {
    /// Whether every component reported `ok`.
    pub fn all_ok(&self) -> bool {
        self.backend == "ok" && self.database == "ok" && self.extractor == "ok"
    }
}

/// Probes the database and the extraction engine.
pub fn health_report(conn: &Connection) -> HealthReport {
    let database = match conn.query_row("SELECT 1;", [], |row| row.get::<_, i64>(0)) {
        Ok(_) => "ok".to_string(),
        Err(err) => format!("error: {err}"),
    };

    let extractor = if extraction_healthy() {
        "ok".to_string()
    } else {
        "error".to_string()
    };

    HealthReport {
        backend: "ok".to_string(),
        database,
        extractor,
    }
}
