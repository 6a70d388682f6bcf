//! Startup configuration.
//!
//! # Responsibility
//! - Hold everything the process decides once at startup: database
//!   location, log level, log directory.
//! - Be the only place that reads process environment.
//!
//! # Invariants
//! - Business logic receives an [`AppConfig`] value and never consults the
//!   environment itself.

use std::path::PathBuf;

/// Environment variable naming the database file (`:memory:` for in-memory).
pub const ENV_DB: &str = "MINUTES_DB";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "MINUTES_LOG_LEVEL";
/// Environment variable naming the log directory; unset disables file logs.
pub const ENV_LOG_DIR: &str = "MINUTES_LOG_DIR";

const DEFAULT_DB_FILE: &str = "minutes.sqlite3";

/// Where task and transcript storage lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    Memory,
}

/// Process-wide configuration, constructed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database: DatabaseLocation,
    pub log_level: String,
    /// Absent means logging stays uninitialized (stderr-free, silent core).
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseLocation::File(PathBuf::from(DEFAULT_DB_FILE)),
            log_level: crate::logging::default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Builds a configuration from the process environment.
    ///
    /// Unset or blank variables fall back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(value) = non_blank_env(ENV_DB) {
            config.database = if value == ":memory:" {
                DatabaseLocation::Memory
            } else {
                DatabaseLocation::File(PathBuf::from(value))
            };
        }

        if let Some(value) = non_blank_env(ENV_LOG_LEVEL) {
            config.log_level = value;
        }

        if let Some(value) = non_blank_env(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(value));
        }

        config
    }
}

fn non_blank_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DatabaseLocation};
    use std::path::PathBuf;

    #[test]
    fn default_uses_file_database() {
        let config = AppConfig::default();
        assert_eq!(
            config.database,
            DatabaseLocation::File(PathBuf::from("minutes.sqlite3"))
        );
        assert!(config.log_dir.is_none());
    }
}
