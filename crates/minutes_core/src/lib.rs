//! Core domain logic for the minutes action-item tracker.
//!
//! Extracts actionable tasks (owner, description, due date) from free-text
//! meeting transcripts with rule-based pattern matching, and persists them
//! alongside the source transcript for later retrieval and status tracking.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod db;
pub mod extract;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, DatabaseLocation};
pub use extract::{
    extract_action_items, extract_action_items_on, extraction_healthy, ActionItem,
};
pub use logging::{default_log_level, init_logging, LoggingError};
pub use model::task::{Task, TaskId, TaskStatus, TaskValidationError};
pub use model::transcript::{Transcript, TranscriptId};
pub use repo::task_repo::{SqliteTaskRepository, TaskListQuery, TaskRepository};
pub use repo::transcript_repo::{SqliteTranscriptRepository, TranscriptRepository};
pub use repo::{RepoError, RepoResult};
pub use service::health::{health_report, HealthReport};
pub use service::task_service::{TaskPatch, TaskService};
pub use service::transcript_service::{
    IngestOutcome, TranscriptService, TranscriptWithTasks,
};
pub use service::ServiceError;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
