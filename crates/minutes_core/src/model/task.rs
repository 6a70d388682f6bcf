//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted shape of an extracted action item.
//! - Validate invariants before rows reach storage.
//!
//! # Invariants
//! - `status` is `open` or `done`; new tasks default to `open`.
//! - `due_date`, when present, is a valid `YYYY-MM-DD` string — never a
//!   partially-parsed or ambiguous value.
//! - `position` records the order of the source sentence within its
//!   transcript.

use crate::extract::ActionItem;
use crate::model::transcript::TranscriptId;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a stored task.
pub type TaskId = Uuid;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Extracted and not yet completed.
    Open,
    /// Completed.
    Done,
}

impl TaskStatus {
    /// Storage/API encoding of the status.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Done => "done",
        }
    }

    /// Parses the storage/API encoding.
    pub fn parse_db_str(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

/// Validation failure for task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task description is empty or whitespace-only.
    EmptyDescription,
    /// Owner is present but blank.
    BlankOwner,
    /// Due date is present but not a valid `YYYY-MM-DD` calendar date.
    MalformedDueDate(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description cannot be empty"),
            Self::BlankOwner => write!(f, "task owner cannot be blank when present"),
            Self::MalformedDueDate(value) => {
                write!(f, "due date `{value}` is not a valid YYYY-MM-DD date")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// A persisted action item linked to its source transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID.
    pub uuid: TaskId,
    /// Owning transcript; deletion cascades from it.
    pub transcript_uuid: TranscriptId,
    /// What has to be done.
    pub description: String,
    /// Person responsible, when a named subject was matched.
    pub owner: Option<String>,
    /// Normalized `YYYY-MM-DD` due date, when one was resolved.
    pub due_date: Option<String>,
    pub status: TaskStatus,
    /// Zero-based order of the source sentence within the transcript.
    pub position: u32,
    /// Creation time in Unix epoch milliseconds.
    pub created_at_ms: i64,
}

impl Task {
    /// Builds a persistable task from one extracted action item.
    ///
    /// New tasks always start as `open`.
    pub fn from_action_item(
        transcript_uuid: TranscriptId,
        position: u32,
        item: ActionItem,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            transcript_uuid,
            description: item.task,
            owner: item.owner,
            due_date: item.due_date,
            status: TaskStatus::Open,
            position,
            created_at_ms: Utc::now().timestamp_millis(),
        }
    }

    /// Checks field invariants before persistence.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.description.trim().is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        if let Some(owner) = &self.owner {
            if owner.trim().is_empty() {
                return Err(TaskValidationError::BlankOwner);
            }
        }
        if let Some(due_date) = &self.due_date {
            if NaiveDate::parse_from_str(due_date, "%Y-%m-%d").is_err() {
                return Err(TaskValidationError::MalformedDueDate(due_date.clone()));
            }
        }
        Ok(())
    }
}
