//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate extraction and repository calls into use-case level APIs.
//! - Keep outer surfaces (CLI, future transports) decoupled from storage
//!   details.

use crate::model::task::TaskId;
use crate::model::transcript::TranscriptId;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod health;
pub mod task_service;
pub mod transcript_service;

/// Service-level error shared by use-case APIs.
#[derive(Debug)]
pub enum ServiceError {
    /// Transcript input was empty or whitespace-only.
    EmptyTranscript,
    /// Target task does not exist.
    TaskNotFound(TaskId),
    /// Target transcript does not exist.
    TranscriptNotFound(TranscriptId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTranscript => write!(f, "transcript cannot be empty"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::TranscriptNotFound(id) => write!(f, "transcript not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::TaskNotFound(id) => Self::TaskNotFound(id),
            RepoError::TranscriptNotFound(id) => Self::TranscriptNotFound(id),
            other => Self::Repo(other),
        }
    }
}
