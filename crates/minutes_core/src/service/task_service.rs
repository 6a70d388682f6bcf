//! Task use-case service.
//!
//! # Responsibility
//! - Provide list/get/patch/delete entry points over persisted tasks.
//! - Keep partial-update semantics out of the repository layer.
//!
//! # Invariants
//! - Patched rows are re-validated before persistence.
//! - `transcript_uuid`, `position` and `created_at_ms` are never patched.

use crate::model::task::{Task, TaskId, TaskStatus};
use crate::repo::task_repo::{TaskListQuery, TaskRepository};
use crate::repo::RepoResult;
use crate::service::ServiceError;

/// Partial update for one task.
///
/// Unset fields are left untouched. A patch can replace `owner` or
/// `due_date` but not clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub owner: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Use-case service wrapper for task operations.
pub struct TaskService<K: TaskRepository> {
    repo: K,
}

impl<K: TaskRepository> TaskService<K> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: K) -> Self {
        Self { repo }
    }

    /// Lists tasks, optionally filtered by status, newest first.
    pub fn list_tasks(
        &self,
        status: Option<TaskStatus>,
        limit: Option<u32>,
    ) -> RepoResult<Vec<Task>> {
        self.repo.list_tasks(&TaskListQuery { status, limit })
    }

    /// Gets one task by ID.
    pub fn get_task(&self, id: TaskId) -> Result<Task, ServiceError> {
        self.repo
            .get_task(id)?
            .ok_or(ServiceError::TaskNotFound(id))
    }

    /// Applies a partial update and returns the stored row.
    pub fn update_task(&self, id: TaskId, patch: TaskPatch) -> Result<Task, ServiceError> {
        let mut task = self.get_task(id)?;

        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(owner) = patch.owner {
            task.owner = Some(owner);
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(status) = patch.status {
            task.status = status;
        }

        self.repo.update_task(&task)?;
        self.repo
            .get_task(id)?
            .ok_or(ServiceError::InconsistentState(
                "updated task not found in read-back",
            ))
    }

    /// Flips the task status.
    pub fn set_status(&self, id: TaskId, status: TaskStatus) -> Result<Task, ServiceError> {
        self.update_task(
            id,
            TaskPatch {
                status: Some(status),
                ..TaskPatch::default()
            },
        )
    }

    /// Deletes one task; independent of its transcript's lifetime.
    pub fn delete_task(&self, id: TaskId) -> Result<(), ServiceError> {
        self.repo.delete_task(id)?;
        Ok(())
    }
}
