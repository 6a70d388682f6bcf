//! Transcript ingest and retrieval use-cases.
//!
//! # Responsibility
//! - Run the full ingest pipeline: validate, extract, persist transcript and
//!   tasks.
//! - Provide recent-transcript listings with nested tasks.
//!
//! # Invariants
//! - Blank transcripts are rejected before extraction.
//! - Stored tasks preserve extraction order through `position`.
//! - Stored tasks always start with status `open`.

use crate::extract::{extract_action_items_on, local_date_today};
use crate::model::task::Task;
use crate::model::transcript::{Transcript, TranscriptId};
use crate::repo::task_repo::TaskRepository;
use crate::repo::transcript_repo::TranscriptRepository;
use crate::service::ServiceError;
use chrono::NaiveDate;
use log::info;
use std::time::Instant;

/// Result of ingesting one transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    pub transcript: Transcript,
    /// Stored tasks in extraction order.
    pub tasks: Vec<Task>,
}

/// A stored transcript with its tasks in source sentence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptWithTasks {
    pub transcript: Transcript,
    pub tasks: Vec<Task>,
}

/// Use-case service over transcript and task repositories.
pub struct TranscriptService<T: TranscriptRepository, K: TaskRepository> {
    transcripts: T,
    tasks: K,
}

impl<T: TranscriptRepository, K: TaskRepository> TranscriptService<T, K> {
    /// Creates a service using the provided repository implementations.
    pub fn new(transcripts: T, tasks: K) -> Self {
        Self { transcripts, tasks }
    }

    /// Ingests a transcript, resolving dates against the local current date.
    pub fn ingest(&self, text: &str) -> Result<IngestOutcome, ServiceError> {
        self.ingest_on(text, local_date_today())
    }

    /// Ingests a transcript with an explicit reference date.
    ///
    /// Extracts action items, stores the transcript, then stores one task
    /// per item with sequential `position`. Returns everything that was
    /// stored, tasks in extraction order.
    pub fn ingest_on(
        &self,
        text: &str,
        reference: NaiveDate,
    ) -> Result<IngestOutcome, ServiceError> {
        if text.trim().is_empty() {
            return Err(ServiceError::EmptyTranscript);
        }

        let started_at = Instant::now();
        let items = extract_action_items_on(text, reference);

        let transcript = Transcript::new(text);
        self.transcripts.create_transcript(&transcript)?;

        let mut stored = Vec::with_capacity(items.len());
        for (position, item) in items.into_iter().enumerate() {
            let task = Task::from_action_item(transcript.uuid, position as u32, item);
            self.tasks.create_task(&task)?;
            stored.push(task);
        }

        info!(
            "event=ingest module=service status=ok transcript={} tasks={} duration_ms={}",
            transcript.uuid,
            stored.len(),
            started_at.elapsed().as_millis()
        );

        Ok(IngestOutcome {
            transcript,
            tasks: stored,
        })
    }

    /// Lists recent transcripts, newest first, each with its tasks.
    pub fn list_recent_with_tasks(
        &self,
        limit: u32,
    ) -> Result<Vec<TranscriptWithTasks>, ServiceError> {
        let transcripts = self.transcripts.list_recent(limit)?;
        let mut result = Vec::with_capacity(transcripts.len());
        for transcript in transcripts {
            let tasks = self.tasks.list_for_transcript(transcript.uuid)?;
            result.push(TranscriptWithTasks { transcript, tasks });
        }
        Ok(result)
    }

    /// Gets one transcript with its tasks.
    pub fn get_with_tasks(
        &self,
        id: TranscriptId,
    ) -> Result<Option<TranscriptWithTasks>, ServiceError> {
        let Some(transcript) = self.transcripts.get_transcript(id)? else {
            return Ok(None);
        };
        let tasks = self.tasks.list_for_transcript(transcript.uuid)?;
        Ok(Some(TranscriptWithTasks { transcript, tasks }))
    }

    /// Deletes a transcript; its tasks go with it (schema cascade).
    pub fn delete_transcript(&self, id: TranscriptId) -> Result<(), ServiceError> {
        self.transcripts.delete_transcript(id)?;
        info!("event=transcript_delete module=service status=ok transcript={id}");
        Ok(())
    }
}
