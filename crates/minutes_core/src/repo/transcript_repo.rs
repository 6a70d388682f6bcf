//! Transcript repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist transcripts and expose recency-ordered retrieval.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Transcripts are write-once; there is no update path.
//! - Deleting a transcript cascades to its tasks (enforced by the schema,
//!   requires `foreign_keys=ON`).

use crate::model::transcript::{Transcript, TranscriptId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const TRANSCRIPT_SELECT_SQL: &str = "SELECT uuid, text, created_at FROM transcripts";

/// Repository interface for transcript persistence.
pub trait TranscriptRepository {
    fn create_transcript(&self, transcript: &Transcript) -> RepoResult<TranscriptId>;
    fn get_transcript(&self, id: TranscriptId) -> RepoResult<Option<Transcript>>;
    /// Most recent transcripts first.
    fn list_recent(&self, limit: u32) -> RepoResult<Vec<Transcript>>;
    fn delete_transcript(&self, id: TranscriptId) -> RepoResult<()>;
}

/// SQLite-backed transcript repository.
pub struct SqliteTranscriptRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTranscriptRepository<'conn> {
    /// Wraps a migrated connection; rejects unmigrated or foreign schemas.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TranscriptRepository for SqliteTranscriptRepository<'_> {
    fn create_transcript(&self, transcript: &Transcript) -> RepoResult<TranscriptId> {
        self.conn.execute(
            "INSERT INTO transcripts (uuid, text, created_at) VALUES (?1, ?2, ?3);",
            params![
                transcript.uuid.to_string(),
                transcript.text.as_str(),
                transcript.created_at_ms,
            ],
        )?;

        Ok(transcript.uuid)
    }

    fn get_transcript(&self, id: TranscriptId) -> RepoResult<Option<Transcript>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TRANSCRIPT_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_transcript_row(row)?));
        }

        Ok(None)
    }

    fn list_recent(&self, limit: u32) -> RepoResult<Vec<Transcript>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TRANSCRIPT_SELECT_SQL} ORDER BY created_at DESC, uuid ASC LIMIT ?1;"
        ))?;

        let mut rows = stmt.query([i64::from(limit)])?;
        let mut transcripts = Vec::new();
        while let Some(row) = rows.next()? {
            transcripts.push(parse_transcript_row(row)?);
        }

        Ok(transcripts)
    }

    fn delete_transcript(&self, id: TranscriptId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM transcripts WHERE uuid = ?1;",
            [id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::TranscriptNotFound(id));
        }

        Ok(())
    }
}

fn parse_transcript_row(row: &Row<'_>) -> RepoResult<Transcript> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in transcripts.uuid"))
    })?;

    Ok(Transcript {
        uuid,
        text: row.get("text")?,
        created_at_ms: row.get("created_at")?,
    })
}
