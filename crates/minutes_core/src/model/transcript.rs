//! Transcript domain model.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a stored transcript.
pub type TranscriptId = Uuid;

/// A stored meeting transcript.
///
/// Immutable once created; deleting a transcript deletes all of its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Stable global ID.
    pub uuid: TranscriptId,
    /// Raw transcript text as submitted.
    pub text: String,
    /// Creation time in Unix epoch milliseconds.
    pub created_at_ms: i64,
}

impl Transcript {
    /// Creates a transcript with a generated ID and the current timestamp.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            text: text.into(),
            created_at_ms: Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Transcript;

    #[test]
    fn new_transcript_keeps_text_verbatim() {
        let transcript = Transcript::new("Weekly sync notes.\nJohn will send minutes.");
        assert!(transcript.text.contains('\n'));
        assert!(transcript.created_at_ms > 0);
    }
}
