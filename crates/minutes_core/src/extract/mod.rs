//! Action-item extraction engine.
//!
//! # Responsibility
//! - Turn free-text meeting transcripts into structured action items.
//! - Compose segmentation, intent matching and date resolution.
//!
//! # Invariants
//! - Extraction is a pure function of the text and the reference date.
//! - Item order equals source sentence order.
//! - At most one item per candidate sentence.
//! - Extraction never fails; it degrades by omitting fields or items.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub mod dates;
pub mod patterns;
pub mod segment;

use dates::resolve_due_date;
use patterns::match_sentence;
use segment::candidate_sentences;

/// One task extracted from a transcript.
///
/// `due_date`, when present, is always a normalized `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub owner: Option<String>,
    pub due_date: Option<String>,
}

/// Extracts action items, resolving date phrases against the local current
/// date.
pub fn extract_action_items(text: &str) -> Vec<ActionItem> {
    extract_action_items_on(text, local_date_today())
}

/// Extracts action items against an explicit reference date.
///
/// The reference date only affects date resolution, never matching. Running
/// this twice with the same inputs yields identical output.
pub fn extract_action_items_on(text: &str, reference: NaiveDate) -> Vec<ActionItem> {
    candidate_sentences(text)
        .filter_map(|sentence| {
            match_sentence(sentence).map(|matched| ActionItem {
                task: matched.task,
                owner: matched.owner,
                due_date: matched
                    .date_clause
                    .as_deref()
                    .and_then(|clause| resolve_due_date(clause, reference)),
            })
        })
        // Degenerate captures (a lone comma before `by`) clean down to an
        // empty task; drop them instead of surfacing unstorable items.
        .filter(|item| !item.task.is_empty())
        .collect()
}

/// Current date in the local timezone.
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Reports extraction engine liveness.
///
/// Always `true`: the engine is in-process and has no external dependency.
pub fn extraction_healthy() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::{extract_action_items_on, extraction_healthy};
    use chrono::NaiveDate;

    fn reference() -> NaiveDate {
        // A Wednesday.
        NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()
    }

    #[test]
    fn pipeline_combines_owner_task_and_date() {
        let items = extract_action_items_on(
            "John will prepare the Q1 sales report by Friday.",
            reference(),
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].owner.as_deref(), Some("John"));
        assert_eq!(items[0].task, "Prepare the q1 sales report");
        assert_eq!(items[0].due_date.as_deref(), Some("2024-03-15"));
    }

    #[test]
    fn unresolvable_date_clause_leaves_due_date_absent() {
        let items =
            extract_action_items_on("Lena agreed to tidy the backlog by whenever.", reference());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].due_date, None);
    }

    #[test]
    fn items_follow_sentence_order() {
        let text = "Sarah will review the marketing materials. We need to schedule a follow-up by next week.";
        let items = extract_action_items_on(text, reference());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].owner.as_deref(), Some("Sarah"));
        assert_eq!(items[1].owner, None);
        assert_eq!(items[1].task, "Schedule a follow-up");
    }

    #[test]
    fn extractor_reports_healthy() {
        assert!(extraction_healthy());
    }
}
