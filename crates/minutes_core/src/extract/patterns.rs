//! Ordered action-intent pattern matching.
//!
//! # Responsibility
//! - Match one candidate sentence against the intent pattern table.
//! - Capture owner, task description and the raw trailing date clause.
//!
//! # Invariants
//! - Patterns are evaluated top-to-bottom; the first match wins.
//! - A sentence yields at most one match.
//! - Generic subjects (`we`, `someone`, `need`) never become owners.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Raw match result before date resolution.
///
/// `task` and `owner` are already trimmed and initial-capitalized;
/// `date_clause` is the untouched trailing `by <date>` capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceMatch {
    pub task: String,
    pub owner: Option<String>,
    pub date_clause: Option<String>,
}

struct IntentPattern {
    regex: Regex,
    /// Whether the first capture group is a subject candidate. Ownerless
    /// forms capture task in group 1 and the date clause in group 2.
    captures_subject: bool,
}

/// Subject tokens that signal collective or imperative phrasing rather than
/// a person name.
const GENERIC_SUBJECTS: &[&str] = &["we", "someone", "need"];

static INTENT_PATTERNS: Lazy<Vec<IntentPattern>> = Lazy::new(|| {
    let specs: &[(&str, bool)] = &[
        // Named-subject modal/obligation forms.
        (r"(\w+)\s+will\s+(.+?)(?:\s+by\s+(.+?))?$", true),
        (r"(\w+)\s+should\s+(.+?)(?:\s+by\s+(.+?))?$", true),
        (r"(\w+)\s+needs?\s+to\s+(.+?)(?:\s+by\s+(.+?))?$", true),
        (r"(\w+)\s+agreed\s+to\s+(.+?)(?:\s+by\s+(.+?))?$", true),
        (r"(\w+)\s+is\s+going\s+to\s+(.+?)(?:\s+by\s+(.+?))?$", true),
        (
            r"(\w+)\s+mentioned\s+(?:she'll|he'll|they'll)\s+(.+?)(?:\s+by\s+(.+?))?$",
            true,
        ),
        // Collective-obligation forms with no owner.
        (r"we\s+need\s+to\s+(.+?)(?:\s+by\s+(.+?))?$", false),
        (
            r"someone\s+(?:should|must|has\s+to)\s+(.+?)(?:\s+by\s+(.+?))?$",
            false,
        ),
        // Sentence-initial imperative forms.
        (r"^need\s+to\s+(.+?)(?:\s+by\s+(.+?))?$", false),
        (
            r"^(?:schedule|complete|finish|update|prepare|review|create|send)\s+(.+?)(?:\s+by\s+(.+?))?$",
            false,
        ),
    ];

    specs
        .iter()
        .map(|(pattern, captures_subject)| IntentPattern {
            regex: RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("valid intent pattern"),
            captures_subject: *captures_subject,
        })
        .collect()
});

/// Matches one sentence against the ordered intent pattern table.
///
/// Returns `None` when no pattern applies. Matching is case-insensitive and
/// unanchored unless the pattern anchors itself.
pub fn match_sentence(sentence: &str) -> Option<SentenceMatch> {
    for pattern in INTENT_PATTERNS.iter() {
        let Some(caps) = pattern.regex.captures(sentence) else {
            continue;
        };

        let (owner, task, date_clause) = if pattern.captures_subject {
            let subject = caps.get(1).map(|m| m.as_str())?;
            let task = caps.get(2).map(|m| m.as_str())?;
            let date_clause = caps.get(3).map(|m| m.as_str());
            if is_generic_subject(subject) {
                (None, task, date_clause)
            } else {
                (Some(subject), task, date_clause)
            }
        } else {
            let task = caps.get(1).map(|m| m.as_str())?;
            (None, task, caps.get(2).map(|m| m.as_str()))
        };

        return Some(SentenceMatch {
            task: clean_task(task),
            owner: owner.map(|value| capitalize(value.trim())),
            date_clause: date_clause.map(str::to_string),
        });
    }

    None
}

fn is_generic_subject(subject: &str) -> bool {
    let lowered = subject.to_lowercase();
    GENERIC_SUBJECTS.contains(&lowered.as_str())
}

fn clean_task(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_comma = trimmed.strip_suffix(',').unwrap_or(trimmed);
    capitalize(without_comma)
}

/// Initial-capitalizes a value: first character uppercased, the rest
/// lowercased.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
