//! Transcript sentence segmentation.
//!
//! # Responsibility
//! - Split raw transcript text into trimmed candidate sentences.
//! - Filter out fragments too short to carry an action item.
//!
//! # Invariants
//! - Sentence order follows source text order.
//! - Consecutive delimiters never yield empty candidates.

/// Minimum candidate length in characters.
///
/// Shorter fragments are salutations, timestamps or noise lines and are
/// dropped before pattern matching.
pub const MIN_SENTENCE_CHARS: usize = 10;

/// Splits transcript text into candidate sentences.
///
/// Sentence-terminal punctuation (`.`, `!`, `?`) and newlines form a single
/// delimiter class. The returned iterator is lazy and borrows from `text`;
/// calling this again on the same text restarts the sequence.
pub fn candidate_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_sentence_delimiter)
        .map(str::trim)
        .filter(|candidate| candidate.chars().count() >= MIN_SENTENCE_CHARS)
}

fn is_sentence_delimiter(value: char) -> bool {
    matches!(value, '.' | '!' | '?' | '\n')
}

#[cfg(test)]
mod tests {
    use super::candidate_sentences;

    #[test]
    fn splits_on_terminal_punctuation_and_newlines() {
        let text = "John will send the report today! We need to review the budget.\nAnyone else joining the call?";
        let sentences: Vec<_> = candidate_sentences(text).collect();
        assert_eq!(
            sentences,
            vec![
                "John will send the report today",
                "We need to review the budget",
                "Anyone else joining the call",
            ]
        );
    }

    #[test]
    fn collapses_consecutive_delimiters() {
        let sentences: Vec<_> = candidate_sentences("First long sentence here...\n\nSecond long sentence here").collect();
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn drops_short_fragments() {
        let sentences: Vec<_> = candidate_sentences("Hi all. 10:32. Sarah will update the roadmap").collect();
        assert_eq!(sentences, vec!["Sarah will update the roadmap"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(candidate_sentences("").count(), 0);
        assert_eq!(candidate_sentences("...\n\n").count(), 0);
    }
}
