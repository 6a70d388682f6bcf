//! Raw date phrase resolution.
//!
//! # Responsibility
//! - Turn a captured date clause into a normalized `YYYY-MM-DD` string.
//! - Anchor relative phrases to a caller-supplied reference date.
//!
//! # Invariants
//! - Rules are checked in a fixed order; the first hit wins.
//! - "Next occurrence" of a weekday is strictly in the future; same-day
//!   matches advance a full week.
//! - Unrecognized or invalid phrases resolve to `None`, never to an error.

use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

const DATE_FORMAT: &str = "%Y-%m-%d";

static DAY_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid day regex"));
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("valid iso date regex"));

/// Weekday names mapped to their Monday-based index, checked in this order.
const WEEKDAY_NAMES: &[(&str, u32)] = &[
    ("monday", 0),
    ("tuesday", 1),
    ("wednesday", 2),
    ("thursday", 3),
    ("friday", 4),
    ("saturday", 5),
    ("sunday", 6),
];

/// Month names, abbreviations before full names, checked in this order.
const MONTH_NAMES: &[(&str, u32)] = &[
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

/// Resolves a raw date clause into a `YYYY-MM-DD` string.
///
/// Comparisons are case-insensitive substring checks over the trimmed,
/// lowercased phrase. Returns `None` when no rule applies or when the phrase
/// names an impossible calendar date.
pub fn resolve_due_date(raw: &str, reference: NaiveDate) -> Option<String> {
    let phrase = raw.trim().to_lowercase();
    if phrase.is_empty() {
        return None;
    }

    if phrase.contains("tomorrow") {
        return Some(format_date(reference + Duration::days(1)));
    }

    if phrase.contains("this week") || phrase.contains("week") {
        return Some(format_date(upcoming_friday(reference)));
    }

    // Unreachable in practice: `next week` also contains `week` and is
    // claimed by the branch above. Kept so the rule order stays explicit.
    if phrase.contains("next week") {
        return Some(format_date(upcoming_friday(reference) + Duration::days(7)));
    }

    if phrase.contains("end of month") || phrase.contains("month") {
        return last_day_of_month(reference).map(format_date);
    }

    for (name, target) in WEEKDAY_NAMES {
        if phrase.contains(name) {
            return Some(format_date(next_weekday(reference, *target)));
        }
    }

    for (name, month) in MONTH_NAMES {
        if !phrase.contains(name) {
            continue;
        }
        let Some(day) = first_number(&phrase) else {
            continue;
        };
        let Some(date) = NaiveDate::from_ymd_opt(reference.year(), *month, day) else {
            continue;
        };
        if date < reference {
            // Feb 29 can be valid this year and invalid the next; treat that
            // as unresolved like any other impossible construction.
            let Some(rolled) = NaiveDate::from_ymd_opt(reference.year() + 1, *month, day) else {
                continue;
            };
            return Some(format_date(rolled));
        }
        return Some(format_date(date));
    }

    if let Some(matched) = ISO_DATE_RE.find(&phrase) {
        let candidate = matched.as_str();
        if NaiveDate::parse_from_str(candidate, DATE_FORMAT).is_ok() {
            return Some(candidate.to_string());
        }
    }

    None
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Nearest Friday strictly after the reference date.
fn upcoming_friday(reference: NaiveDate) -> NaiveDate {
    next_weekday(reference, 4)
}

/// Next occurrence of a weekday strictly after the reference date.
fn next_weekday(reference: NaiveDate, target: u32) -> NaiveDate {
    let mut days_ahead = (target + 7 - reference.weekday().num_days_from_monday()) % 7;
    if days_ahead == 0 {
        days_ahead = 7;
    }
    reference + Duration::days(i64::from(days_ahead))
}

/// Last calendar day of the reference month.
fn last_day_of_month(reference: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if reference.month() == 12 {
        (reference.year() + 1, 1)
    } else {
        (reference.year(), reference.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).map(|first| first - Duration::days(1))
}

fn first_number(phrase: &str) -> Option<u32> {
    DAY_NUMBER_RE
        .find(phrase)
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::resolve_due_date;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn tomorrow_adds_one_day() {
        // 2024-03-13 is a Wednesday.
        let resolved = resolve_due_date("tomorrow", date(2024, 3, 13));
        assert_eq!(resolved.as_deref(), Some("2024-03-14"));
    }

    #[test]
    fn week_phrases_resolve_to_upcoming_friday() {
        assert_eq!(
            resolve_due_date("this week", date(2024, 3, 13)).as_deref(),
            Some("2024-03-15")
        );
        assert_eq!(
            resolve_due_date("end of the week", date(2024, 3, 13)).as_deref(),
            Some("2024-03-15")
        );
    }

    #[test]
    fn next_week_is_shadowed_by_the_week_rule() {
        // `next week` contains `week`, so it resolves like `this week`.
        assert_eq!(
            resolve_due_date("next week", date(2024, 3, 13)).as_deref(),
            Some("2024-03-15")
        );
    }

    #[test]
    fn friday_reference_advances_a_full_week() {
        // 2024-03-15 is a Friday.
        assert_eq!(
            resolve_due_date("this week", date(2024, 3, 15)).as_deref(),
            Some("2024-03-22")
        );
    }

    #[test]
    fn month_phrase_resolves_to_last_day_of_month() {
        assert_eq!(
            resolve_due_date("end of month", date(2024, 2, 10)).as_deref(),
            Some("2024-02-29")
        );
        assert_eq!(
            resolve_due_date("later this month", date(2024, 12, 10)).as_deref(),
            Some("2024-12-31")
        );
    }

    #[test]
    fn weekday_name_resolves_strictly_forward() {
        // Reference is a Wednesday; Monday is five days out, Wednesday a
        // full week out, never the same day.
        let reference = date(2024, 3, 13);
        assert_eq!(
            resolve_due_date("monday", reference).as_deref(),
            Some("2024-03-18")
        );
        assert_eq!(
            resolve_due_date("on Wednesday", reference).as_deref(),
            Some("2024-03-20")
        );
    }

    #[test]
    fn month_and_day_use_reference_year_or_roll_forward() {
        assert_eq!(
            resolve_due_date("Dec 20", date(2024, 3, 13)).as_deref(),
            Some("2024-12-20")
        );
        assert_eq!(
            resolve_due_date("December 20", date(2024, 12, 25)).as_deref(),
            Some("2025-12-20")
        );
    }

    #[test]
    fn invalid_calendar_dates_are_unresolved() {
        assert_eq!(resolve_due_date("Feb 30", date(2024, 3, 13)), None);
        assert_eq!(resolve_due_date("2024-13-40", date(2024, 3, 13)), None);
    }

    #[test]
    fn iso_date_is_returned_verbatim() {
        assert_eq!(
            resolve_due_date("2024-12-20", date(2024, 3, 13)).as_deref(),
            Some("2024-12-20")
        );
    }

    #[test]
    fn unknown_phrases_are_unresolved() {
        assert_eq!(resolve_due_date("whenever", date(2024, 3, 13)), None);
        assert_eq!(resolve_due_date("", date(2024, 3, 13)), None);
    }
}
