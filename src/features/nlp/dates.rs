//! Due-date extraction.

use chrono::NaiveDate;
use tracing::{trace, warn};

use super::types::{Confidence, DatePattern};
use crate::core::{scan_dates, DateMatch};

// Beyond this many days ahead, display text switches to a full date.
const WEEK_AHEAD_DAYS: i64 = 7;

const RELATIVE_MARKERS: [&str; 4] = ["tomorrow", "today", "next", "this"];

/// Find date phrases in `text` that refer to `today` or later.
///
/// Past days are dropped. If the date engine fails the whole list is empty.
#[must_use]
pub fn extract_dates(text: &str, today: NaiveDate) -> Vec<DatePattern> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let found = match scan_dates(text, today) {
        Ok(found) => found,
        Err(e) => {
            warn!(error = %e, "date engine failed, skipping date suggestions");
            return Vec::new();
        },
    };

    found
        .into_iter()
        .filter(|m| m.date >= today)
        .map(|m| to_pattern(m, today))
        .inspect(|p| trace!(text = %p.matched_text, date = %p.resolved_date, "date pattern"))
        .collect()
}

fn to_pattern(m: DateMatch, today: NaiveDate) -> DatePattern {
    let confidence = confidence(&m);
    DatePattern {
        display_text: display_text(m.date, today),
        resolved_date: m.date,
        normalized_text: m.normalized,
        start_index: m.start,
        end_index: m.end,
        matched_text: m.text,
        confidence,
    }
}

fn confidence(m: &DateMatch) -> Confidence {
    let lower = m.text.to_lowercase();
    let has_marker = lower
        .split_whitespace()
        .any(|word| RELATIVE_MARKERS.contains(&word));

    if m.explicit_day_month || has_marker {
        Confidence::High
    } else {
        Confidence::Medium
    }
}

/// Human-readable label for a resolved day.
#[must_use]
pub fn display_text(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        days if days <= WEEK_AHEAD_DAYS => date.format("%A, %b %-d").to_string(),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn test_past_dates_are_dropped() {
        assert!(extract_dates("lunch last Monday", today()).is_empty());
        assert!(extract_dates("call back yesterday", today()).is_empty());
        assert!(extract_dates("paid 6/5/2025", today()).is_empty());
    }

    #[test]
    fn test_today_is_kept() {
        let dates = extract_dates("lunch today", today());
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].resolved_date, today());
        assert_eq!(dates[0].display_text, "Today");
        assert_eq!(dates[0].confidence, Confidence::High);
    }

    #[test]
    fn test_display_text_ranges() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(display_text(d(2025, 6, 11), today()), "Tomorrow");
        assert_eq!(display_text(d(2025, 6, 12), today()), "Thursday, Jun 12");
        assert_eq!(display_text(d(2025, 6, 17), today()), "Tuesday, Jun 17");
        assert_eq!(display_text(d(2025, 6, 18), today()), "Jun 18, 2025");
    }

    #[test]
    fn test_confidence() {
        let high = extract_dates("due next friday", today());
        assert_eq!(high[0].confidence, Confidence::High);

        let explicit = extract_dates("due june 20", today());
        assert_eq!(explicit[0].confidence, Confidence::High);

        let this = extract_dates("due this friday", today());
        assert_eq!(this[0].confidence, Confidence::High);

        let bare = extract_dates("due friday", today());
        assert_eq!(bare[0].confidence, Confidence::Medium);

        // Only the literal marker words count, not their synonyms.
        let tonight = extract_dates("call tonight", today());
        assert_eq!(tonight[0].confidence, Confidence::Medium);
        let tmrw = extract_dates("call tmrw", today());
        assert_eq!(tmrw[0].confidence, Confidence::Medium);

        let offset = extract_dates("follow up in 3 days", today());
        assert_eq!(offset[0].confidence, Confidence::Medium);
    }

    #[test]
    fn test_engine_failure_yields_nothing() {
        let dates = extract_dates("tomorrow or in 99999999999999999999999 days", today());
        assert!(dates.is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(extract_dates("   ", today()).is_empty());
    }

    #[test]
    fn test_normalized_text_carried() {
        let dates = extract_dates("pay rent tmr", today());
        assert_eq!(dates[0].matched_text, "tmr");
        assert_eq!(dates[0].normalized_text, "tomorrow");
        assert_eq!(dates[0].display_text, "Tomorrow");
    }
}
