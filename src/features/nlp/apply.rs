//! Rewriting the live input when a suggestion is accepted.
//!
//! The input may have changed since it was parsed, so a pattern is located by
//! its text in the current value rather than trusted by offset. Dates are
//! replaced with their normalized spelling, priorities are deleted, and labels
//! leave the text alone.

use std::ops::Range;

use super::parser::collapse_whitespace;
use super::types::{DatePattern, Pattern, PriorityPattern};

/// New input text plus where the cursor should go (a byte offset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub text: String,
    pub cursor: usize,
}

/// Find the pattern's text in `current`.
///
/// Prefers the original offsets when they still hold; otherwise picks the
/// occurrence starting nearest to the original position.
#[must_use]
pub fn locate<P: Pattern + ?Sized>(current: &str, pattern: &P) -> Option<Range<usize>> {
    let needle = pattern.matched_text();
    if needle.is_empty() {
        return None;
    }

    let original = pattern.start_index()..pattern.end_index();
    if current.get(original.clone()) == Some(needle) {
        return Some(original);
    }

    current
        .match_indices(needle)
        .map(|(start, _)| start)
        .min_by_key(|start| start.abs_diff(pattern.start_index()))
        .map(|start| start..start + needle.len())
}

/// Replace the date phrase with its normalized spelling.
///
/// The cursor lands right after the inserted text.
#[must_use]
pub fn apply_date(current: &str, pattern: &DatePattern) -> Option<Splice> {
    let range = locate(current, pattern)?;
    let mut text = current.to_string();
    text.replace_range(range.clone(), &pattern.normalized_text);
    Some(Splice {
        cursor: range.start + pattern.normalized_text.len(),
        text,
    })
}

/// Delete the priority marker and tidy the whitespace around it.
///
/// The cursor lands where the marker used to be.
#[must_use]
pub fn apply_priority(current: &str, pattern: &PriorityPattern) -> Option<Splice> {
    let range = locate(current, pattern)?;
    let before = collapse_whitespace(&current[..range.start]);
    let after = collapse_whitespace(&current[range.end..]);

    let splice = match (before.is_empty(), after.is_empty()) {
        (true, _) => Splice {
            text: after,
            cursor: 0,
        },
        (false, true) => Splice {
            cursor: before.len(),
            text: before,
        },
        (false, false) => Splice {
            cursor: before.len() + 1,
            text: format!("{before} {after}"),
        },
    };
    Some(splice)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::features::nlp::parse_at;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn test_apply_date_replaces_with_normalized() {
        let text = "pay rent tmrw please";
        let parsed = parse_at(text, &[], today());
        let splice = apply_date(text, &parsed.dates[0]).unwrap();
        assert_eq!(splice.text, "pay rent tomorrow please");
        assert_eq!(&splice.text[..splice.cursor], "pay rent tomorrow");
    }

    #[test]
    fn test_apply_date_after_user_kept_typing() {
        let parsed = parse_at("call tomorrow", &[], today());
        let edited = "please call tomorrow";
        let splice = apply_date(edited, &parsed.dates[0]).unwrap();
        assert_eq!(splice.text, "please call tomorrow");
        assert_eq!(splice.cursor, edited.len());
    }

    #[test]
    fn test_apply_priority_removes_marker() {
        let text = "ship it !! now";
        let parsed = parse_at(text, &[], today());
        let splice = apply_priority(text, &parsed.priorities[0]).unwrap();
        assert_eq!(splice.text, "ship it now");
        assert_eq!(&splice.text[..splice.cursor], "ship it ");
    }

    #[test]
    fn test_apply_priority_at_edges() {
        let parsed = parse_at("!!! urgent", &[], today());
        let splice = apply_priority("!!! urgent", &parsed.priorities[0]).unwrap();
        assert_eq!(splice, Splice { text: "urgent".to_string(), cursor: 0 });

        let parsed = parse_at("urgent   #p3", &[], today());
        let splice = apply_priority("urgent   #p3", &parsed.priorities[0]).unwrap();
        assert_eq!(splice, Splice { text: "urgent".to_string(), cursor: 6 });
    }

    #[test]
    fn test_locate_prefers_nearest_occurrence() {
        let parsed = parse_at("a !! b !! c", &[], today());
        let second = &parsed.priorities[1];
        assert_eq!(second.start_index, 7);

        // one character typed at the front shifts both markers
        let edited = "x a !! b !! c";
        assert_eq!(locate(edited, second), Some(9..11));
    }

    #[test]
    fn test_locate_missing_text() {
        let parsed = parse_at("ship it !!", &[], today());
        assert_eq!(locate("ship it", &parsed.priorities[0]), None);
        assert_eq!(apply_priority("ship it", &parsed.priorities[0]), None);
    }
}
