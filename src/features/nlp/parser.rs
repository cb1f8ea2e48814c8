//! Quick-add parser.
//!
//! Scans strings like "buy milk tomorrow #errands !!" for dates, labels and
//! priorities, reporting every match with its position so a caller can offer
//! each one as a suggestion.

use chrono::{Local, NaiveDate};
use tracing::debug;

use super::dates::extract_dates;
use super::labels::extract_labels;
use super::priority::extract_priorities;
use super::types::{KnownLabel, ParsedPatterns};

/// Parse `text` relative to the local date.
///
/// # Examples
///
/// ```
/// use quickadd::features::nlp::{parse, KnownLabel};
///
/// let labels = vec![KnownLabel::new("9", "errands")];
/// let parsed = parse("Buy milk tomorrow #errands !!", &labels);
/// assert_eq!(parsed.clean_text, "Buy milk");
/// assert_eq!(parsed.dates[0].display_text, "Tomorrow");
/// assert_eq!(parsed.labels[0].label_id.as_deref(), Some("9"));
/// assert_eq!(parsed.priorities[0].priority_level, 2);
/// ```
#[must_use]
pub fn parse(text: &str, known_labels: &[KnownLabel]) -> ParsedPatterns {
    parse_at(text, known_labels, Local::now().date_naive())
}

/// Parse `text`, resolving relative dates against `today`.
///
/// Pure: the same arguments always produce the same result.
#[must_use]
pub fn parse_at(text: &str, known_labels: &[KnownLabel], today: NaiveDate) -> ParsedPatterns {
    if text.trim().is_empty() {
        return ParsedPatterns::default();
    }

    let mut parsed = ParsedPatterns {
        dates: extract_dates(text, today),
        labels: extract_labels(text, known_labels),
        priorities: extract_priorities(text),
        ..ParsedPatterns::default()
    };

    parsed.has_any_pattern =
        !(parsed.dates.is_empty() && parsed.labels.is_empty() && parsed.priorities.is_empty());
    parsed.clean_text = clean_text(text, parsed.spans());

    debug!(
        dates = parsed.dates.len(),
        labels = parsed.labels.len(),
        priorities = parsed.priorities.len(),
        "parsed quick-add input"
    );

    parsed
}

/// Remove the given byte spans from `text` and collapse whitespace.
///
/// Overlapping or repeated spans are merged first so no byte is removed twice.
/// Removal runs from the highest offset down so earlier offsets stay valid.
#[must_use]
pub fn clean_text(text: &str, spans: impl IntoIterator<Item = (usize, usize)>) -> String {
    let mut spans: Vec<(usize, usize)> = spans.into_iter().collect();
    spans.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut remaining = text.to_string();
    for (start, end) in merged.into_iter().rev() {
        if remaining.get(start..end).is_some() {
            remaining.replace_range(start..end, "");
        }
    }

    collapse_whitespace(&remaining)
}

/// Collapse runs of whitespace to a single space and trim the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
