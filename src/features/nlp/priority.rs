//! Priority marker extraction.
//!
//! Three independent syntaxes are recognized:
//! - a run of `!` followed by whitespace or the end of input (`!` low .. `!!!` high)
//! - `#p0` through `#p3`
//! - `p:0` through `p:3`

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::types::PriorityPattern;

const MAX_LEVEL: u8 = 3;

static BANG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!+").unwrap_or_else(|e| panic!("Invalid priority regex: {e}")));

static HASH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)#p([0-3])\b").unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

static COLON_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bp:([0-3])\b").unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

/// Display label for a priority level.
#[must_use]
pub const fn priority_display(level: u8) -> &'static str {
    match level {
        3 => "High priority",
        2 => "Medium priority",
        1 => "Low priority",
        _ => "No priority",
    }
}

/// Find priority markers in `text`.
///
/// Results are ordered by syntax (exclamation runs, then `#pN`, then `p:N`),
/// each in left-to-right order. A span reported by an earlier syntax is not
/// reported again.
#[must_use]
pub fn extract_priorities(text: &str) -> Vec<PriorityPattern> {
    let mut seen = HashSet::new();

    bang_matches(text)
        .chain(digit_matches(&HASH_PATTERN, text))
        .chain(digit_matches(&COLON_PATTERN, text))
        .filter(|p| seen.insert((p.start_index, p.end_index)))
        .inspect(|p| trace!(text = %p.matched_text, level = p.priority_level, "priority pattern"))
        .collect()
}

fn bang_matches(text: &str) -> impl Iterator<Item = PriorityPattern> + '_ {
    BANG_PATTERN.find_iter(text).filter_map(move |m| {
        let terminated = text[m.end()..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace);
        if !terminated {
            return None;
        }
        let level = u8::try_from(m.len()).map_or(MAX_LEVEL, |n| n.min(MAX_LEVEL));
        Some(pattern(m.as_str(), m.start(), m.end(), level))
    })
}

fn digit_matches<'a>(
    regex: &'static Regex,
    text: &'a str,
) -> impl Iterator<Item = PriorityPattern> + 'a {
    regex.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let level = caps.get(1)?.as_str().parse().ok()?;
        Some(pattern(whole.as_str(), whole.start(), whole.end(), level))
    })
}

fn pattern(matched: &str, start: usize, end: usize, level: u8) -> PriorityPattern {
    PriorityPattern {
        matched_text: matched.to_string(),
        start_index: start,
        end_index: end,
        priority_level: level,
        display_text: priority_display(level).to_string(),
    }
}
