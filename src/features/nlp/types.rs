//! Pattern types produced by the quick-add parser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which family of pattern a match belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// A due-date phrase.
    Date,
    /// A `#label` reference.
    Label,
    /// A priority marker.
    Priority,
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Date => "date",
            Self::Label => "label",
            Self::Priority => "priority",
        })
    }
}

/// A recognized span of the input text.
///
/// Offsets are byte offsets into the parsed string, half-open, so that
/// `&text[p.start_index()..p.end_index()] == p.matched_text()`.
pub trait Pattern {
    /// The pattern family.
    fn kind(&self) -> PatternKind;

    /// The substring of the input that was recognized.
    fn matched_text(&self) -> &str;

    /// Offset of the first byte of the match.
    fn start_index(&self) -> usize;

    /// Offset one past the last byte of the match.
    fn end_index(&self) -> usize;

    /// Stable identity used to remember dismissed suggestions.
    fn key(&self) -> String {
        format!("{}:{}", self.kind(), self.matched_text())
    }
}

/// How sure the date engine is about a date phrase. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
}

/// A date phrase resolved to a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePattern {
    pub matched_text: String,
    pub start_index: usize,
    pub end_index: usize,
    /// Canonical spelling of the phrase, e.g. `tmrw` becomes `tomorrow`.
    pub normalized_text: String,
    pub resolved_date: NaiveDate,
    /// "Today", "Tomorrow", "Thursday, Jun 12" or "Jul 30, 2025".
    pub display_text: String,
    pub confidence: Confidence,
}

/// A `#tag` reference, resolved against the known labels when possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPattern {
    pub matched_text: String,
    pub start_index: usize,
    pub end_index: usize,
    /// The existing label's name, or the lowercased tag text when unknown.
    pub label_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_id: Option<String>,
    pub is_existing: bool,
}

/// An explicit priority marker (`!!`, `#p2`, `p:2`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityPattern {
    pub matched_text: String,
    pub start_index: usize,
    pub end_index: usize,
    /// 0 (explicitly none) through 3 (high).
    pub priority_level: u8,
    pub display_text: String,
}

macro_rules! impl_pattern {
    ($ty:ty, $kind:expr) => {
        impl Pattern for $ty {
            fn kind(&self) -> PatternKind {
                $kind
            }

            fn matched_text(&self) -> &str {
                &self.matched_text
            }

            fn start_index(&self) -> usize {
                self.start_index
            }

            fn end_index(&self) -> usize {
                self.end_index
            }
        }
    };
}

impl_pattern!(DatePattern, PatternKind::Date);
impl_pattern!(LabelPattern, PatternKind::Label);
impl_pattern!(PriorityPattern, PatternKind::Priority);

/// A label the user already has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownLabel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl KnownLabel {
    /// Create a label without a color.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
        }
    }
}

/// Everything the parser found in one input string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPatterns {
    pub dates: Vec<DatePattern>,
    pub labels: Vec<LabelPattern>,
    pub priorities: Vec<PriorityPattern>,
    /// The input with every matched span removed and whitespace collapsed.
    pub clean_text: String,
    pub has_any_pattern: bool,
}

impl ParsedPatterns {
    /// Byte ranges of every match, across all three kinds, in no particular order.
    pub fn spans(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let dates = self.dates.iter().map(|p| (p.start_index, p.end_index));
        let labels = self.labels.iter().map(|p| (p.start_index, p.end_index));
        let priorities = self.priorities.iter().map(|p| (p.start_index, p.end_index));
        dates.chain(labels).chain(priorities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_key() {
        let p = PriorityPattern {
            matched_text: "!!".to_string(),
            start_index: 8,
            end_index: 10,
            priority_level: 2,
            display_text: "Medium priority".to_string(),
        };
        assert_eq!(p.key(), "priority:!!");
        assert_eq!(p.kind(), PatternKind::Priority);
    }

    #[test]
    fn test_label_serializes_camel_case() {
        let p = LabelPattern {
            matched_text: "#Work".to_string(),
            start_index: 0,
            end_index: 5,
            label_name: "work".to_string(),
            label_id: None,
            is_existing: false,
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["matchedText"], "#Work");
        assert_eq!(json["isExisting"], false);
        assert!(json.get("labelId").is_none());
    }

    #[test]
    fn test_known_label_color_optional() {
        let label: KnownLabel = serde_yaml::from_str("id: '1'\nname: work\n").unwrap();
        assert_eq!(label, KnownLabel::new("1", "work"));
    }
}
