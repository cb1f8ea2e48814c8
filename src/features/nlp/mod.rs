//! Natural language parsing for quick-add input.
//!
//! Detects three kinds of pattern in a task title as it is typed:
//! - due dates: "tomorrow", "next friday", "june 5", "in 3 days"
//! - labels: "#errands", resolved against the user's known labels
//! - priorities: "!!", "#p2", "p:2"
//!
//! [`parse`] reports every match with its position; [`EditSession`] layers
//! accept/dismiss handling on top for an input field.

mod apply;
mod dates;
mod labels;
mod parser;
mod priority;
mod session;
mod types;

pub use apply::{apply_date, apply_priority, locate, Splice};
pub use dates::{display_text, extract_dates};
pub use labels::{extract_labels, resolve_label};
pub use parser::{clean_text, collapse_whitespace, parse, parse_at};
pub use priority::{extract_priorities, priority_display};
pub use session::{EditSession, Suggestion, TaskDraft};
pub use types::{
    Confidence, DatePattern, KnownLabel, LabelPattern, ParsedPatterns, Pattern, PatternKind,
    PriorityPattern,
};
