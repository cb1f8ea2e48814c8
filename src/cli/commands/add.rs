//! Parse and quick add command implementations.
//!
//! `parse` shows what the parser detects; `add` accepts every suggestion the
//! way an input field would and shows the resulting task.

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::config::Config;
use crate::core::FixedClock;
use crate::error::QuickAddError;
use crate::features::nlp::{parse_at, EditSession};
use crate::output::{format_draft, format_parsed};

use super::{known_labels, reference_date};

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if `--today` is not a date or output formatting fails.
pub fn parse(args: &ParseArgs, config: &Config, format: OutputFormat) -> Result<String, QuickAddError> {
    let today = reference_date(args.today.as_deref())?;
    let labels = known_labels(config, &args.labels);
    let parsed = parse_at(&args.text, &labels, today);
    format_parsed(&parsed, format)
}

/// Execute the quick add command.
///
/// # Errors
///
/// Returns an error if `--today` is not a date, nothing is left for a title
/// once the patterns are removed, or output formatting fails.
pub fn quick_add(
    args: &ParseArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, QuickAddError> {
    let today = reference_date(args.today.as_deref())?;
    let mut session = EditSession::with_clock(known_labels(config, &args.labels), FixedClock(today));

    session.set_text(args.text.as_str());
    session.accept_all()?;
    let draft = session.submit();

    if draft.title.is_empty() {
        return Err(QuickAddError::InvalidInput("No task title found".to_string()));
    }

    format_draft(&draft, format)
}
