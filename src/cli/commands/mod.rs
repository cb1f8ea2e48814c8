//! Command implementations for quickadd.
//!
//! This module contains the implementation of all CLI commands.

mod add;
mod session;

pub use add::{parse, quick_add};
pub use session::session;

use chrono::{Local, NaiveDate};

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::core::parse_natural_date;
use crate::error::QuickAddError;
use crate::features::nlp::KnownLabel;
use crate::features::shell::{completion_install_instructions, generate_completions, shell_from_str};
use crate::output::format_labels;

/// Execute labels command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn labels(config: &Config, format: OutputFormat) -> Result<String, QuickAddError> {
    format_labels(&config.labels, format)
}

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the shell is unknown or generation fails.
pub fn completions(shell: &str, install: bool) -> Result<String, QuickAddError> {
    let shell_type = shell_from_str(shell).ok_or_else(|| {
        QuickAddError::InvalidInput(format!(
            "Unknown shell: {shell}. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;

    if install {
        Ok(completion_install_instructions(shell_type))
    } else {
        generate_completions(shell_type)
    }
}

/// Resolve the `--today` argument: an ISO date or a single date phrase
/// relative to the real today.
fn reference_date(arg: Option<&str>) -> Result<NaiveDate, QuickAddError> {
    let today = Local::now().date_naive();
    let Some(arg) = arg else {
        return Ok(today);
    };

    NaiveDate::parse_from_str(arg.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| parse_natural_date(arg, today))
        .ok_or_else(|| QuickAddError::InvalidInput(format!("not a date: {arg}")))
}

/// Configured labels plus ad-hoc `--label` names (ids `cli-1`, `cli-2`, ...).
fn known_labels(config: &Config, extra: &[String]) -> Vec<KnownLabel> {
    let mut labels = config.labels.clone();
    labels.extend(
        extra
            .iter()
            .enumerate()
            .map(|(i, name)| KnownLabel::new(format!("cli-{}", i + 1), name.as_str())),
    );
    labels
}
