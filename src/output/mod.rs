//! Output formatting for quickadd.
//!
//! This module provides formatters for displaying parse results in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::QuickAddError;
use crate::features::nlp::{KnownLabel, ParsedPatterns, Suggestion, TaskDraft};

pub use json::*;
pub use pretty::*;

/// Format a parse result based on output format
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn format_parsed(parsed: &ParsedPatterns, format: OutputFormat) -> Result<String, QuickAddError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_pretty(parsed)),
        OutputFormat::Json => format_parsed_json(parsed),
    }
}

/// Format a task draft based on output format
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn format_draft(draft: &TaskDraft, format: OutputFormat) -> Result<String, QuickAddError> {
    match format {
        OutputFormat::Pretty => Ok(format_draft_pretty(draft)),
        OutputFormat::Json => format_draft_json(draft),
    }
}

/// Format session suggestions based on output format
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn format_suggestions(
    text: &str,
    suggestions: &[Suggestion],
    format: OutputFormat,
) -> Result<String, QuickAddError> {
    match format {
        OutputFormat::Pretty => Ok(format_suggestions_pretty(text, suggestions)),
        OutputFormat::Json => format_suggestions_json(text, suggestions),
    }
}

/// Format known labels based on output format
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn format_labels(labels: &[KnownLabel], format: OutputFormat) -> Result<String, QuickAddError> {
    match format {
        OutputFormat::Pretty => Ok(format_labels_pretty(labels)),
        OutputFormat::Json => format_labels_json(labels),
    }
}
