//! JSON output formatting for quickadd.
//!
//! This module provides functions for formatting parse results as JSON.

use serde::Serialize;
use serde_json::json;

use crate::error::QuickAddError;
use crate::features::nlp::{KnownLabel, ParsedPatterns, Suggestion, TaskDraft};

/// Format a parse result as JSON
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn format_parsed_json(parsed: &ParsedPatterns) -> Result<String, QuickAddError> {
    to_json(parsed)
}

/// Format a task draft as JSON
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn format_draft_json(draft: &TaskDraft) -> Result<String, QuickAddError> {
    to_json(draft)
}

/// Format session suggestions as JSON
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn format_suggestions_json(text: &str, suggestions: &[Suggestion]) -> Result<String, QuickAddError> {
    let output = json!({
        "text": text,
        "count": suggestions.len(),
        "suggestions": suggestions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format known labels as JSON
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn format_labels_json(labels: &[KnownLabel]) -> Result<String, QuickAddError> {
    let output = json!({
        "count": labels.len(),
        "items": labels
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, QuickAddError> {
    Ok(serde_json::to_string_pretty(value)?)
}
