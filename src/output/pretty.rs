use std::fmt::Write;

use colored::Colorize;

use crate::features::nlp::{Confidence, KnownLabel, ParsedPatterns, Suggestion, TaskDraft};

/// Format a parse result as pretty output
pub fn format_parsed_pretty(parsed: &ParsedPatterns) -> String {
    let mut output = format!("{} {}\n", "Title:".cyan().bold(), parsed.clean_text);

    if !parsed.has_any_pattern {
        output.push_str(&format!("  {}\n", "No patterns detected".dimmed()));
        return output;
    }

    output.push_str(&"─".repeat(40));
    output.push('\n');

    for date in &parsed.dates {
        let confidence = match date.confidence {
            Confidence::High => "high".green(),
            Confidence::Medium => "medium".yellow(),
        };
        writeln!(
            output,
            "  {} {:<16} {} ({}, {confidence})",
            "date".cyan(),
            date.matched_text,
            date.display_text.bold(),
            date.resolved_date
        )
        .ok();
    }

    for label in &parsed.labels {
        let status = if label.is_existing {
            label.label_id.as_deref().unwrap_or_default().dimmed()
        } else {
            "new".yellow()
        };
        writeln!(
            output,
            "  {} {:<16} #{} ({status})",
            "label".magenta(),
            label.matched_text,
            label.label_name.bold()
        )
        .ok();
    }

    for priority in &parsed.priorities {
        writeln!(
            output,
            "  {} {:<16} {}",
            "priority".red(),
            priority.matched_text,
            priority.display_text.bold()
        )
        .ok();
    }

    output
}

/// Format a task draft as pretty output
pub fn format_draft_pretty(draft: &TaskDraft) -> String {
    let mut output = format!("{} {}\n", "Task:".green().bold(), draft.title);

    if let Some(due) = draft.due_date {
        writeln!(output, "  {} {due}", "Due:".cyan()).ok();
    }
    if !draft.label_ids.is_empty() {
        writeln!(output, "  {} {}", "Labels:".magenta(), draft.label_ids.join(", ")).ok();
    }
    if !draft.new_labels.is_empty() {
        let names: Vec<String> = draft.new_labels.iter().map(|n| format!("#{n}")).collect();
        writeln!(output, "  {} {}", "New labels:".yellow(), names.join(" ")).ok();
    }
    if let Some(level) = draft.priority {
        writeln!(output, "  {} {level}", "Priority:".red().bold()).ok();
    }

    output
}

/// Format the live suggestions of an editing session
pub fn format_suggestions_pretty(text: &str, suggestions: &[Suggestion]) -> String {
    let mut output = format!("{} {text}\n", ">".bold());

    for (index, suggestion) in suggestions.iter().enumerate() {
        let kind = suggestion.pattern().kind().to_string();
        writeln!(
            output,
            "  [{index}] {:<9} {:<16} {}",
            kind.cyan(),
            suggestion.pattern().matched_text(),
            suggestion.label().bold()
        )
        .ok();
    }

    output
}

/// Format known labels as pretty output
pub fn format_labels_pretty(labels: &[KnownLabel]) -> String {
    if labels.is_empty() {
        return "Labels (0)\n  No labels".to_string();
    }

    let mut output = format!("Labels ({})\n", labels.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for label in labels {
        let color = label.color.as_deref().unwrap_or("");
        output.push_str(&format!("  #{} {} {}\n", label.name.cyan(), label.id.dimmed(), color));
    }

    output
}
