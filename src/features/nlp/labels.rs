//! `#label` extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::types::{KnownLabel, LabelPattern};

static LABEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(\w+)").unwrap_or_else(|e| panic!("Invalid label regex: {e}")));

/// Find `#tag` references and resolve them against `known`.
///
/// An exact (case-insensitive) name wins; otherwise the first known label
/// whose name starts with the tag is used.
#[must_use]
pub fn extract_labels(text: &str, known: &[KnownLabel]) -> Vec<LabelPattern> {
    LABEL_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let tag = caps.get(1)?.as_str().to_lowercase();
            let pattern = match resolve_label(&tag, known) {
                Some(label) => LabelPattern {
                    matched_text: whole.as_str().to_string(),
                    start_index: whole.start(),
                    end_index: whole.end(),
                    label_name: label.name.clone(),
                    label_id: Some(label.id.clone()),
                    is_existing: true,
                },
                None => LabelPattern {
                    matched_text: whole.as_str().to_string(),
                    start_index: whole.start(),
                    end_index: whole.end(),
                    label_name: tag,
                    label_id: None,
                    is_existing: false,
                },
            };
            trace!(tag = %pattern.matched_text, existing = pattern.is_existing, "label pattern");
            Some(pattern)
        })
        .collect()
}

/// Look up a lowercased tag among the known labels.
#[must_use]
pub fn resolve_label<'a>(tag: &str, known: &'a [KnownLabel]) -> Option<&'a KnownLabel> {
    known
        .iter()
        .find(|label| label.name.to_lowercase() == tag)
        .or_else(|| {
            known
                .iter()
                .find(|label| label.name.to_lowercase().starts_with(tag))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<KnownLabel> {
        vec![KnownLabel::new("1", "work"), KnownLabel::new("2", "workout")]
    }

    #[test]
    fn test_exact_match_beats_prefix() {
        let labels = extract_labels("#work gym", &known());
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].label_id.as_deref(), Some("1"));
        assert!(labels[0].is_existing);
    }

    #[test]
    fn test_exact_match_found_after_prefix_candidate() {
        let known = vec![KnownLabel::new("2", "workout"), KnownLabel::new("1", "work")];
        let labels = extract_labels("#work", &known);
        assert_eq!(labels[0].label_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_prefix_fallback_uses_first_in_order() {
        let labels = extract_labels("#wor gym", &known());
        assert_eq!(labels[0].label_id.as_deref(), Some("1"));
        assert_eq!(labels[0].label_name, "work");
    }

    #[test]
    fn test_unknown_label() {
        let labels = extract_labels("#personal gym", &known());
        assert_eq!(labels[0].label_id, None);
        assert_eq!(labels[0].label_name, "personal");
        assert!(!labels[0].is_existing);
    }

    #[test]
    fn test_case_insensitive_and_case_preserved() {
        let known = vec![KnownLabel::new("7", "Errands")];
        let labels = extract_labels("milk #ERRANDS", &known);
        assert_eq!(labels[0].matched_text, "#ERRANDS");
        assert_eq!(labels[0].label_name, "Errands");
        assert_eq!(labels[0].label_id.as_deref(), Some("7"));

        let unknown = extract_labels("#NewThing", &[]);
        assert_eq!(unknown[0].label_name, "newthing");
    }

    #[test]
    fn test_multiple_labels_in_order() {
        let text = "plan #home and #work_stuff";
        let labels = extract_labels(text, &known());
        let found: Vec<&str> = labels.iter().map(|l| l.matched_text.as_str()).collect();
        assert_eq!(found, vec!["#home", "#work_stuff"]);
        for label in &labels {
            assert_eq!(&text[label.start_index..label.end_index], label.matched_text);
        }
    }

    #[test]
    fn test_hyphen_ends_tag() {
        let labels = extract_labels("#high-priority", &[]);
        assert_eq!(labels[0].matched_text, "#high");
    }

    #[test]
    fn test_bare_hash_is_ignored() {
        assert!(extract_labels("# heading and ##", &known()).is_empty());
    }
}
