//! Interactive editing of a single quick-add input.
//!
//! An [`EditSession`] owns the text being typed, the suggestions the user has
//! dismissed, and the values committed so far. Dismissals only live as long as
//! the session's current task: submitting or clearing starts over.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::apply::{apply_date, apply_priority, Splice};
use super::parser::{clean_text, parse_at};
use super::types::{DatePattern, KnownLabel, LabelPattern, ParsedPatterns, Pattern, PriorityPattern};
use crate::core::{Clock, SystemClock};
use crate::error::QuickAddError;

/// A pattern offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Suggestion {
    Date(DatePattern),
    Label(LabelPattern),
    Priority(PriorityPattern),
}

impl Suggestion {
    /// The underlying pattern.
    #[must_use]
    pub fn pattern(&self) -> &dyn Pattern {
        match self {
            Self::Date(p) => p,
            Self::Label(p) => p,
            Self::Priority(p) => p,
        }
    }

    /// Dismissal key, `kind:matched_text`.
    #[must_use]
    pub fn key(&self) -> String {
        self.pattern().key()
    }

    /// Short description for a suggestion chip.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Date(p) => p.display_text.clone(),
            Self::Label(p) if p.is_existing => format!("#{}", p.label_name),
            Self::Label(p) => format!("#{} (new)", p.label_name),
            Self::Priority(p) => p.display_text.clone(),
        }
    }
}

/// Values committed by accepting suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Filled in on submit from the remaining text.
    pub title: String,
    pub due_date: Option<NaiveDate>,
    /// Ids of existing labels to attach.
    pub label_ids: Vec<String>,
    /// Names of labels that must be created first.
    pub new_labels: Vec<String>,
    pub priority: Option<u8>,
}

/// State of one quick-add input field.
#[derive(Debug)]
pub struct EditSession<C: Clock = SystemClock> {
    clock: C,
    known_labels: Vec<KnownLabel>,
    text: String,
    dismissed: HashSet<String>,
    draft: TaskDraft,
}

impl EditSession<SystemClock> {
    /// Start a session using the local date.
    #[must_use]
    pub fn new(known_labels: Vec<KnownLabel>) -> Self {
        Self::with_clock(known_labels, SystemClock)
    }
}

impl<C: Clock> EditSession<C> {
    /// Start a session with an explicit clock.
    #[must_use]
    pub fn with_clock(known_labels: Vec<KnownLabel>, clock: C) -> Self {
        Self {
            clock,
            known_labels,
            text: String::new(),
            dismissed: HashSet::new(),
            draft: TaskDraft::default(),
        }
    }

    /// Current input text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Values committed so far.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Whether a suggestion with this key was dismissed.
    #[must_use]
    pub fn is_dismissed(&self, key: &str) -> bool {
        self.dismissed.contains(key)
    }

    /// Replace the input text. Blank text forgets all dismissals.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.text.trim().is_empty() {
            self.dismissed.clear();
        }
    }

    /// Parse the current text.
    #[must_use]
    pub fn parse(&self) -> ParsedPatterns {
        parse_at(&self.text, &self.known_labels, self.clock.today())
    }

    /// Suggestions still worth showing: dates, then labels, then priorities.
    ///
    /// Dismissed patterns are hidden, as are dates and labels already
    /// committed to the draft. A `#p3` marker is offered as a priority only,
    /// not also as a label.
    #[must_use]
    pub fn suggestions(&self) -> Vec<Suggestion> {
        let parsed = self.parse();
        let priority_spans: HashSet<(usize, usize)> = parsed
            .priorities
            .iter()
            .map(|p| (p.start_index, p.end_index))
            .collect();
        let dates = parsed
            .dates
            .into_iter()
            .filter(|p| self.draft.due_date != Some(p.resolved_date))
            .map(Suggestion::Date);
        let labels = parsed
            .labels
            .into_iter()
            .filter(|p| !priority_spans.contains(&(p.start_index, p.end_index)))
            .filter(|p| !self.has_label(p))
            .map(Suggestion::Label);
        let priorities = parsed.priorities.into_iter().map(Suggestion::Priority);

        dates
            .chain(labels)
            .chain(priorities)
            .filter(|s| !self.dismissed.contains(&s.key()))
            .collect()
    }

    /// Hide a suggestion until the input is cleared or submitted.
    pub fn dismiss(&mut self, suggestion: &Suggestion) {
        let key = suggestion.key();
        debug!(%key, "dismissed suggestion");
        self.dismissed.insert(key);
    }

    /// Commit a suggestion's value and rewrite the text where needed.
    ///
    /// Returns the splice applied to the text, or `None` for labels, which
    /// leave the text untouched.
    ///
    /// # Errors
    ///
    /// Returns [`QuickAddError::SuggestionNotFound`] if a date or priority
    /// phrase is no longer present in the current text.
    pub fn accept(&mut self, suggestion: &Suggestion) -> Result<Option<Splice>, QuickAddError> {
        debug!(key = %suggestion.key(), "accepted suggestion");
        let missing = || QuickAddError::SuggestionNotFound(suggestion.key());

        match suggestion {
            Suggestion::Date(p) => {
                let splice = apply_date(&self.text, p).ok_or_else(missing)?;
                self.text.clone_from(&splice.text);
                self.draft.due_date = Some(p.resolved_date);
                Ok(Some(splice))
            },
            Suggestion::Priority(p) => {
                let splice = apply_priority(&self.text, p).ok_or_else(missing)?;
                self.text.clone_from(&splice.text);
                self.draft.priority = Some(p.priority_level);
                Ok(Some(splice))
            },
            Suggestion::Label(p) => {
                if !self.has_label(p) {
                    match &p.label_id {
                        Some(id) => self.draft.label_ids.push(id.clone()),
                        None => self.draft.new_labels.push(p.label_name.clone()),
                    }
                }
                Ok(None)
            },
        }
    }

    /// Accept every currently visible suggestion, in order.
    ///
    /// # Errors
    ///
    /// Propagates [`EditSession::accept`] failures.
    pub fn accept_all(&mut self) -> Result<(), QuickAddError> {
        for suggestion in self.suggestions() {
            self.accept(&suggestion)?;
        }
        Ok(())
    }

    /// Finish the task: the title is the text minus every non-dismissed
    /// pattern. Resets the session for the next task.
    pub fn submit(&mut self) -> TaskDraft {
        let parsed = self.parse();
        let spans = parsed
            .dates
            .iter()
            .map(|p| p as &dyn Pattern)
            .chain(parsed.labels.iter().map(|p| p as &dyn Pattern))
            .chain(parsed.priorities.iter().map(|p| p as &dyn Pattern))
            .filter(|p| !self.dismissed.contains(&p.key()))
            .map(|p| (p.start_index(), p.end_index()));

        let title = clean_text(&self.text, spans);
        let mut draft = std::mem::take(&mut self.draft);
        draft.title = title;
        self.clear();
        draft
    }

    /// Drop the text, the draft and all dismissals.
    pub fn clear(&mut self) {
        self.text.clear();
        self.dismissed.clear();
        self.draft = TaskDraft::default();
    }

    fn has_label(&self, pattern: &LabelPattern) -> bool {
        match &pattern.label_id {
            Some(id) => self.draft.label_ids.contains(id),
            None => self.draft.new_labels.contains(&pattern.label_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedClock, MockClock};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn session(text: &str) -> EditSession<MockClock> {
        let mut clock = MockClock::new();
        clock.expect_today().return_const(today());
        let mut session =
            EditSession::with_clock(vec![KnownLabel::new("9", "errands")], clock);
        session.set_text(text);
        session
    }

    fn keys(session: &EditSession<MockClock>) -> Vec<String> {
        session.suggestions().iter().map(Suggestion::key).collect()
    }

    #[test]
    fn test_suggestions_order() {
        let session = session("!! Buy milk #errands tomorrow");
        assert_eq!(
            keys(&session),
            vec!["date:tomorrow", "label:#errands", "priority:!!"]
        );
    }

    #[test]
    fn test_dismissed_suggestion_stays_hidden() {
        let mut session = session("meet friday");
        let friday = session.suggestions().remove(0);
        session.dismiss(&friday);
        assert!(session.is_dismissed("date:friday"));
        assert!(session.suggestions().is_empty());

        session.set_text("meet friday at the pub");
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_clearing_input_forgets_dismissals() {
        let mut session = session("meet friday");
        let friday = session.suggestions().remove(0);
        session.dismiss(&friday);

        session.set_text("");
        session.set_text("meet friday");
        assert_eq!(keys(&session), vec!["date:friday"]);
    }

    #[test]
    fn test_accept_date_rewrites_and_commits() {
        let mut session = session("pay rent tmrw");
        let date = session.suggestions().remove(0);
        let splice = session.accept(&date).unwrap().unwrap();

        assert_eq!(splice.text, "pay rent tomorrow");
        assert_eq!(session.text(), "pay rent tomorrow");
        assert_eq!(session.draft().due_date, today().succ_opt());
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_accept_priority_removes_text() {
        let mut session = session("ship it !!! today");
        let priority = session
            .suggestions()
            .into_iter()
            .find(|s| matches!(s, Suggestion::Priority(_)))
            .unwrap();
        session.accept(&priority).unwrap();

        assert_eq!(session.text(), "ship it today");
        assert_eq!(session.draft().priority, Some(3));
    }

    #[test]
    fn test_accept_label_leaves_text() {
        let mut session = session("milk #errands #shopping");
        for suggestion in session.suggestions() {
            assert_eq!(session.accept(&suggestion).unwrap(), None);
        }

        assert_eq!(session.text(), "milk #errands #shopping");
        assert_eq!(session.draft().label_ids, vec!["9"]);
        assert_eq!(session.draft().new_labels, vec!["shopping"]);
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_accept_missing_text_errors() {
        let mut session = session("ship it !!");
        let priority = session.suggestions().remove(0);
        session.set_text("ship it");

        let err = session.accept(&priority).unwrap_err();
        assert!(matches!(err, QuickAddError::SuggestionNotFound(key) if key == "priority:!!"));
    }

    #[test]
    fn test_accept_all_then_submit() {
        let mut session = session("Buy milk tomorrow #errands !!");
        session.accept_all().unwrap();
        let draft = session.submit();

        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.due_date, today().succ_opt());
        assert_eq!(draft.label_ids, vec!["9"]);
        assert_eq!(draft.priority, Some(2));

        assert_eq!(session.text(), "");
        assert_eq!(session.draft(), &TaskDraft::default());
    }

    #[test]
    fn test_hash_priority_is_not_offered_as_label() {
        let mut session = session("ship it #p3 #gym");
        assert_eq!(keys(&session), vec!["label:#gym", "priority:#p3"]);

        session.accept_all().unwrap();
        let draft = session.submit();
        assert_eq!(draft.title, "ship it");
        assert_eq!(draft.new_labels, vec!["gym"]);
        assert_eq!(draft.priority, Some(3));
    }

    #[test]
    fn test_submit_keeps_dismissed_text_in_title() {
        let mut session = session("read weekend papers friday");
        let friday = session.suggestions().remove(0);
        session.dismiss(&friday);

        let draft = session.submit();
        assert_eq!(draft.title, "read weekend papers friday");
        assert_eq!(draft.due_date, None);
        assert!(!session.is_dismissed("date:friday"));
    }

    #[test]
    fn test_fixed_clock_session() {
        let mut session = EditSession::with_clock(Vec::new(), FixedClock(today()));
        session.set_text("call mom today");
        let draft = {
            session.accept_all().unwrap();
            session.submit()
        };
        assert_eq!(draft.title, "call mom");
        assert_eq!(draft.due_date, Some(today()));
    }

    #[test]
    fn test_suggestion_labels() {
        let session = session("#errands #gym !! tomorrow");
        let labels: Vec<String> = session.suggestions().iter().map(Suggestion::label).collect();
        assert_eq!(labels, vec!["Tomorrow", "#errands", "#gym (new)", "Medium priority"]);
    }
}
