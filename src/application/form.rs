// src/application/form.rs
use crate::domain::Draft;

/// Outcome of a submission attempt. An incomplete draft is not an error:
/// submission is blocked and the draft keeps its current values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Finalized(Draft),
    Incomplete,
}

/// Owns the draft being typed. Field edits are unvalidated; the presence
/// gate applies only at submission.
#[derive(Debug, Default)]
pub struct NoteForm {
    draft: Draft,
}

impl NoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
    }

    /// Clear both fields. Called only after a confirmed creation.
    pub fn reset(&mut self) {
        self.draft = Draft::default();
    }

    /// Presence gate: both fields must be non-empty. Whitespace-only
    /// values pass; the check is emptiness, not content.
    pub fn submit(&self) -> SubmitOutcome {
        if self.draft.name.is_empty() || self.draft.description.is_empty() {
            return SubmitOutcome::Incomplete;
        }
        SubmitOutcome::Finalized(self.draft.clone())
    }
}
