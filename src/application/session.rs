// src/application/session.rs
use crate::application::form::{NoteForm, SubmitOutcome};
use crate::application::list::NoteList;
use crate::application::repository::NoteRepository;
use crate::domain::{DomainError, Draft, Note};
use tracing::{debug, info, warn};

/// Lifecycle of the shell: a session starts loading, then is ready to
/// dispatch actions, or holds the load error until `load` is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Ready,
    LoadFailed(DomainError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(Note),
    /// The draft failed the presence gate; nothing was persisted and the
    /// draft keeps its values.
    Incomplete,
}

/// Application shell: wires the form and list controllers to the
/// repository and enforces the synchronization discipline between them.
///
/// Callers drive `load` to `Ready` before dispatching `create`/`delete`;
/// both act on the collection the load populated.
pub struct Session<R: NoteRepository> {
    repository: R,
    form: NoteForm,
    list: NoteList,
    state: SessionState,
}

impl<R: NoteRepository> Session<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            form: NoteForm::new(),
            list: NoteList::new(),
            state: SessionState::Loading,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn notes(&self) -> &[Note] {
        self.list.notes()
    }

    pub fn draft(&self) -> &Draft {
        self.form.draft()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.set_name(value);
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.form.set_description(value);
    }

    /// Fetch the persisted collection. An empty store yields `Ready` with
    /// an empty collection; a repository failure parks the session in
    /// `LoadFailed`, and calling `load` again retries.
    pub fn load(&mut self) -> Result<(), DomainError> {
        self.state = SessionState::Loading;
        match self.repository.find_all() {
            Ok(notes) => {
                debug!(count = notes.len(), "Loaded notes");
                self.list.replace_all(notes);
                self.state = SessionState::Ready;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Load failed");
                self.state = SessionState::LoadFailed(err.clone());
                Err(err)
            }
        }
    }

    /// Create a note from the current draft. The note is appended only
    /// after the repository confirms the write; on failure the collection
    /// is untouched and the draft keeps its values for a retry.
    pub fn create(&mut self) -> Result<CreateOutcome, DomainError> {
        let draft = match self.form.submit() {
            SubmitOutcome::Finalized(draft) => draft,
            SubmitOutcome::Incomplete => {
                debug!("Incomplete draft, submission blocked");
                return Ok(CreateOutcome::Incomplete);
            }
        };

        let note = self.repository.save(&draft)?;
        info!(note_id = note.id, "Created note");
        self.list.append(note.clone());
        self.form.reset();
        Ok(CreateOutcome::Created(note))
    }

    /// Delete a note in two phases: tentative local removal, then the
    /// storage call. A failed call restores the note at its original
    /// position before the error is returned. An id unknown locally is
    /// still offered to storage, which stays authoritative.
    pub fn delete(&mut self, id: i64) -> Result<(), DomainError> {
        let taken = self.list.take_by_id(id);
        match self.repository.delete_by_id(id) {
            Ok(()) => {
                info!(note_id = id, "Deleted note");
                Ok(())
            }
            Err(err) => {
                if let Some((index, note)) = taken {
                    self.list.restore(index, note);
                }
                warn!(note_id = id, error = %err, "Delete failed, local entry restored");
                Err(err)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn repository(&self) -> &R {
        &self.repository
    }
}
