// src/application/repository.rs
use crate::domain::{DomainError, Draft, Note};

/// Boundary over persistent note storage. Implementations may sit on a
/// local device database or a remote backend; callers cannot tell which.
pub trait NoteRepository {
    /// Return the full persisted collection in insertion order.
    /// An empty store yields an empty vector, not an error.
    fn find_all(&mut self) -> Result<Vec<Note>, DomainError>;

    /// Persist a draft and return the stored note with its assigned id.
    fn save(&mut self, draft: &Draft) -> Result<Note, DomainError>;

    /// Remove the note with the given id from storage.
    /// Fails with `NoteNotFound` when no such id exists.
    fn delete_by_id(&mut self, id: i64) -> Result<(), DomainError>;
}
