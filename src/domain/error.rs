// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),
}
