// src/domain/note.rs
use serde::Serialize;

/// A persisted note. The id is assigned by the storage layer on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// The in-progress form state. A draft has no id until it is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub description: String,
}
