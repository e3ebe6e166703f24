// src/application/list.rs
use crate::domain::Note;

/// Owns the authoritative ordered collection of notes. Insertion order is
/// display order; identity is by id once assigned.
#[derive(Debug, Default)]
pub struct NoteList {
    notes: Vec<Note>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Overwrite the whole collection. Used on initial load.
    pub fn replace_all(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    /// Add one note to the end. Used after a confirmed creation.
    pub fn append(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Tentatively remove the note with the given id, returning it along
    /// with its position so a failed delete can put it back.
    pub fn take_by_id(&mut self, id: i64) -> Option<(usize, Note)> {
        let index = self.notes.iter().position(|note| note.id == id)?;
        Some((index, self.notes.remove(index)))
    }

    /// Reinsert a tentatively removed note at its original position.
    pub fn restore(&mut self, index: usize, note: Note) {
        let index = index.min(self.notes.len());
        self.notes.insert(index, note);
    }
}
