// src/infrastructure/sqlite.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Draft, Note};
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL
)";

/// Local-device note store backed by a single-table SQLite database.
/// Row ids double as note ids, so insertion order is id order.
pub struct SqliteRepository {
    conn: Connection,
    path: PathBuf,
}

impl SqliteRepository {
    pub fn new<P: AsRef<Path>>(store_path: P) -> Result<Self> {
        let path = PathBuf::from(store_path.as_ref());
        debug!(?path, "Opening note store");

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create store directory: {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(&path).map_err(|e| {
            DomainError::StorageUnavailable(format!(
                "Failed to open note store {}: {}",
                path.display(),
                e
            ))
        })?;

        conn.execute(SCHEMA, []).map_err(|e| {
            DomainError::StorageUnavailable(format!("Failed to initialize note store: {}", e))
        })?;

        info!(?path, "Opened note store");
        Ok(Self { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteRepository for SqliteRepository {
    #[instrument(level = "debug", skip(self))]
    fn find_all(&mut self) -> Result<Vec<Note>, DomainError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, description FROM notes ORDER BY id")
            .map_err(|e| DomainError::StorageUnavailable(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Note {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                })
            })
            .map_err(|e| DomainError::StorageUnavailable(e.to_string()))?;

        let notes = rows
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::StorageUnavailable(e.to_string()))?;

        debug!(count = notes.len(), "Fetched notes from store");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self))]
    fn save(&mut self, draft: &Draft) -> Result<Note, DomainError> {
        self.conn
            .execute(
                "INSERT INTO notes (name, description) VALUES (?1, ?2)",
                params![draft.name, draft.description],
            )
            .map_err(|e| DomainError::PersistenceFailure(format!("Failed to write note: {}", e)))?;

        let id = self.conn.last_insert_rowid();
        info!(note_id = id, "Persisted note");

        Ok(Note {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_by_id(&mut self, id: i64) -> Result<(), DomainError> {
        let affected = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id])
            .map_err(|e| {
                DomainError::PersistenceFailure(format!("Failed to delete note: {}", e))
            })?;

        if affected == 0 {
            debug!(note_id = id, "Note not found for deletion");
            return Err(DomainError::NoteNotFound(id));
        }

        info!(note_id = id, "Deleted note from store");
        Ok(())
    }
}
