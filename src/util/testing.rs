// src/util/testing.rs

use anyhow::Result;
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Draft, Note};

enum FindAllBehavior {
    Succeed,
    Fail(DomainError),
    FailOnce(DomainError),
}

/// Shared mock repository for testing use cases that depend on
/// NoteRepository.
///
/// By default it behaves like a well-functioning store: `find_all` returns
/// the seeded notes, `save` assigns the next id and retains the note, and
/// `delete_by_id` removes a seeded note or reports `NoteNotFound`. The
/// builder can force any operation to fail instead. Call counters let
/// tests assert how often persistence was asked to do something.
///
/// # Examples
///
/// ```
/// use jotter::util::testing::MockNoteRepository;
/// use jotter::domain::{DomainError, Note};
///
/// let mock = MockNoteRepository::builder()
///     .with_note(Note {
///         id: 1,
///         name: "groceries".to_string(),
///         description: "milk, eggs".to_string(),
///     })
///     .with_delete_failure(1, DomainError::PersistenceFailure("timeout".to_string()))
///     .build();
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    next_id: i64,
    find_all_behavior: FindAllBehavior,
    save_failure: Option<DomainError>,
    delete_failures: HashMap<i64, DomainError>,
    find_all_calls: usize,
    save_calls: usize,
    delete_calls: usize,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls
    }

    /// Current store contents, in insertion order.
    pub fn stored(&self) -> &[Note] {
        &self.notes
    }
}

impl NoteRepository for MockNoteRepository {
    fn find_all(&mut self) -> Result<Vec<Note>, DomainError> {
        self.find_all_calls += 1;
        match &self.find_all_behavior {
            FindAllBehavior::Succeed => Ok(self.notes.clone()),
            FindAllBehavior::Fail(err) => Err(err.clone()),
            FindAllBehavior::FailOnce(err) => {
                let err = err.clone();
                self.find_all_behavior = FindAllBehavior::Succeed;
                Err(err)
            }
        }
    }

    fn save(&mut self, draft: &Draft) -> Result<Note, DomainError> {
        self.save_calls += 1;
        if let Some(err) = &self.save_failure {
            return Err(err.clone());
        }
        let note = Note {
            id: self.next_id,
            name: draft.name.clone(),
            description: draft.description.clone(),
        };
        self.next_id += 1;
        self.notes.push(note.clone());
        Ok(note)
    }

    fn delete_by_id(&mut self, id: i64) -> Result<(), DomainError> {
        self.delete_calls += 1;
        if let Some(err) = self.delete_failures.get(&id) {
            return Err(err.clone());
        }
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(DomainError::NoteNotFound(id))?;
        self.notes.remove(index);
        Ok(())
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    next_id: i64,
    find_all_behavior: FindAllBehavior,
    save_failure: Option<DomainError>,
    delete_failures: HashMap<i64, DomainError>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
            find_all_behavior: FindAllBehavior::Succeed,
            save_failure: None,
            delete_failures: HashMap::new(),
        }
    }

    /// Seed the store with a note. The next assigned id stays above every
    /// seeded id.
    pub fn with_note(mut self, note: Note) -> Self {
        if note.id >= self.next_id {
            self.next_id = note.id + 1;
        }
        self.notes.push(note);
        self
    }

    /// Override the id the next `save` will assign.
    pub fn with_next_id(mut self, next_id: i64) -> Self {
        self.next_id = next_id;
        self
    }

    /// Make every `find_all` call fail.
    pub fn with_find_all_failure(mut self, err: DomainError) -> Self {
        self.find_all_behavior = FindAllBehavior::Fail(err);
        self
    }

    /// Make only the first `find_all` call fail. Used for retry tests.
    pub fn with_find_all_failure_once(mut self, err: DomainError) -> Self {
        self.find_all_behavior = FindAllBehavior::FailOnce(err);
        self
    }

    /// Make every `save` call fail.
    pub fn with_save_failure(mut self, err: DomainError) -> Self {
        self.save_failure = Some(err);
        self
    }

    /// Make `delete_by_id` fail for a specific id.
    pub fn with_delete_failure(mut self, id: i64, err: DomainError) -> Self {
        self.delete_failures.insert(id, err);
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            next_id: self.next_id,
            find_all_behavior: self.find_all_behavior,
            save_failure: self.save_failure,
            delete_failures: self.delete_failures,
            find_all_calls: 0,
            save_calls: 0,
            delete_calls: 0,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
