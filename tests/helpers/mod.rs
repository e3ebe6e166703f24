use anyhow::{Context, Result};
use jotter::infrastructure::SqliteRepository;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for working with temporary note stores
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub store_path: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    /// Create a new empty store in a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;

        let store_path = temp_dir.path().join("notes.db3");

        Ok(Self {
            _temp_dir: temp_dir,
            store_path,
        })
    }

    /// Open a repository over this store. Can be called repeatedly to
    /// simulate a fresh application start against the same data.
    pub fn open_repository(&self) -> Result<SqliteRepository> {
        SqliteRepository::new(&self.store_path)
    }
}
