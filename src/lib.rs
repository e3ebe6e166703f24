// src/lib.rs
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::application::{CreateOutcome, Session};
use crate::cli::args::{Args, Command};
use crate::infrastructure::{Config, SqliteRepository};
use crate::ports::TextPresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting jotter with arguments");

    let config = load_config()?;

    // Initialize infrastructure
    let store_path = match args.store {
        Some(path) => {
            debug!(?path, "Using provided store path");
            path
        }
        None => find_store_path(&config)?,
    };

    let repository = SqliteRepository::new(&store_path)?;
    debug!(store = ?repository.path(), "Using note store");

    // Initialize application
    let mut session = Session::new(repository);
    session
        .load()
        .context("Failed to load notes from the store")?;

    // Initialize presentation
    let presenter = TextPresenter::new();

    // Execute use case
    match args.command {
        Command::Add { name, description } => {
            session.set_name(name);
            session.set_description(description);
            match session.create().context("Failed to create note")? {
                CreateOutcome::Created(note) => {
                    info!(note_id = note.id, "Note created");
                    print!("{}", presenter.render_note(&note));
                }
                CreateOutcome::Incomplete => {
                    // Presence gate: blocked submissions stay silent.
                    debug!("Submission blocked, draft incomplete");
                }
            }
        }
        Command::List { json } => {
            let as_json = json || config.display.format == "json";
            if as_json {
                println!("{}", serde_json::to_string_pretty(session.notes())?);
            } else {
                print!("{}", presenter.render_list(session.notes()));
            }
        }
        Command::Delete { note_id } => {
            session
                .delete(note_id)
                .with_context(|| format!("Failed to delete note {}", note_id))?;
            println!("Deleted note {}", note_id);
        }
    }

    Ok(())
}

fn load_config() -> Result<Config> {
    let Some(config_dir) = dirs::config_dir() else {
        debug!("No config directory on this platform, using defaults");
        return Ok(Config::default());
    };
    let path = config_dir.join("jotter").join("config.toml");
    if path.exists() {
        debug!(?path, "Loading config");
        Config::load(&path)
    } else {
        Ok(Config::default())
    }
}

/// Resolve the note store location: configured path first, otherwise the
/// platform data directory.
pub fn find_store_path(config: &Config) -> Result<PathBuf> {
    if !config.store.path.is_empty() {
        return Ok(PathBuf::from(&config.store.path));
    }

    let data_dir = dirs::data_dir().context("Could not find user data directory")?;
    Ok(data_dir.join("jotter").join("notes.db3"))
}
