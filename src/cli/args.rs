// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the note store (optional)
    #[arg(short, long, value_name = "STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (add, list, or delete)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a note from a name and a description
    Add {
        /// Note name
        #[arg(value_name = "NAME")]
        name: String,

        /// Note description
        #[arg(value_name = "DESCRIPTION")]
        description: String,
    },

    /// List notes in creation order
    List {
        /// Output notes as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Delete a note by its id
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },
}
