use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "notes")]
#[command(about = "Create, edit, delete, and restore notes on a notes REST API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the notes API (overrides NOTES_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List notes of one partition
    #[command(alias = "ls")]
    List {
        /// Show deleted notes instead of active ones
        #[arg(long)]
        deleted: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        title: String,
        /// Note content
        content: String,
    },
    /// Update an active note's title and/or content
    Edit {
        /// Note ID
        id: String,
        /// Replacement title
        #[arg(long)]
        title: Option<String>,
        /// Replacement content
        #[arg(long)]
        content: Option<String>,
    },
    /// Soft-delete a note
    Delete {
        /// Note ID
        id: String,
    },
    /// Restore a soft-deleted note
    Restore {
        /// Note ID
        id: String,
    },
    /// Interactive list and edit form (default when no command is given)
    Shell,
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Inspect or change the saved API base URL
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved API base URL and where it came from
    Show,
    /// Save an API base URL to the config file
    SetUrl {
        /// Base URL, e.g. http://localhost:3000
        url: String,
    },
}
