use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] notes_core::Error),
    #[error(transparent)]
    Store(#[from] notes_core::StoreError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Note title cannot be empty")]
    EmptyTitle,
    #[error("Note content cannot be empty")]
    EmptyContent,
    #[error("Invalid note ID: {0}")]
    InvalidNoteId(String),
    #[error("Nothing to change: pass --title and/or --content")]
    NothingToEdit,
    #[error("Unknown command: {0} (type `help`)")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("Configuration error: {0}")]
    Config(String),
}
