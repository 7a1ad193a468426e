//! notes-core - Core library for Simple Note
//!
//! This crate contains the note model, the remote store client, and the
//! list/editor controller shared by the terminal shell and the desktop app.

pub mod config;
pub mod editor;
pub mod error;
pub mod models;
pub mod store;
pub mod util;

pub use editor::{EditBuffer, EditMode, NoteListEditor};
pub use error::{Error, Result};
pub use models::{Note, NoteAction, NoteDraft, NoteId, Partition};
pub use store::{HttpNoteStore, Mutation, NoteStore, StoreError};
