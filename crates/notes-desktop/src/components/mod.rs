//! UI Components
//!
//! Reusable UI components for the desktop application.

mod note_actions;
mod note_card;
mod note_form;
mod note_list;
mod toolbar;

pub use note_actions::refresh_notes;
pub use note_card::NoteCard;
pub use note_form::NoteForm;
pub use note_list::NoteList;
pub use toolbar::Toolbar;
