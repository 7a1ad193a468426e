//! Data models for Simple Note

mod note;
mod partition;

pub use note::{Note, NoteAction, NoteDraft, NoteId};
pub use partition::Partition;
