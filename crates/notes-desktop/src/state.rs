//! Application state management
//!
//! Controller state shared with every component through a context provider.

use dioxus::prelude::*;

use notes_core::{EditBuffer, HttpNoteStore, Note, Partition};

/// Note list and edit form state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Last fetched snapshot, replaced wholesale on every refresh
    pub notes: Signal<Vec<Note>>,
    /// Whether the deleted partition is on screen
    pub show_deleted: Signal<bool>,
    /// Form fields and the note being edited
    pub buffer: Signal<EditBuffer>,
    /// Remote store client
    pub store: Signal<HttpNoteStore>,
}

impl AppState {
    /// Partition selected by the toggle
    #[must_use]
    pub fn partition(&self) -> Partition {
        Partition::from_show_deleted((self.show_deleted)())
    }

    /// Snapshot notes belonging to the current partition
    #[must_use]
    pub fn visible_notes(&self) -> Vec<Note> {
        let partition = self.partition();
        self.notes
            .read()
            .iter()
            .filter(|note| partition.contains(note))
            .cloned()
            .collect()
    }
}
