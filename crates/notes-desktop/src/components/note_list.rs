//! Note list component

use dioxus::prelude::*;

use super::NoteCard;
use crate::state::AppState;

/// Notes of the current partition, in store order
#[component]
pub fn NoteList() -> Element {
    let state = use_context::<AppState>();
    let partition = state.partition();
    let notes = state.visible_notes();

    rsx! {
        div {
            class: "note-list",

            if notes.is_empty() {
                div {
                    class: "note-list-empty",
                    "No {partition} notes"
                }
            }

            for note in notes {
                NoteCard {
                    key: "{note.id}",
                    note: note.clone(),
                }
            }
        }
    }
}
