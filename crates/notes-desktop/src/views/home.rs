//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{NoteForm, NoteList, Toolbar};

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",

            Toolbar {}
            NoteForm {}
            NoteList {}
        }
    }
}
