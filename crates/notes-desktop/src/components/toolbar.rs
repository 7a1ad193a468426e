//! Toolbar component

use dioxus::prelude::*;

use crate::state::AppState;

/// Page heading and the active/deleted partition toggle
#[component]
pub fn Toolbar() -> Element {
    let state = use_context::<AppState>();
    let mut show_deleted = state.show_deleted;
    let label = state.partition().toggle_label();

    rsx! {
        div {
            class: "toolbar",

            h1 { "Notes App" }

            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    let next = !show_deleted();
                    tracing::debug!("Switching to {} notes", if next { "deleted" } else { "active" });
                    show_deleted.set(next);
                },
                "{label}"
            }
        }
    }
}
