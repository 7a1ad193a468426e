//! Create/edit form component

use dioxus::prelude::*;

use super::note_actions::run_mutation;
use crate::state::AppState;

const TITLE_PLACEHOLDER: &str = "Note Title";
const CONTENT_PLACEHOLDER: &str = "Note Content";

/// Title and content inputs with a submit button labelled by the edit mode
#[component]
pub fn NoteForm() -> Element {
    let state = use_context::<AppState>();
    let mut buffer = state.buffer;

    let title = buffer.read().title.clone();
    let content = buffer.read().content.clone();
    let submit_label = buffer.read().mode().submit_label();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(mutation) = buffer.peek().submission() else {
            tracing::debug!("Ignoring submit with empty title or content");
            return;
        };
        run_mutation(state, mutation);
    };

    rsx! {
        form {
            class: "note-form",
            onsubmit: on_submit,

            input {
                r#type: "text",
                placeholder: TITLE_PLACEHOLDER,
                required: true,
                value: "{title}",
                oninput: move |evt: FormEvent| buffer.write().title = evt.value(),
            }

            textarea {
                placeholder: CONTENT_PLACEHOLDER,
                rows: "4",
                required: true,
                value: "{content}",
                oninput: move |evt: FormEvent| buffer.write().content = evt.value(),
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                "{submit_label}"
            }
        }
    }
}
