//! Note card component

use dioxus::prelude::*;
use notes_core::{Mutation, Note, NoteAction};

use super::note_actions::run_mutation;
use crate::state::AppState;

/// Button class for an action affordance
const fn action_class(action: NoteAction) -> &'static str {
    match action {
        NoteAction::Edit => "btn btn-edit",
        NoteAction::Delete => "btn btn-delete",
        NoteAction::Restore => "btn btn-restore",
    }
}

/// A single note with the actions its deleted flag allows.
#[component]
pub fn NoteCard(note: Note) -> Element {
    let state = use_context::<AppState>();
    let mut buffer = state.buffer;

    rsx! {
        div {
            class: "note-card",

            h3 { "{note.title}" }
            p { "{note.content}" }

            div {
                class: "note-card-actions",

                for action in note.actions().iter().copied() {
                    button {
                        key: "{action}",
                        class: action_class(action),
                        r#type: "button",
                        onclick: {
                            let note = note.clone();
                            move |_| match action {
                                NoteAction::Edit => {
                                    tracing::debug!("Editing note {}", note.id);
                                    buffer.write().begin_edit(&note);
                                }
                                NoteAction::Delete => run_mutation(state, Mutation::SoftDelete(note.id)),
                                NoteAction::Restore => run_mutation(state, Mutation::Restore(note.id)),
                            }
                        },
                        "{action}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_classes_are_distinct() {
        let classes = [
            action_class(NoteAction::Edit),
            action_class(NoteAction::Delete),
            action_class(NoteAction::Restore),
        ];
        assert_eq!(classes[0], "btn btn-edit");
        assert_ne!(classes[1], classes[2]);
        assert!(classes.iter().all(|class| class.starts_with("btn ")));
    }
}
