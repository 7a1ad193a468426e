//! Main application component

use dioxus::prelude::*;

use notes_core::{EditBuffer, HttpNoteStore};

use crate::components::refresh_notes;
use crate::state::AppState;
use crate::views::Home;

const APP_CSS: &str = r"
body { margin: 0; font-family: system-ui, -apple-system, sans-serif; background: #f9fafb; color: #111827; }
.home-container { max-width: 56rem; margin: 0 auto; padding: 24px; }
.toolbar { display: flex; align-items: center; justify-content: space-between; margin-bottom: 32px; }
.toolbar h1 { font-size: 28px; margin: 0; }
.note-form { display: flex; flex-direction: column; gap: 16px; margin-bottom: 32px; }
.note-form input, .note-form textarea { padding: 8px 16px; border: 1px solid #d1d5db; border-radius: 6px; font: inherit; }
.btn { padding: 6px 14px; border-radius: 6px; border: 1px solid transparent; cursor: pointer; font: inherit; }
.btn-primary { background: #2563eb; color: white; }
.btn-edit { color: #2563eb; border-color: #2563eb; background: transparent; }
.btn-delete { color: #dc2626; border-color: #dc2626; background: transparent; }
.btn-restore { color: #16a34a; border-color: #16a34a; background: transparent; }
.note-list { display: grid; gap: 16px; padding: 16px; background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.note-card { padding: 16px; border: 1px solid #e5e7eb; border-radius: 8px; }
.note-card h3 { margin: 0 0 8px 0; font-size: 18px; }
.note-card p { margin: 0 0 16px 0; color: #4b5563; white-space: pre-wrap; }
.note-card-actions { display: flex; gap: 8px; }
.note-list-empty { padding: 20px; text-align: center; color: #9ca3af; }
";

/// Root application component
#[component]
pub fn App() -> Element {
    let client = use_context::<HttpNoteStore>();
    let store = use_signal(move || client);
    let notes = use_signal(Vec::new);
    let show_deleted = use_signal(|| false);
    let buffer = use_signal(EditBuffer::new);

    let state = use_context_provider(|| AppState {
        notes,
        show_deleted,
        buffer,
        store,
    });

    // Runs once at startup and again whenever the partition toggle changes
    use_effect(move || refresh_notes(state));

    rsx! {
        style { "{APP_CSS}" }
        Home {}
    }
}
