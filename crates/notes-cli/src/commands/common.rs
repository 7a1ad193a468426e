use notes_core::config::ClientConfig;
use notes_core::{HttpNoteStore, Note, NoteId, NoteStore};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub is_deleted: bool,
    pub actions: Vec<&'static str>,
}

pub fn open_store(api_url: Option<String>) -> Result<HttpNoteStore, CliError> {
    let config = ClientConfig::resolve(api_url)?;
    tracing::debug!("Using notes API at {} ({})", config.api_base_url, config.source);
    Ok(HttpNoteStore::new(config.api_base_url)?)
}

pub fn parse_note_id(raw: &str) -> Result<NoteId, CliError> {
    raw.parse::<NoteId>()
        .map_err(|_| CliError::InvalidNoteId(raw.trim().to_string()))
}

pub fn require_field(value: String, missing: CliError) -> Result<String, CliError> {
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value)
    }
}

pub fn format_note_lines(notes: &[&Note]) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let title = note_title(note, 24);
            let preview = note.content_preview(40);
            let actions = render_actions(note);
            format!("{:>6}  {title:<24}  {preview:<40}  {actions}", note.id.get())
        })
        .collect()
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.get(),
        title: note.title.clone(),
        content: note.content.clone(),
        is_deleted: note.is_deleted(),
        actions: note.actions().iter().map(|action| action.label()).collect(),
    }
}

pub fn render_actions(note: &Note) -> String {
    note.actions()
        .iter()
        .map(|action| format!("[{action}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn note_title(note: &Note, max_chars: usize) -> String {
    notes_core::util::preview_line(&note.title, max_chars)
}

/// Print a partition listing, or a placeholder when it is empty
pub fn print_notes(notes: &[&Note]) {
    if notes.is_empty() {
        println!("No notes");
        return;
    }
    for line in format_note_lines(notes) {
        println!("{line}");
    }
}

/// Fetch a partition, surfacing transport and payload failures as errors.
///
/// `notes list` exits non-zero on these, while the shell and the desktop app
/// go through the fail-soft refresh and just show an empty list.
pub async fn list_partition<S: NoteStore>(
    store: &S,
    partition: notes_core::Partition,
) -> Result<Vec<Note>, CliError> {
    let notes = store.list(partition).await?;
    Ok(notes
        .into_iter()
        .filter(|note| partition.contains(note))
        .collect())
}
