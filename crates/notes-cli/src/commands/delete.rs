use notes_core::NoteListEditor;

use crate::commands::common::{open_store, parse_note_id, print_notes};
use crate::error::CliError;

pub async fn run_delete(api_url: Option<String>, id: &str) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    let mut editor = NoteListEditor::new(open_store(api_url)?);

    editor.soft_delete(note_id).await?;
    print_notes(&editor.visible_notes());
    Ok(())
}

pub async fn run_restore(api_url: Option<String>, id: &str) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    let mut editor = NoteListEditor::new(open_store(api_url)?);
    editor.set_show_deleted(true).await;

    editor.restore(note_id).await?;
    print_notes(&editor.visible_notes());
    Ok(())
}
