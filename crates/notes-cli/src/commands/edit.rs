use notes_core::NoteListEditor;

use crate::commands::common::{open_store, parse_note_id, print_notes, require_field};
use crate::error::CliError;

pub async fn run_edit(
    api_url: Option<String>,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    if title.is_none() && content.is_none() {
        return Err(CliError::NothingToEdit);
    }

    let mut editor = NoteListEditor::new(open_store(api_url)?);
    editor.refresh().await;
    editor.begin_edit_id(note_id)?;

    if let Some(title) = title {
        editor.set_title(require_field(title, CliError::EmptyTitle)?);
    }
    if let Some(content) = content {
        editor.set_content(require_field(content, CliError::EmptyContent)?);
    }
    editor.submit().await?;

    print_notes(&editor.visible_notes());
    Ok(())
}
