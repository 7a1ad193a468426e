use notes_core::NoteListEditor;

use crate::commands::common::{open_store, print_notes, require_field};
use crate::error::CliError;

pub async fn run_add(api_url: Option<String>, title: String, content: String) -> Result<(), CliError> {
    let title = require_field(title, CliError::EmptyTitle)?;
    let content = require_field(content, CliError::EmptyContent)?;

    let mut editor = NoteListEditor::new(open_store(api_url)?);
    editor.set_title(title);
    editor.set_content(content);
    editor.submit().await?;

    print_notes(&editor.visible_notes());
    Ok(())
}
