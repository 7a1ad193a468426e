//! Interactive terminal front end over [`NoteListEditor`].
//!
//! Request failures are only logged; the screen just shows whatever the next
//! refresh returned.

use std::io::{self, BufRead, Write};

use notes_core::{NoteAction, NoteId, NoteListEditor, NoteStore};

use crate::commands::common::{format_note_lines, open_store, parse_note_id};
use crate::error::CliError;

const HELP: &str = "\
Commands:
  list              show the current partition
  toggle            switch between active and deleted notes
  refresh           refetch the current partition
  title <text>      set the form title
  content <text>    set the form content
  edit <id>         load an active note into the form
  submit            create the note, or update the one being edited
  delete <id>       soft-delete an active note
  restore <id>      restore a deleted note
  help              show this help
  quit              leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Toggle,
    Refresh,
    Title(String),
    Content(String),
    Edit(NoteId),
    Submit,
    Delete(NoteId),
    Restore(NoteId),
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line; blank lines yield `None`.
    ///
    /// Text arguments keep their inner whitespace.
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));

        let command = match word.to_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "toggle" => Self::Toggle,
            "refresh" => Self::Refresh,
            "title" => Self::Title(rest.to_string()),
            "content" => Self::Content(rest.to_string()),
            "edit" => Self::Edit(required_id("edit", rest)?),
            "submit" => Self::Submit,
            "delete" | "rm" => Self::Delete(required_id("delete", rest)?),
            "restore" => Self::Restore(required_id("restore", rest)?),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn required_id(command: &'static str, rest: &str) -> Result<NoteId, CliError> {
    if rest.trim().is_empty() {
        return Err(CliError::MissingArgument(command));
    }
    parse_note_id(rest)
}

pub async fn run_shell(api_url: Option<String>) -> Result<(), CliError> {
    let mut editor = NoteListEditor::new(open_store(api_url)?);
    editor.refresh().await;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    drive(&mut editor, stdin.lock(), &mut stdout).await
}

/// Render the screen, then execute commands from `input` until EOF or `quit`
pub async fn drive<S, R, W>(
    editor: &mut NoteListEditor<S>,
    input: R,
    out: &mut W,
) -> Result<(), CliError>
where
    S: NoteStore,
    R: BufRead,
    W: Write,
{
    render_screen(editor, out)?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        match ShellCommand::parse(&line) {
            Ok(Some(command)) => {
                if !execute(editor, command, out).await? {
                    return Ok(());
                }
            }
            Ok(None) => {}
            Err(error) => writeln!(out, "{error}")?,
        }
        prompt(out)?;
    }

    Ok(())
}

/// Run one command; returns `false` when the shell should exit
pub async fn execute<S, W>(
    editor: &mut NoteListEditor<S>,
    command: ShellCommand,
    out: &mut W,
) -> Result<bool, CliError>
where
    S: NoteStore,
    W: Write,
{
    match command {
        ShellCommand::List => render_screen(editor, out)?,
        ShellCommand::Toggle => {
            editor.toggle_deleted().await;
            render_screen(editor, out)?;
        }
        ShellCommand::Refresh => {
            editor.refresh().await;
            render_screen(editor, out)?;
        }
        ShellCommand::Title(title) => {
            editor.set_title(title);
            render_form(editor, out)?;
        }
        ShellCommand::Content(content) => {
            editor.set_content(content);
            render_form(editor, out)?;
        }
        ShellCommand::Edit(id) => {
            if let Some(note) = offered(editor, id, NoteAction::Edit) {
                editor.begin_edit(&note);
                render_form(editor, out)?;
            } else {
                writeln!(out, "No note {id} to edit here")?;
            }
        }
        ShellCommand::Submit => {
            if editor.buffer().submission().is_none() {
                writeln!(out, "Title and content are required")?;
            } else {
                if let Err(error) = editor.submit().await {
                    tracing::debug!("Submit finished with error: {}", error);
                }
                render_screen(editor, out)?;
            }
        }
        ShellCommand::Delete(id) => {
            if offered(editor, id, NoteAction::Delete).is_some() {
                if let Err(error) = editor.soft_delete(id).await {
                    tracing::debug!("Delete finished with error: {}", error);
                }
                render_screen(editor, out)?;
            } else {
                writeln!(out, "No note {id} to delete here")?;
            }
        }
        ShellCommand::Restore(id) => {
            if offered(editor, id, NoteAction::Restore).is_some() {
                if let Err(error) = editor.restore(id).await {
                    tracing::debug!("Restore finished with error: {}", error);
                }
                render_screen(editor, out)?;
            } else {
                writeln!(out, "No note {id} to restore here")?;
            }
        }
        ShellCommand::Help => writeln!(out, "{HELP}")?,
        ShellCommand::Quit => return Ok(false),
    }

    Ok(true)
}

/// The displayed note `id`, if its card offers `action`
fn offered<S: NoteStore>(
    editor: &NoteListEditor<S>,
    id: NoteId,
    action: NoteAction,
) -> Option<notes_core::Note> {
    editor
        .visible_note(id)
        .filter(|note| note.allows(action))
        .cloned()
}

pub fn render_screen<S: NoteStore, W: Write>(
    editor: &NoteListEditor<S>,
    out: &mut W,
) -> Result<(), CliError> {
    let partition = editor.partition();
    writeln!(
        out,
        "== Notes App == {partition} notes  (toggle: {})",
        partition.toggle_label()
    )?;
    render_form(editor, out)?;

    let visible = editor.visible_notes();
    if visible.is_empty() {
        writeln!(out, "No notes")?;
    } else {
        for line in format_note_lines(&visible) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

pub fn render_form<S: NoteStore, W: Write>(
    editor: &NoteListEditor<S>,
    out: &mut W,
) -> Result<(), CliError> {
    let buffer = editor.buffer();
    writeln!(
        out,
        "[{}] title: {:?}  content: {:?}",
        buffer.mode().submit_label(),
        buffer.title,
        buffer.content
    )?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<(), CliError> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
