//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::util::preview_line;

/// A store-assigned note identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wrap a raw identifier returned by the store
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A note record as returned by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Store-assigned identifier
    pub id: NoteId,
    /// Note title
    pub title: String,
    /// Note body
    pub content: String,
    /// Soft delete flag; absent means active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
}

impl Note {
    /// Build an active note
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(id),
            title: title.into(),
            content: content.into(),
            is_deleted: None,
        }
    }

    /// Mark this note as soft-deleted
    #[must_use]
    pub fn deleted(mut self) -> Self {
        self.is_deleted = Some(true);
        self
    }

    /// Whether the note is soft-deleted (an absent flag counts as active)
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.is_deleted.unwrap_or(false)
    }

    /// Actions offered for this note in the list view
    #[must_use]
    pub fn actions(&self) -> &'static [NoteAction] {
        if self.is_deleted() {
            &[NoteAction::Restore]
        } else {
            &[NoteAction::Edit, NoteAction::Delete]
        }
    }

    /// Whether the list view offers `action` for this note
    #[must_use]
    pub fn allows(&self, action: NoteAction) -> bool {
        self.actions().contains(&action)
    }

    /// First line of the content, truncated to `max_len` characters
    #[must_use]
    pub fn content_preview(&self, max_len: usize) -> String {
        preview_line(&self.content, max_len)
    }
}

/// Request body for create and update calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields are filled in.
    ///
    /// Mirrors a required form field: any non-empty value passes, including whitespace.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }
}

/// Per-note affordance in the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteAction {
    Edit,
    Delete,
    Restore,
}

impl NoteAction {
    /// Button label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::Restore => "Restore",
        }
    }
}

impl fmt::Display for NoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_note_id_parse() {
        let id: NoteId = " 42 ".parse().unwrap();
        assert_eq!(id, NoteId::new(42));
        assert!("abc".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_note_decodes_camel_case_flag() {
        let note: Note =
            serde_json::from_str(r#"{"id":5,"title":"T","content":"C","isDeleted":true}"#)
                .unwrap();
        assert_eq!(note, Note::new(5, "T", "C").deleted());
        assert!(note.is_deleted());
    }

    #[test]
    fn test_note_missing_or_null_flag_is_active() {
        let missing: Note = serde_json::from_str(r#"{"id":1,"title":"A","content":"B"}"#).unwrap();
        assert_eq!(missing.is_deleted, None);
        assert!(!missing.is_deleted());

        let null: Note =
            serde_json::from_str(r#"{"id":1,"title":"A","content":"B","isDeleted":null}"#)
                .unwrap();
        assert!(!null.is_deleted());
    }

    #[test]
    fn test_note_ignores_unknown_fields() {
        let note: Note = serde_json::from_str(
            r#"{"id":3,"title":"A","content":"B","isDeleted":false,"createdAt":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(note.is_deleted, Some(false));
    }

    #[test]
    fn test_active_note_actions() {
        let note = Note::new(1, "A", "B");
        assert_eq!(note.actions(), &[NoteAction::Edit, NoteAction::Delete]);
        assert!(!note.allows(NoteAction::Restore));
    }

    #[test]
    fn test_deleted_note_only_restores() {
        let note = Note::new(5, "A", "B").deleted();
        assert_eq!(note.actions(), &[NoteAction::Restore]);
        assert!(!note.allows(NoteAction::Edit));
        assert!(!note.allows(NoteAction::Delete));
    }

    #[test]
    fn test_draft_serializes_title_and_content_only() {
        let body = serde_json::to_value(NoteDraft::new("A", "B")).unwrap();
        assert_eq!(body, serde_json::json!({"title": "A", "content": "B"}));
    }

    #[test]
    fn test_draft_completeness() {
        assert!(NoteDraft::new("A", "B").is_complete());
        assert!(!NoteDraft::new("", "B").is_complete());
        assert!(!NoteDraft::new("A", "").is_complete());
        assert!(NoteDraft::new(" ", " ").is_complete());
    }
}
