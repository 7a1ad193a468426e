//! Form state for composing or modifying a single note.

use crate::models::{Note, NoteDraft, NoteId};
use crate::store::Mutation;

/// Whether a submission creates a note or updates one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(NoteId),
}

impl EditMode {
    /// Submit button label
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Create Note",
            Self::Edit(_) => "Update Note",
        }
    }
}

/// Title, content, and the note being edited, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub title: String,
    pub content: String,
    pub editing_id: Option<NoteId>,
}

impl EditBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn mode(&self) -> EditMode {
        match self.editing_id {
            Some(id) => EditMode::Edit(id),
            None => EditMode::Create,
        }
    }

    /// Load `note` into the form and switch to edit mode
    pub fn begin_edit(&mut self, note: &Note) {
        self.title.clone_from(&note.title);
        self.content.clone_from(&note.content);
        self.editing_id = Some(note.id);
    }

    #[must_use]
    pub fn draft(&self) -> NoteDraft {
        NoteDraft::new(self.title.clone(), self.content.clone())
    }

    /// The mutation a form submit dispatches, or `None` while a required field is empty
    #[must_use]
    pub fn submission(&self) -> Option<Mutation> {
        let draft = self.draft();
        if !draft.is_complete() {
            return None;
        }

        Some(match self.editing_id {
            Some(id) => Mutation::Update { id, draft },
            None => Mutation::Create(draft),
        })
    }

    /// Empty the text fields, keeping the mode
    pub fn clear_fields(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    /// Empty the fields and return to create mode
    pub fn clear(&mut self) {
        self.clear_fields();
        self.editing_id = None;
    }

    /// Apply the post-request form reset for `mutation`.
    ///
    /// A successful create empties the fields. Any update, successful or not,
    /// empties the form and leaves edit mode. Deletes and restores leave the
    /// form alone.
    pub fn settle(&mut self, mutation: &Mutation, succeeded: bool) {
        match mutation {
            Mutation::Create(_) if succeeded => self.clear_fields(),
            Mutation::Update { .. } => self.clear(),
            Mutation::Create(_) | Mutation::SoftDelete(_) | Mutation::Restore(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(title: &str, content: &str) -> EditBuffer {
        EditBuffer {
            title: title.to_string(),
            content: content.to_string(),
            editing_id: None,
        }
    }

    #[test]
    fn new_buffer_is_in_create_mode() {
        let buffer = EditBuffer::new();
        assert_eq!(buffer.mode(), EditMode::Create);
        assert_eq!(buffer.mode().submit_label(), "Create Note");
    }

    #[test]
    fn begin_edit_copies_note_and_enters_edit_mode() {
        let mut buffer = filled("draft", "unsaved");
        buffer.begin_edit(&Note::new(7, "Title", "Body"));

        assert_eq!(buffer.title, "Title");
        assert_eq!(buffer.content, "Body");
        assert_eq!(buffer.mode(), EditMode::Edit(NoteId::new(7)));
        assert_eq!(buffer.mode().submit_label(), "Update Note");
    }

    #[test]
    fn submission_requires_both_fields() {
        assert_eq!(filled("", "B").submission(), None);
        assert_eq!(filled("A", "").submission(), None);
    }

    #[test]
    fn submission_dispatches_on_mode() {
        let mut buffer = filled("A", "B");
        assert_eq!(
            buffer.submission(),
            Some(Mutation::Create(NoteDraft::new("A", "B")))
        );

        buffer.begin_edit(&Note::new(3, "Old", "Body"));
        buffer.title = "New".to_string();
        assert_eq!(
            buffer.submission(),
            Some(Mutation::Update {
                id: NoteId::new(3),
                draft: NoteDraft::new("New", "Body"),
            })
        );
    }

    #[test]
    fn settle_after_create() {
        let create = Mutation::Create(NoteDraft::new("A", "B"));

        let mut failed = filled("A", "B");
        failed.settle(&create, false);
        assert_eq!(failed, filled("A", "B"));

        let mut succeeded = filled("A", "B");
        succeeded.settle(&create, true);
        assert_eq!(succeeded, EditBuffer::new());
    }

    #[test]
    fn settle_after_update_always_leaves_edit_mode() {
        for succeeded in [true, false] {
            let mut buffer = EditBuffer::new();
            buffer.begin_edit(&Note::new(3, "A", "B"));
            let update = buffer.submission().unwrap();
            buffer.settle(&update, succeeded);
            assert_eq!(buffer, EditBuffer::new());
        }
    }

    #[test]
    fn settle_after_delete_keeps_form() {
        let mut buffer = EditBuffer::new();
        buffer.begin_edit(&Note::new(3, "A", "B"));
        let before = buffer.clone();
        buffer.settle(&Mutation::SoftDelete(NoteId::new(9)), true);
        buffer.settle(&Mutation::Restore(NoteId::new(9)), false);
        assert_eq!(buffer, before);
    }
}
