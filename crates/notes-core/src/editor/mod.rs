//! List/editor controller.
//!
//! Holds the last fetched snapshot, the partition flag and the form buffer,
//! and keeps them in step with the remote store. Every mutation is followed
//! by a full refetch; the snapshot is always replaced, never merged.

mod buffer;

pub use buffer::{EditBuffer, EditMode};

use crate::error::{Error, Result};
use crate::models::{Note, NoteDraft, NoteId, Partition};
use crate::store::{apply_mutation, fetch_snapshot, Mutation, NoteStore};

/// Controller for the single-page note list and edit form.
pub struct NoteListEditor<S> {
    store: S,
    notes: Vec<Note>,
    show_deleted: bool,
    buffer: EditBuffer,
}

impl<S: NoteStore> NoteListEditor<S> {
    /// Create an editor showing the active partition. Call [`Self::refresh`]
    /// once to load the initial snapshot.
    pub fn new(store: S) -> Self {
        Self {
            store,
            notes: Vec::new(),
            show_deleted: false,
            buffer: EditBuffer::new(),
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Last fetched snapshot in store order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub const fn show_deleted(&self) -> bool {
        self.show_deleted
    }

    pub const fn partition(&self) -> Partition {
        Partition::from_show_deleted(self.show_deleted)
    }

    pub const fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.buffer.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.buffer.content = content.into();
    }

    /// Notes of the snapshot that belong to the current partition
    pub fn visible_notes(&self) -> Vec<&Note> {
        let partition = self.partition();
        self.notes
            .iter()
            .filter(|note| partition.contains(note))
            .collect()
    }

    /// Find a displayed note by id
    pub fn visible_note(&self, id: NoteId) -> Option<&Note> {
        let partition = self.partition();
        self.notes
            .iter()
            .find(|note| note.id == id && partition.contains(note))
    }

    /// Replace the snapshot with a fresh listing of the current partition.
    ///
    /// Any failure leaves an empty snapshot.
    pub async fn refresh(&mut self) {
        self.notes = fetch_snapshot(&self.store, self.partition()).await;
    }

    /// Switch partitions; refreshes once when the flag actually changes
    pub async fn set_show_deleted(&mut self, show_deleted: bool) {
        if self.show_deleted == show_deleted {
            return;
        }
        self.show_deleted = show_deleted;
        self.refresh().await;
    }

    pub async fn toggle_deleted(&mut self) {
        let next = self.partition().toggled();
        self.set_show_deleted(next.shows_deleted()).await;
    }

    /// Load `note` into the form for editing. No request is made.
    pub fn begin_edit(&mut self, note: &Note) {
        self.buffer.begin_edit(note);
    }

    /// Begin editing a displayed note by id
    pub fn begin_edit_id(&mut self, id: NoteId) -> Result<()> {
        let note = self
            .visible_note(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        self.begin_edit(&note);
        Ok(())
    }

    pub async fn create(&mut self, draft: NoteDraft) -> Result<()> {
        self.mutate(Mutation::Create(draft)).await
    }

    pub async fn update(&mut self, id: NoteId, draft: NoteDraft) -> Result<()> {
        self.mutate(Mutation::Update { id, draft }).await
    }

    pub async fn soft_delete(&mut self, id: NoteId) -> Result<()> {
        self.mutate(Mutation::SoftDelete(id)).await
    }

    pub async fn restore(&mut self, id: NoteId) -> Result<()> {
        self.mutate(Mutation::Restore(id)).await
    }

    /// Submit the form: update in edit mode, create otherwise.
    ///
    /// Rejected without a request while either field is empty.
    pub async fn submit(&mut self) -> Result<()> {
        let mutation = self.buffer.submission().ok_or_else(|| {
            Error::InvalidInput("title and content are both required".to_string())
        })?;
        self.mutate(mutation).await
    }

    /// Send `mutation`, settle the form, then refetch.
    ///
    /// The refresh and form reset happen whether or not the request failed;
    /// the failure is logged and handed back to the caller.
    async fn mutate(&mut self, mutation: Mutation) -> Result<()> {
        let outcome = apply_mutation(&self.store, &mutation).await;
        match (&outcome, mutation.target()) {
            (Ok(()), Some(id)) => tracing::info!("{} note {}", mutation.verb(), id),
            (Ok(()), None) => tracing::info!("{} note", mutation.verb()),
            (Err(error), _) => tracing::error!("Error on note {}: {}", mutation.verb(), error),
        }

        self.buffer.settle(&mutation, outcome.is_ok());
        self.refresh().await;
        outcome.map_err(Error::from)
    }
}
