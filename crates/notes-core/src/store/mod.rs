//! Remote note store.
//!
//! The store owns note records; this client only lists partitions and sends
//! mutations. Response bodies of mutations are never read.

mod http;

use std::future::Future;

use thiserror::Error;

use crate::models::{Note, NoteDraft, NoteId, Partition};

pub use http::HttpNoteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid store configuration: {0}")]
    InvalidConfiguration(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Operations offered by the remote note store.
pub trait NoteStore: Send + Sync {
    /// Fetch every note in `partition`, in store order
    fn list(&self, partition: Partition) -> impl Future<Output = StoreResult<Vec<Note>>> + Send;

    fn create(&self, draft: &NoteDraft) -> impl Future<Output = StoreResult<()>> + Send;

    fn update(&self, id: NoteId, draft: &NoteDraft)
        -> impl Future<Output = StoreResult<()>> + Send;

    /// Flag a note as deleted; the record stays in the store
    fn soft_delete(&self, id: NoteId) -> impl Future<Output = StoreResult<()>> + Send;

    fn restore(&self, id: NoteId) -> impl Future<Output = StoreResult<()>> + Send;
}

/// A state-changing request against the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create(NoteDraft),
    Update { id: NoteId, draft: NoteDraft },
    SoftDelete(NoteId),
    Restore(NoteId),
}

impl Mutation {
    /// Short verb used in log lines
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update { .. } => "update",
            Self::SoftDelete(_) => "delete",
            Self::Restore(_) => "restore",
        }
    }

    /// Target note, if the mutation addresses an existing one
    #[must_use]
    pub const fn target(&self) -> Option<NoteId> {
        match self {
            Self::Create(_) => None,
            Self::Update { id, .. } | Self::SoftDelete(id) | Self::Restore(id) => Some(*id),
        }
    }
}

/// Send `mutation` to `store`.
pub async fn apply_mutation<S: NoteStore>(store: &S, mutation: &Mutation) -> StoreResult<()> {
    match mutation {
        Mutation::Create(draft) => store.create(draft).await,
        Mutation::Update { id, draft } => store.update(*id, draft).await,
        Mutation::SoftDelete(id) => store.soft_delete(*id).await,
        Mutation::Restore(id) => store.restore(*id).await,
    }
}

/// Fetch a partition, falling back to an empty list on any failure.
///
/// Failures only reach the log.
pub async fn fetch_snapshot<S: NoteStore>(store: &S, partition: Partition) -> Vec<Note> {
    match store.list(partition).await {
        Ok(notes) => {
            tracing::debug!("Fetched {} {} notes", notes.len(), partition);
            notes
        }
        Err(error) => {
            tracing::warn!("Error fetching {} notes: {}", partition, error);
            Vec::new()
        }
    }
}

/// Decode a list response body.
///
/// Anything other than a JSON array is rejected. Entries that do not decode
/// as a note are logged and skipped; the rest keep their store order.
pub fn decode_note_list(payload: serde_json::Value) -> StoreResult<Vec<Note>> {
    let entries = match payload {
        serde_json::Value::Array(entries) => entries,
        other => {
            return Err(StoreError::UnexpectedPayload(format!(
                "expected a JSON array of notes, got {}",
                json_kind(&other)
            )))
        }
    };

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Note>(entry) {
            Ok(note) => Some(note),
            Err(error) => {
                tracing::warn!("Skipping note entry {}: {}", index, error);
                None
            }
        })
        .collect())
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-process store that records calls and replays scripted results.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::{NoteStore, StoreError, StoreResult};
    use crate::models::{Note, NoteDraft, NoteId, Partition};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        List(Partition),
        Create(NoteDraft),
        Update(NoteId, NoteDraft),
        SoftDelete(NoteId),
        Restore(NoteId),
    }

    #[derive(Default)]
    pub struct RecordingStore {
        calls: Mutex<Vec<Call>>,
        listings: Mutex<VecDeque<StoreResult<Vec<Note>>>>,
        fail_mutations: Mutex<bool>,
    }

    impl RecordingStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue the result of the next `list` call; unqueued calls return an empty list
        pub fn push_listing(&self, notes: Vec<Note>) {
            self.listings.lock().unwrap().push_back(Ok(notes));
        }

        pub fn push_listing_error(&self, message: &str) {
            self.listings
                .lock()
                .unwrap()
                .push_back(Err(StoreError::UnexpectedPayload(message.to_string())));
        }

        pub fn fail_mutations(&self, fail: bool) {
            *self.fail_mutations.lock().unwrap() = fail;
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        pub fn list_calls(&self) -> Vec<Partition> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    Call::List(partition) => Some(partition),
                    _ => None,
                })
                .collect()
        }

        pub fn clear_calls(&self) {
            self.calls.lock().unwrap().clear();
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn mutation_result(&self) -> StoreResult<()> {
            if *self.fail_mutations.lock().unwrap() {
                Err(StoreError::UnexpectedPayload("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl NoteStore for RecordingStore {
        async fn list(&self, partition: Partition) -> StoreResult<Vec<Note>> {
            self.record(Call::List(partition));
            self.listings
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn create(&self, draft: &NoteDraft) -> StoreResult<()> {
            self.record(Call::Create(draft.clone()));
            self.mutation_result()
        }

        async fn update(&self, id: NoteId, draft: &NoteDraft) -> StoreResult<()> {
            self.record(Call::Update(id, draft.clone()));
            self.mutation_result()
        }

        async fn soft_delete(&self, id: NoteId) -> StoreResult<()> {
            self.record(Call::SoftDelete(id));
            self.mutation_result()
        }

        async fn restore(&self, id: NoteId) -> StoreResult<()> {
            self.record(Call::Restore(id));
            self.mutation_result()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{Call, RecordingStore};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_note_list_accepts_array() {
        let notes = decode_note_list(serde_json::json!([
            {"id": 1, "title": "A", "content": "B"},
            {"id": 2, "title": "C", "content": "D", "isDeleted": true}
        ]))
        .unwrap();
        assert_eq!(notes, vec![Note::new(1, "A", "B"), Note::new(2, "C", "D").deleted()]);
    }

    #[test]
    fn decode_note_list_rejects_non_array() {
        let error = decode_note_list(serde_json::json!({})).unwrap_err();
        assert!(error.to_string().contains("an object"));
        assert!(decode_note_list(serde_json::Value::Null).is_err());
    }

    #[test]
    fn decode_note_list_skips_malformed_entries() {
        let notes = decode_note_list(serde_json::json!([
            {"id": 1, "title": "A", "content": "B"},
            {"id": 2, "title": "C", "content": null},
            {"id": "x"},
            {"id": 3, "title": "D", "content": "E", "isDeleted": false}
        ]))
        .unwrap();
        assert_eq!(
            notes,
            vec![
                Note::new(1, "A", "B"),
                Note {
                    is_deleted: Some(false),
                    ..Note::new(3, "D", "E")
                }
            ]
        );
    }

    #[test]
    fn mutation_target_and_verb() {
        let draft = NoteDraft::new("A", "B");
        assert_eq!(Mutation::Create(draft.clone()).target(), None);
        assert_eq!(
            Mutation::Update {
                id: NoteId::new(3),
                draft
            }
            .target(),
            Some(NoteId::new(3))
        );
        assert_eq!(Mutation::Restore(NoteId::new(4)).verb(), "restore");
    }

    #[tokio::test]
    async fn apply_mutation_dispatches_to_store() {
        let store = RecordingStore::new();
        apply_mutation(&store, &Mutation::SoftDelete(NoteId::new(5)))
            .await
            .unwrap();
        apply_mutation(&store, &Mutation::Restore(NoteId::new(5)))
            .await
            .unwrap();
        assert_eq!(
            store.calls(),
            vec![
                Call::SoftDelete(NoteId::new(5)),
                Call::Restore(NoteId::new(5))
            ]
        );
    }

    #[tokio::test]
    async fn fetch_snapshot_is_empty_on_failure() {
        let store = RecordingStore::new();
        store.push_listing_error("boom");
        let notes = fetch_snapshot(&store, Partition::Deleted).await;
        assert!(notes.is_empty());
        assert_eq!(store.list_calls(), vec![Partition::Deleted]);
    }
}
