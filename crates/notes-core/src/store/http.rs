//! HTTP/JSON client for the notes REST API.

use reqwest::Client;

use super::{decode_note_list, NoteStore, StoreError, StoreResult};
use crate::models::{Note, NoteDraft, NoteId, Partition};
use crate::util::normalize_base_url;

/// Remote store reached over HTTP.
///
/// Status codes are not inspected: a request counts as done once the
/// transport completes, and only list bodies are parsed.
#[derive(Debug, Clone)]
pub struct HttpNoteStore {
    base_url: String,
    client: Client,
}

impl HttpNoteStore {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> StoreResult<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())
            .map_err(StoreError::InvalidConfiguration)?;
        let client = Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl NoteStore for HttpNoteStore {
    async fn list(&self, partition: Partition) -> StoreResult<Vec<Note>> {
        let url = self.url(partition.list_path());
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        tracing::debug!("List {} responded with HTTP {}", partition, response.status());

        let payload = response.json::<serde_json::Value>().await?;
        decode_note_list(payload)
    }

    async fn create(&self, draft: &NoteDraft) -> StoreResult<()> {
        let url = self.url("/notes");
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(draft).send().await?;
        tracing::debug!("Create responded with HTTP {}", response.status());
        Ok(())
    }

    async fn update(&self, id: NoteId, draft: &NoteDraft) -> StoreResult<()> {
        let url = self.url(&format!("/notes/{id}"));
        tracing::debug!("PUT {}", url);
        let response = self.client.put(url).json(draft).send().await?;
        tracing::debug!("Update {} responded with HTTP {}", id, response.status());
        Ok(())
    }

    async fn soft_delete(&self, id: NoteId) -> StoreResult<()> {
        let url = self.url(&format!("/notes/{id}"));
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        tracing::debug!("Delete {} responded with HTTP {}", id, response.status());
        Ok(())
    }

    async fn restore(&self, id: NoteId) -> StoreResult<()> {
        let url = self.url(&format!("/notes/restore/{id}"));
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).send().await?;
        tracing::debug!("Restore {} responded with HTTP {}", id, response.status());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_base_url() {
        let error = HttpNoteStore::new("localhost:3000").unwrap_err();
        assert!(error.to_string().contains("http:// or https://"));
        assert!(HttpNoteStore::new("  ").is_err());
    }

    #[test]
    fn new_trims_trailing_slash() {
        let store = HttpNoteStore::new("http://localhost:3000/").unwrap();
        assert_eq!(store.base_url(), "http://localhost:3000");
        assert_eq!(store.url("/notes/deleted"), "http://localhost:3000/notes/deleted");
    }
}
