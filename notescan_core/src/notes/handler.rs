use anyhow::Result;
use std::sync::Arc;

use crate::ai::gate::BackendGate;
use crate::summary::dto::{LengthTier, SummaryResult};
use crate::summary::error::SummaryError;

use super::dto::{NewNote, Note};
use super::storage::NoteStorage;

/// Turns recognized text into a stored note.
#[derive(Clone)]
pub struct NoteService {
    gate: Arc<BackendGate>,
    storage: NoteStorage,
}

impl NoteService {
    pub fn new(gate: Arc<BackendGate>, storage: NoteStorage) -> Self {
        Self { gate, storage }
    }

    pub fn storage(&self) -> &NoteStorage {
        &self.storage
    }

    /// Summarize and title `text` without storing anything.
    pub async fn preview(&self, text: &str, tier: LengthTier) -> Result<SummaryResult, SummaryError> {
        self.gate.summarize_document(text, tier).await
    }

    /// Summarize, title and store `text`. Empty input stores nothing.
    pub async fn scan(&self, text: &str, tier: LengthTier) -> Result<Note> {
        let result = self.preview(text, tier).await?;
        log::info!(
            "Summarized {} characters of recognized text at {} length",
            text.len(),
            tier
        );

        self.storage.save(NewNote::from((result, text.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::backend::NoBackend;
    use crate::summary::handler::SummaryEngine;

    fn service() -> NoteService {
        let db = sled::Config::new().temporary(true).open().unwrap();
        let gate = Arc::new(BackendGate::new(SummaryEngine::new(), Arc::new(NoBackend)));
        NoteService::new(gate, NoteStorage::new(&db).unwrap())
    }

    #[tokio::test]
    async fn test_scan_stores_note() {
        let service = service();
        let text = "Key result: revenue doubled. Office moved. Parking is limited.";

        let note = service.scan(text, LengthTier::Short).await.unwrap();

        assert_eq!(note.title, "Key result revenue doubled");
        assert_eq!(note.summary, "Key result: revenue doubled. Office moved.");
        assert_eq!(note.full_text, text);
        assert_eq!(service.storage().list().unwrap(), vec![note]);
    }

    #[tokio::test]
    async fn test_scan_empty_text_stores_nothing() {
        let service = service();

        let err = service.scan("   ", LengthTier::Medium).await.unwrap_err();

        assert_eq!(err.downcast_ref::<SummaryError>(), Some(&SummaryError::EmptyInput));
        assert!(service.storage().list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_preview_does_not_store() {
        let service = service();

        let result = service.preview("Main point here. Detail.", LengthTier::Large).await.unwrap();

        assert_eq!(result.summary, "Main point here. Detail.");
        assert!(service.storage().list().unwrap().is_empty());
    }
}
