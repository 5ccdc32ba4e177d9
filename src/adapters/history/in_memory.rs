//! In-memory history store for tests and ephemeral sessions.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::HistoryEntry;
use crate::ports::{HistoryStore, HistoryStoreError};

/// History kept in process memory, most recent first.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn load(&self) -> Result<Vec<HistoryEntry>, HistoryStoreError> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn append(&self, entry: HistoryEntry) -> Result<(), HistoryStoreError> {
        self.entries.lock().unwrap().insert(0, entry);
        Ok(())
    }

    async fn clear(&self) -> Result<(), HistoryStoreError> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}
