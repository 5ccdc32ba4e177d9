//! History Store Port - repository for the console's history list.
//!
//! Replaces the implicit browser-local-storage global with an injected
//! interface: in-memory for tests, a JSON file for persistent sessions.

use async_trait::async_trait;

use crate::domain::HistoryEntry;

/// Errors that can occur during history store operations
#[derive(Debug, thiserror::Error)]
pub enum HistoryStoreError {
    #[error("Failed to serialize history: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize history: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for loading and appending history entries
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Load the full history list, most recent first
    async fn load(&self) -> Result<Vec<HistoryEntry>, HistoryStoreError>;

    /// Prepend a new entry
    ///
    /// Entries are immutable once appended.
    async fn append(&self, entry: HistoryEntry) -> Result<(), HistoryStoreError>;

    /// Remove every entry
    async fn clear(&self) -> Result<(), HistoryStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_failure() {
        let err = HistoryStoreError::IoError("disk full".to_string());
        assert!(err.to_string().contains("disk full"));

        let err = HistoryStoreError::DeserializationFailed("bad json".to_string());
        assert!(err.to_string().contains("deserialize"));
    }
}
