//! File-based history store.
//!
//! Persists the whole list as one JSON document, the analog of the single
//! local-storage key the browser client used. A missing file loads as an
//! empty history.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::HistoryEntry;
use crate::ports::{HistoryStore, HistoryStoreError};

/// History persisted to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    /// Create a store backed by the given file path
    ///
    /// # Example
    /// ```ignore
    /// let store = JsonFileHistoryStore::new("./data/history.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn write_all(&self, entries: &[HistoryEntry]) -> Result<(), HistoryStoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| HistoryStoreError::IoError(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| HistoryStoreError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| HistoryStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl HistoryStore for JsonFileHistoryStore {
    async fn load(&self) -> Result<Vec<HistoryEntry>, HistoryStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| HistoryStoreError::IoError(e.to_string()))?;

        serde_json::from_str(&json)
            .map_err(|e| HistoryStoreError::DeserializationFailed(e.to_string()))
    }

    async fn append(&self, entry: HistoryEntry) -> Result<(), HistoryStoreError> {
        let mut entries = self.load().await?;
        entries.insert(0, entry);
        self.write_all(&entries).await
    }

    async fn clear(&self) -> Result<(), HistoryStoreError> {
        self.write_all(&[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToolKind;
    use tempfile::TempDir;

    fn entry(query: &str) -> HistoryEntry {
        HistoryEntry::record(ToolKind::Translate, query, "Hola")
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileHistoryStore::new(dir.path().join("history.json"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        let store = JsonFileHistoryStore::new(&path);

        store.append(entry("Hello...")).await.unwrap();
        store.append(entry("World...")).await.unwrap();

        // A fresh store over the same file simulates a reload.
        let reloaded = JsonFileHistoryStore::new(&path);
        let entries = reloaded.load().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].query, "World...");
        assert_eq!(entries[1].query, "Hello...");
    }

    #[tokio::test]
    async fn clear_leaves_empty_list() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileHistoryStore::new(dir.path().join("history.json"));

        store.append(entry("one")).await.unwrap();
        store.clear().await.unwrap();

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileHistoryStore::new(dir.path().join("nested/deeper/history.json"));

        store.append(entry("one")).await.unwrap();

        assert_eq!(store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn corrupt_file_reports_deserialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let store = JsonFileHistoryStore::new(&path);
        let result = store.load().await;

        assert!(matches!(
            result,
            Err(HistoryStoreError::DeserializationFailed(_))
        ));
    }
}
