//! File-backed implementation of the `KeyValueStore` trait.
//!
//! All keys live in one JSON object. Every write replaces the file through a
//! sibling temp file and a rename, so a crash mid-write leaves the previous
//! contents in place.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use cutscene_core::error::DomainError;
use cutscene_core::storage::KeyValueStore;

type Document = BTreeMap<String, Value>;

/// Store persisting values to a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles.
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store over `path`. The file is created on the first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Document, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => return Err(storage_error(&self.path, "read", &e)),
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::Storage(format!("{} is not a JSON object: {e}", self.path.display())))
    }

    async fn write(&self, document: &Document) -> Result<(), DomainError> {
        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|e| DomainError::Storage(format!("cannot encode store: {e}")))?;
        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);
        tokio::fs::write(&temp, bytes)
            .await
            .map_err(|e| storage_error(&temp, "write", &e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| storage_error(&self.path, "replace", &e))?;
        debug!(path = %self.path.display(), keys = document.len(), "store written");
        Ok(())
    }
}

fn storage_error(path: &Path, action: &str, e: &std::io::Error) -> DomainError {
    DomainError::Storage(format!("cannot {action} {}: {e}", path.display()))
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn save(&self, key: &str, value: Value) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read().await?;
        document.insert(key.to_owned(), value);
        self.write(&document).await
    }

    async fn load(&self, key: &str) -> Result<Option<Value>, DomainError> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.remove(key))
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read().await?;
        if document.remove(key).is_some() {
            self.write(&document).await?;
        }
        Ok(())
    }
}
