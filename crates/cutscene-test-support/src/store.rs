//! `KeyValueStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cutscene_core::error::DomainError;
use cutscene_core::storage::KeyValueStore;

/// An in-memory store that records every `save` and `delete` call.
#[derive(Debug, Default)]
pub struct RecordingStore {
    values: Mutex<HashMap<String, serde_json::Value>>,
    saved: Mutex<Vec<(String, serde_json::Value)>>,
    deleted: Mutex<Vec<String>>,
}

impl RecordingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `key` → `value`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_value(key: &str, value: serde_json::Value) -> Self {
        let store = Self::default();
        store.values.lock().unwrap().insert(key.to_owned(), value);
        store
    }

    /// Returns a snapshot of all `save` calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved(&self) -> Vec<(String, serde_json::Value)> {
        self.saved.lock().unwrap().clone()
    }

    /// Returns a snapshot of all deleted keys.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl KeyValueStore for RecordingStore {
    async fn save(&self, key: &str, value: serde_json::Value) -> Result<(), DomainError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.clone());
        self.saved.lock().unwrap().push((key.to_owned(), value));
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.values.lock().unwrap().remove(key);
        self.deleted.lock().unwrap().push(key.to_owned());
        Ok(())
    }
}

/// A store that always returns a storage error. Useful for testing that
/// persistence failures are swallowed.
#[derive(Debug)]
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn save(&self, _key: &str, _value: serde_json::Value) -> Result<(), DomainError> {
        Err(DomainError::Storage("disk full".into()))
    }

    async fn load(&self, _key: &str) -> Result<Option<serde_json::Value>, DomainError> {
        Err(DomainError::Storage("permission denied".into()))
    }

    async fn delete(&self, _key: &str) -> Result<(), DomainError> {
        Err(DomainError::Storage("permission denied".into()))
    }
}
