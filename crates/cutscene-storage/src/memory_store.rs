//! Process-local implementation of the `KeyValueStore` trait.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use cutscene_core::error::DomainError;
use cutscene_core::storage::KeyValueStore;

/// Store that keeps values in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> Result<MutexGuard<'_, HashMap<String, Value>>, DomainError> {
        self.values
            .lock()
            .map_err(|_| DomainError::Storage("in-memory store lock poisoned".into()))
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn save(&self, key: &str, value: Value) -> Result<(), DomainError> {
        self.values()?.insert(key.to_owned(), value);
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<Value>, DomainError> {
        Ok(self.values()?.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.values()?.remove(key);
        Ok(())
    }
}
