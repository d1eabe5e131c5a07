//! Key/value persistence abstraction.

use async_trait::async_trait;

use crate::error::DomainError;

/// Simple key/value persistence with JSON values and no schema versioning.
///
/// Implementations report failures as `DomainError::Storage`; callers
/// decide whether a failure is fatal.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value.
    async fn save(&self, key: &str, value: serde_json::Value) -> Result<(), DomainError>;

    /// Returns the value stored under `key`, or `None` if absent.
    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError>;

    /// Removes `key`. Removing an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), DomainError>;
}
