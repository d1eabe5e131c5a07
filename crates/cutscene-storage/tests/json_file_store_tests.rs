//! Integration tests for `JsonFileStore`.

use std::path::PathBuf;

use cutscene_core::error::DomainError;
use cutscene_core::storage::KeyValueStore;
use cutscene_storage::JsonFileStore;
use serde_json::json;
use uuid::Uuid;

/// Fresh path in the system temp dir; the file itself does not exist yet.
fn temp_store_path() -> PathBuf {
    std::env::temp_dir().join(format!("cutscene-store-{}.json", Uuid::new_v4()))
}

// --- load ---

#[tokio::test]
async fn test_load_from_missing_file_is_empty() {
    let store = JsonFileStore::new(temp_store_path());

    let value = store.load("selectedCharacter").await.unwrap();

    assert_eq!(value, None);
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_load_from_corrupt_file_is_storage_error() {
    let path = temp_store_path();
    tokio::fs::write(&path, b"not json").await.unwrap();
    let store = JsonFileStore::new(&path);

    let result = store.load("selectedCharacter").await;

    assert!(matches!(result, Err(DomainError::Storage(_))));
    tokio::fs::remove_file(&path).await.unwrap();
}

// --- save + load ---

#[tokio::test]
async fn test_values_survive_a_new_store_instance() {
    // Arrange
    let path = temp_store_path();
    let store = JsonFileStore::new(&path);
    store.save("a", json!({ "index": 2 })).await.unwrap();
    store.save("b", json!("x")).await.unwrap();

    // Act
    let reopened = JsonFileStore::new(&path);

    // Assert
    assert_eq!(reopened.load("a").await.unwrap(), Some(json!({ "index": 2 })));
    assert_eq!(reopened.load("b").await.unwrap(), Some(json!("x")));
    let mut temp = path.clone().into_os_string();
    temp.push(".tmp");
    assert!(!PathBuf::from(temp).exists());
    tokio::fs::remove_file(&path).await.unwrap();
}

// --- delete ---

#[tokio::test]
async fn test_delete_removes_only_that_key() {
    // Arrange
    let path = temp_store_path();
    let store = JsonFileStore::new(&path);
    store.save("a", json!(1)).await.unwrap();
    store.save("b", json!(2)).await.unwrap();

    // Act
    store.delete("a").await.unwrap();
    store.delete("missing").await.unwrap();

    // Assert
    assert_eq!(store.load("a").await.unwrap(), None);
    assert_eq!(store.load("b").await.unwrap(), Some(json!(2)));
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_save_into_missing_directory_is_storage_error() {
    let path = std::env::temp_dir()
        .join(format!("cutscene-missing-{}", Uuid::new_v4()))
        .join("store.json");
    let store = JsonFileStore::new(path);

    let result = store.save("a", json!(1)).await;

    assert!(matches!(result, Err(DomainError::Storage(_))));
}
