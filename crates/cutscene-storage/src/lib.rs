//! Key/value stores implementing `KeyValueStore`.

pub mod json_file_store;
pub mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::InMemoryStore;
