//! Shared application state.

use std::sync::Arc;

use cutscene_character::application::command_handlers::restore_selection;
use cutscene_character::domain::selection::SelectionHolder;
use cutscene_content::application::command_handlers::handle_load_script;
use cutscene_content::domain::builtin::BuiltinContent;
use cutscene_content::domain::commands::LoadScript;
use cutscene_core::clock::{Clock, SystemClock};
use cutscene_core::content::ContentSource;
use cutscene_core::storage::KeyValueStore;
use cutscene_storage::{InMemoryStore, JsonFileStore};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::config::{Config, Pacing};
use crate::error::AppError;

/// The script being played, with where it came from.
#[derive(Clone)]
pub struct LoadedContent {
    /// The script itself.
    pub source: Arc<dyn ContentSource>,
    /// `builtin` or the script path.
    pub origin: String,
    /// SHA-256 of the script file, absent for the built-in script.
    pub version_hash: Option<String>,
}

impl LoadedContent {
    /// The built-in script.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            source: Arc::new(BuiltinContent),
            origin: "builtin".to_owned(),
            version_hash: None,
        }
    }

    /// Loads the script at `config.script_path`, or the built-in one when
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Startup` if the script cannot be read or compiled.
    pub async fn from_config(config: &Config) -> Result<Self, AppError> {
        let Some(path) = &config.script_path else {
            return Ok(Self::builtin());
        };
        let command = LoadScript {
            correlation_id: Uuid::new_v4(),
            path: path.clone(),
        };
        let script = handle_load_script(&command).await?;
        Ok(Self {
            origin: path.display().to_string(),
            version_hash: Some(script.version_hash().to_owned()),
            source: Arc::new(script),
        })
    }
}

impl std::fmt::Debug for LoadedContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedContent")
            .field("origin", &self.origin)
            .field("version_hash", &self.version_hash)
            .finish_non_exhaustive()
    }
}

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock used to stamp saved selections.
    pub clock: Arc<dyn Clock>,
    /// Persistence for the character selection.
    pub store: Arc<dyn KeyValueStore>,
    /// The script being played.
    pub content: LoadedContent,
    /// The character selection; one mutator at a time.
    pub selection: Arc<Mutex<SelectionHolder>>,
    /// Playback pacing.
    pub pacing: Pacing,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        store: Arc<dyn KeyValueStore>,
        content: LoadedContent,
        selection: SelectionHolder,
        pacing: Pacing,
    ) -> Self {
        Self {
            clock,
            store,
            content,
            selection: Arc::new(Mutex::new(selection)),
            pacing,
        }
    }

    /// Builds the state described by `config`: picks the store, loads the
    /// script and restores the saved selection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Startup` if the configured script cannot be loaded.
    pub async fn bootstrap(config: &Config) -> Result<Self, AppError> {
        let store: Arc<dyn KeyValueStore> = match &config.store_path {
            Some(path) => {
                info!(path = %path.display(), "using JSON file store");
                Arc::new(JsonFileStore::new(path.clone()))
            }
            None => {
                info!("using in-memory store");
                Arc::new(InMemoryStore::new())
            }
        };
        let content = LoadedContent::from_config(config).await?;
        info!(origin = %content.origin, "content loaded");
        let selection = restore_selection(store.as_ref()).await;

        Ok(Self::new(
            Arc::new(SystemClock),
            store,
            content,
            selection,
            config.pacing,
        ))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("content", &self.content)
            .field("pacing", &self.pacing)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn config_with(script_path: Option<PathBuf>) -> Config {
        Config {
            host: "127.0.0.1".to_owned(),
            port: 0,
            store_path: None,
            script_path,
            pacing: Pacing::default(),
        }
    }

    #[tokio::test]
    async fn test_bootstrap_defaults_to_builtin_content_and_no_selection() {
        let state = AppState::bootstrap(&config_with(None)).await.unwrap();

        assert_eq!(state.content.origin, "builtin");
        assert_eq!(state.content.version_hash, None);
        assert_eq!(state.selection.lock().await.selected_index(), None);
    }

    #[tokio::test]
    async fn test_bootstrap_fails_on_missing_script() {
        let missing = std::env::temp_dir().join(format!("cutscene-missing-{}.yaml", Uuid::new_v4()));

        let result = AppState::bootstrap(&config_with(Some(missing))).await;

        assert!(matches!(result, Err(AppError::Startup(_))));
    }
}
