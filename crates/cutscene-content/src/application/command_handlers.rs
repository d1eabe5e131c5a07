//! Command handlers for script content.

use std::path::Path;

use cutscene_core::command::Command;
use cutscene_core::error::DomainError;
use tracing::{info, instrument};

use crate::domain::commands::LoadScript;
use crate::domain::document::{CompiledScript, compile_script};

/// Reads the script at `path` and compiles it.
///
/// # Errors
///
/// Returns `DomainError::Content` if the file cannot be read or parsed, and
/// `DomainError::Validation` if the script breaks a content rule.
pub async fn load_script(path: &Path) -> Result<CompiledScript, DomainError> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::Content(format!("cannot read {}: {e}", path.display())))?;
    compile_script(&source)
}

/// Handles the `LoadScript` command.
///
/// # Errors
///
/// Returns the same errors as [`load_script`].
#[instrument(skip_all, fields(command = command.command_type(), correlation_id = %command.correlation_id(), path = %command.path.display()))]
pub async fn handle_load_script(command: &LoadScript) -> Result<CompiledScript, DomainError> {
    let script = load_script(&command.path).await?;
    info!(version_hash = script.version_hash(), "script loaded");
    Ok(script)
}
