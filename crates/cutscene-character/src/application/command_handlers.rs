//! Command handlers for character selection.
//!
//! Persistence is best effort: a failed save or delete is logged and the
//! in-memory selection still changes.

use cutscene_core::clock::Clock;
use cutscene_core::command::Command;
use cutscene_core::error::DomainError;
use cutscene_core::storage::KeyValueStore;
use tracing::{info, instrument, warn};

use crate::domain::commands::{ForgetSelection, ResetSelection, SelectCharacter};
use crate::domain::selection::{SELECTION_KEY, SelectionHolder, SelectionRecord};

/// Handles the `SelectCharacter` command: updates `holder` and saves the
/// choice to `store`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the index is outside the roster.
/// Storage failures are not returned.
#[instrument(skip_all, fields(command = command.command_type(), correlation_id = %command.correlation_id(), index = command.index))]
pub async fn handle_select_character(
    command: &SelectCharacter,
    holder: &mut SelectionHolder,
    clock: &dyn Clock,
    store: &dyn KeyValueStore,
) -> Result<SelectionRecord, DomainError> {
    let character = holder.select(command.index)?;
    info!(name = character.name, "character selected");

    let record = SelectionRecord {
        index: command.index,
        selected_at: clock.now(),
    };
    match serde_json::to_value(&record) {
        Ok(value) => {
            if let Err(e) = store.save(SELECTION_KEY, value).await {
                warn!(error = %e, "failed to persist selection");
            }
        }
        Err(e) => warn!(error = %e, "failed to encode selection"),
    }
    Ok(record)
}

/// Handles the `ResetSelection` command. The saved record is kept, so the
/// same character comes back on the next restore.
pub fn handle_reset_selection(command: &ResetSelection, holder: &mut SelectionHolder) {
    holder.reset();
    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        "selection reset"
    );
}

/// Handles the `ForgetSelection` command: resets `holder` and deletes the
/// saved record.
#[instrument(skip_all, fields(command = command.command_type(), correlation_id = %command.correlation_id()))]
pub async fn handle_forget_selection(
    command: &ForgetSelection,
    holder: &mut SelectionHolder,
    store: &dyn KeyValueStore,
) {
    holder.reset();
    if let Err(e) = store.delete(SELECTION_KEY).await {
        warn!(error = %e, "failed to delete persisted selection");
    }
    info!("selection forgotten");
}

/// Builds a holder from the saved record, if there is a usable one.
///
/// A failed load, an undecodable record or an index no longer in the
/// roster all mean "no prior selection".
pub async fn restore_selection(store: &dyn KeyValueStore) -> SelectionHolder {
    let mut holder = SelectionHolder::new();
    let value = match store.load(SELECTION_KEY).await {
        Ok(Some(value)) => value,
        Ok(None) => return holder,
        Err(e) => {
            warn!(error = %e, "failed to load persisted selection");
            return holder;
        }
    };
    let record: SelectionRecord = match serde_json::from_value(value) {
        Ok(record) => record,
        Err(e) => {
            warn!(error = %e, "ignoring undecodable persisted selection");
            return holder;
        }
    };
    match holder.select(record.index) {
        Ok(character) => info!(name = character.name, "selection restored"),
        Err(e) => warn!(error = %e, "ignoring persisted selection"),
    }
    holder
}
