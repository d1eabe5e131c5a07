//! Query handlers for character selection.

use serde::Serialize;

use crate::domain::roster::{Character, ROSTER};
use crate::domain::selection::SelectionHolder;

/// Read-only view of the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    /// Roster index of the selection, if any.
    pub selected_index: Option<u8>,
    /// The selected character, if any.
    pub character: Option<Character>,
    /// Balloon text to display.
    pub balloon_text: String,
}

/// Read-only view of the roster together with the selection.
#[derive(Debug, Clone, Serialize)]
pub struct RosterView {
    /// Every character, ordered by index.
    pub characters: Vec<Character>,
    /// The current selection.
    pub selection: SelectionView,
}

/// Returns the current selection.
#[must_use]
pub fn get_selection(holder: &SelectionHolder) -> SelectionView {
    SelectionView {
        selected_index: holder.selected_index(),
        character: holder.selected_character().copied(),
        balloon_text: holder.balloon_text().to_owned(),
    }
}

/// Returns the roster and the current selection.
#[must_use]
pub fn list_characters(holder: &SelectionHolder) -> RosterView {
    RosterView {
        characters: ROSTER.to_vec(),
        selection: get_selection(holder),
    }
}
