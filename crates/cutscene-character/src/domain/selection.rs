//! Selection state holder.

use chrono::{DateTime, Utc};
use cutscene_core::error::DomainError;
use serde::{Deserialize, Serialize};

use super::roster::{self, Character, DEFAULT_BALLOON_TEXT};

/// Store key of the persisted selection.
pub const SELECTION_KEY: &str = "selectedCharacter";

/// Persisted form of a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    /// Roster index.
    pub index: u8,
    /// When the character was picked.
    pub selected_at: DateTime<Utc>,
}

/// Holds the selected character and the balloon text derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionHolder {
    selected: Option<u8>,
    balloon_text: String,
}

impl SelectionHolder {
    /// Creates a holder with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: None,
            balloon_text: DEFAULT_BALLOON_TEXT.to_owned(),
        }
    }

    /// Selects the character at `index` and shows its description.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `index` is outside the roster;
    /// the current selection is left untouched.
    pub fn select(&mut self, index: u8) -> Result<&'static Character, DomainError> {
        let character = roster::character(index).ok_or_else(|| {
            DomainError::Validation(format!(
                "character index {index} is out of range 0..{}",
                roster::ROSTER.len()
            ))
        })?;
        self.selected = Some(index);
        self.balloon_text = character.description.to_owned();
        Ok(character)
    }

    /// Clears the selection and restores the default balloon text.
    pub fn reset(&mut self) {
        self.selected = None;
        self.balloon_text = DEFAULT_BALLOON_TEXT.to_owned();
    }

    /// Roster index of the selection, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<u8> {
        self.selected
    }

    /// The selected character, if any.
    #[must_use]
    pub fn selected_character(&self) -> Option<&'static Character> {
        self.selected.and_then(roster::character)
    }

    /// Current balloon text.
    #[must_use]
    pub fn balloon_text(&self) -> &str {
        &self.balloon_text
    }
}

impl Default for SelectionHolder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_holder_shows_default_text() {
        let holder = SelectionHolder::new();

        assert_eq!(holder.selected_index(), None);
        assert_eq!(holder.balloon_text(), DEFAULT_BALLOON_TEXT);
    }

    #[test]
    fn test_select_derives_balloon_text() {
        // Arrange
        let mut holder = SelectionHolder::new();

        // Act
        let character = holder.select(2).unwrap();

        // Assert
        assert_eq!(character.name, "고딩");
        assert_eq!(holder.selected_index(), Some(2));
        assert_eq!(holder.balloon_text(), "고딩 캐릭터 선택! 실전으로 가보자!");
    }

    #[test]
    fn test_select_then_reset_restores_default() {
        // Arrange
        let mut holder = SelectionHolder::new();
        holder.select(1).unwrap();

        // Act
        holder.reset();

        // Assert
        assert_eq!(holder, SelectionHolder::new());
    }

    #[test]
    fn test_select_out_of_range_is_rejected_and_keeps_selection() {
        // Arrange
        let mut holder = SelectionHolder::new();
        holder.select(0).unwrap();

        // Act
        let result = holder.select(3);

        // Assert
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(holder.selected_index(), Some(0));
        assert_eq!(holder.balloon_text(), "초딩 캐릭터 선택! 기본기를 다져보자!");
    }

    #[test]
    fn test_record_serializes_with_index_and_timestamp() {
        let record = SelectionRecord {
            index: 1,
            selected_at: DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["index"], 1);
        assert_eq!(json["selected_at"], "2026-01-01T00:00:00Z");
    }
}
