//! Commands for character selection.

use cutscene_core::command::Command;
use uuid::Uuid;

/// Command to select a character from the roster.
#[derive(Debug, Clone)]
pub struct SelectCharacter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Roster index of the character.
    pub index: u8,
}

impl Command for SelectCharacter {
    fn command_type(&self) -> &'static str {
        "character.select"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to clear the current selection, keeping the saved record.
#[derive(Debug, Clone)]
pub struct ResetSelection {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ResetSelection {
    fn command_type(&self) -> &'static str {
        "character.reset"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to clear the current selection and delete the saved record.
#[derive(Debug, Clone)]
pub struct ForgetSelection {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ForgetSelection {
    fn command_type(&self) -> &'static str {
        "character.forget"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
