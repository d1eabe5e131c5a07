//! Commands for the field scene.

use cutscene_core::command::Command;
use uuid::Uuid;

/// Command to play the wizard/monster encounter.
#[derive(Debug, Clone)]
pub struct PlayEncounter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for PlayEncounter {
    fn command_type(&self) -> &'static str {
        "field.play_encounter"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
