//! Commands for the intro scene.

use cutscene_core::command::Command;
use uuid::Uuid;

/// Command to play the intro story.
#[derive(Debug, Clone)]
pub struct PlayIntro {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Play only the typed story, without the reveal chain afterwards.
    pub story_only: bool,
}

impl Command for PlayIntro {
    fn command_type(&self) -> &'static str {
        "intro.play"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
