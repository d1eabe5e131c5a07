//! Scripted content source for tests.

use std::time::Duration;

use cutscene_core::content::ContentSource;
use cutscene_core::script::{Actor, DialogueLine, StoryPassage};

/// A content source returning whatever the test configured.
#[derive(Debug, Clone, Default)]
pub struct ScriptedContent {
    /// Intro passages.
    pub passages: Vec<StoryPassage>,
    /// Wizard lines.
    pub wizard: Vec<String>,
    /// Monster lines.
    pub monster: Vec<String>,
}

impl ScriptedContent {
    /// Creates a source with one passage per `(text, delay_ms)` pair and the
    /// given actor lines.
    #[must_use]
    pub fn new(passages: &[(&str, u64)], wizard: &[&str], monster: &[&str]) -> Self {
        Self {
            passages: passages
                .iter()
                .map(|(text, ms)| StoryPassage::new(*text, Duration::from_millis(*ms)))
                .collect(),
            wizard: wizard.iter().map(|s| (*s).to_owned()).collect(),
            monster: monster.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl ContentSource for ScriptedContent {
    fn intro_story(&self) -> Vec<StoryPassage> {
        self.passages.clone()
    }

    fn dialogue(&self, actor: Actor) -> Vec<DialogueLine> {
        let lines = match actor {
            Actor::Wizard => &self.wizard,
            Actor::Monster => &self.monster,
        };
        DialogueLine::for_actor(actor, lines.iter().cloned())
    }
}
