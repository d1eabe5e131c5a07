//! Script data model shared by the intro and field scenes.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One of the two scripted participants of the field scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Actor {
    /// The player's guide, always enters first.
    Wizard,
    /// The "broken stream" monster, answers the wizard.
    Monster,
}

impl Actor {
    /// Returns the actor that speaks after this one.
    #[must_use]
    pub fn counterpart(self) -> Self {
        match self {
            Self::Wizard => Self::Monster,
            Self::Monster => Self::Wizard,
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wizard => "wizard",
            Self::Monster => "monster",
        })
    }
}

/// One unit of intro story text with its own post-reveal pause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryPassage {
    /// Text revealed one character per tick.
    pub text: String,
    /// Pause after the last character before the next passage starts.
    pub reveal_delay: Duration,
}

impl StoryPassage {
    /// Creates a passage.
    #[must_use]
    pub fn new(text: impl Into<String>, reveal_delay: Duration) -> Self {
        Self {
            text: text.into(),
            reveal_delay,
        }
    }

    /// Number of ticks needed to reveal the whole passage.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// A single full line spoken by an actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueLine {
    /// Who says the line.
    pub speaker: Actor,
    /// The line itself.
    pub text: String,
}

impl DialogueLine {
    /// Creates a line for `speaker`.
    #[must_use]
    pub fn new(speaker: Actor, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    /// Builds the ordered lines of one actor from plain strings.
    #[must_use]
    pub fn for_actor<I, S>(speaker: Actor, lines: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines
            .into_iter()
            .map(|text| Self::new(speaker, text))
            .collect()
    }
}
