//! Static content source abstraction.

use crate::script::{Actor, DialogueLine, StoryPassage};

/// Read-only provider of the fixed scripts played by the scenes.
pub trait ContentSource: Send + Sync {
    /// Ordered intro story passages.
    fn intro_story(&self) -> Vec<StoryPassage>;

    /// Ordered lines spoken by `actor` during the field scene.
    fn dialogue(&self, actor: Actor) -> Vec<DialogueLine>;
}
