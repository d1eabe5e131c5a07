//! Query handlers for script content.

use cutscene_core::content::ContentSource;
use cutscene_core::script::{Actor, StoryPassage};
use serde::Serialize;

/// Summary of the script being played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSummaryView {
    /// Where the script came from: `builtin` or a file path.
    pub source: String,
    /// SHA-256 of the script source, absent for the built-in script.
    pub version_hash: Option<String>,
    /// Number of intro passages.
    pub passage_count: usize,
    /// Characters typed across the intro.
    pub total_chars: usize,
    /// Number of wizard lines.
    pub wizard_lines: usize,
    /// Number of monster lines.
    pub monster_lines: usize,
}

/// Summarizes `content`.
#[must_use]
pub fn get_content_summary(
    content: &dyn ContentSource,
    source: &str,
    version_hash: Option<&str>,
) -> ContentSummaryView {
    let intro = content.intro_story();
    ContentSummaryView {
        source: source.to_owned(),
        version_hash: version_hash.map(str::to_owned),
        passage_count: intro.len(),
        total_chars: intro.iter().map(StoryPassage::char_count).sum(),
        wizard_lines: content.dialogue(Actor::Wizard).len(),
        monster_lines: content.dialogue(Actor::Monster).len(),
    }
}
