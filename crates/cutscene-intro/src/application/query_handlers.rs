//! Query handlers for the intro scene.

use cutscene_core::content::ContentSource;
use cutscene_core::playback::{TimedEvent, timeline};
use serde::Serialize;

use crate::domain::director::{IntroConfig, IntroDirector};

/// Read-only view of the intro schedule.
#[derive(Debug, Serialize)]
pub struct IntroTimelineView {
    /// Number of story passages.
    pub passage_count: usize,
    /// Characters revealed across all passages.
    pub total_chars: usize,
    /// Offset of the final event.
    pub duration_ms: u64,
    /// Every event with its offset from the start.
    pub events: Vec<TimedEvent>,
}

/// Computes the full intro schedule without waiting for it.
#[must_use]
pub fn get_intro_timeline(content: &dyn ContentSource, config: IntroConfig) -> IntroTimelineView {
    let passages = content.intro_story();
    let passage_count = passages.len();
    let total_chars = passages.iter().map(|p| p.char_count()).sum();

    let mut director = IntroDirector::new(config);
    let first = director.start(passages);
    let events = timeline(&mut director, first);
    let duration_ms = events.last().map_or(0, |e| e.at_ms);

    IntroTimelineView {
        passage_count,
        total_chars,
        duration_ms,
        events,
    }
}
