//! Query handlers for the field scene.

use cutscene_core::content::ContentSource;
use cutscene_core::playback::{TimedEvent, timeline};
use cutscene_core::script::Actor;
use serde::Serialize;

use crate::domain::encounter::{EncounterConfig, EncounterDirector};

/// Read-only view of the encounter schedule.
#[derive(Debug, Serialize)]
pub struct EncounterTimelineView {
    /// Number of wizard lines.
    pub wizard_lines: usize,
    /// Number of monster lines.
    pub monster_lines: usize,
    /// Offset of the battle request.
    pub duration_ms: u64,
    /// Every event with its offset from the start.
    pub events: Vec<TimedEvent>,
}

/// Computes the full encounter schedule without waiting for it.
#[must_use]
pub fn get_encounter_timeline(content: &dyn ContentSource, config: EncounterConfig) -> EncounterTimelineView {
    let wizard = content.dialogue(Actor::Wizard);
    let monster = content.dialogue(Actor::Monster);
    let (wizard_lines, monster_lines) = (wizard.len(), monster.len());

    let mut director = EncounterDirector::new(config);
    let first = director.start(wizard, monster);
    let events = timeline(&mut director, first);
    let duration_ms = events.last().map_or(0, |e| e.at_ms);

    EncounterTimelineView {
        wizard_lines,
        monster_lines,
        duration_ms,
        events,
    }
}

#[cfg(test)]
mod tests {
    use cutscene_core::event::PresentationEvent;
    use cutscene_test_support::ScriptedContent;

    use super::*;

    #[test]
    fn test_get_encounter_timeline_with_default_pacing() {
        // Arrange
        let content = ScriptedContent::new(&[], &["w1", "w2", "w3"], &["m1", "m2"]);

        // Act
        let view = get_encounter_timeline(&content, EncounterConfig::default());

        // Assert
        assert_eq!(view.wizard_lines, 3);
        assert_eq!(view.monster_lines, 2);
        // 1 s + 1 s + 3 x 3.5 s + 0.5 s + 1 s + 2 x 3.5 s + 1.5 s + 1.5 s
        assert_eq!(view.duration_ms, 24_000);
        assert_eq!(view.events.last().map(|e| &e.event), Some(&PresentationEvent::Complete));
    }

    #[test]
    fn test_get_encounter_timeline_counts_line_events() {
        let content = ScriptedContent::new(&[], &["w1"], &["m1"]);

        let view = get_encounter_timeline(&content, EncounterConfig::default());

        let shown = view
            .events
            .iter()
            .filter(|e| matches!(e.event, PresentationEvent::LineShown { .. }))
            .count();
        assert_eq!(shown, 2);
    }
}
