//! Dialogue player: shows one full line at a time for a fixed duration.

use std::time::Duration;

use cutscene_core::event::PresentationEvent;
use cutscene_core::playback::{Sequencer, Step};
use cutscene_core::script::{Actor, DialogueLine};
use tracing::debug;

/// Pacing of a dialogue bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueConfig {
    /// Bubble fade-in.
    pub fade_in: Duration,
    /// Time the line stays fully visible.
    pub visible: Duration,
    /// Bubble fade-out.
    pub fade_out: Duration,
}

impl DialogueConfig {
    fn shown_for(&self) -> Duration {
        self.fade_in + self.visible
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            fade_in: Duration::from_millis(500),
            visible: Duration::from_millis(2500),
            fade_out: Duration::from_millis(500),
        }
    }
}

/// Position of the dialogue run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueCursor {
    /// Line being shown or hidden.
    pub line_index: usize,
    /// Speaker of that line.
    pub speaker: Actor,
}

/// States of the dialogue run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogueState {
    /// Not started, or cancelled.
    #[default]
    Idle,
    /// Line visible.
    Showing(DialogueCursor),
    /// Line fading out.
    Hiding(DialogueCursor),
    /// Every line shown.
    Done,
}

/// Plays an ordered list of lines.
///
/// `LineAdvanced` fires after every line except the last; the last one is
/// followed by `Complete` instead.
#[derive(Debug, Default)]
pub struct DialoguePlayer {
    config: DialogueConfig,
    lines: Vec<DialogueLine>,
    state: DialogueState,
}

impl DialoguePlayer {
    /// Creates an idle player.
    #[must_use]
    pub fn new(config: DialogueConfig) -> Self {
        Self {
            config,
            lines: Vec::new(),
            state: DialogueState::Idle,
        }
    }

    /// Starts playing `lines` from the first one. Empty input completes
    /// immediately without showing anything.
    pub fn play_lines(&mut self, lines: Vec<DialogueLine>) -> Step {
        self.lines = lines;
        match self.lines.first() {
            None => {
                self.state = DialogueState::Done;
                Step::finish(vec![PresentationEvent::Complete])
            }
            Some(_) => self.show(0, Vec::new()),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> DialogueState {
        self.state
    }

    fn show(&mut self, line_index: usize, mut events: Vec<PresentationEvent>) -> Step {
        let Some(line) = self.lines.get(line_index) else {
            self.state = DialogueState::Done;
            return Step::finish(vec![PresentationEvent::Complete]);
        };
        debug!(speaker = %line.speaker, line = line_index, text = %line.text, "showing line");
        events.push(PresentationEvent::LineShown {
            actor: line.speaker,
            value: line.text.clone(),
        });
        self.state = DialogueState::Showing(DialogueCursor {
            line_index,
            speaker: line.speaker,
        });
        Step::emit_then_wait(events, self.config.shown_for())
    }

    fn hide(&mut self, cursor: DialogueCursor) -> Step {
        self.state = DialogueState::Hiding(cursor);
        Step::emit_then_wait(
            vec![PresentationEvent::LineHidden {
                actor: cursor.speaker,
            }],
            self.config.fade_out,
        )
    }

    fn advance(&mut self, cursor: DialogueCursor) -> Step {
        let next = cursor.line_index + 1;
        match self.lines.get(next) {
            Some(line) => {
                let advanced = PresentationEvent::LineAdvanced {
                    actor: line.speaker,
                    index: next,
                };
                self.show(next, vec![advanced])
            }
            None => {
                self.state = DialogueState::Done;
                Step::finish(vec![PresentationEvent::Complete])
            }
        }
    }
}

impl Sequencer for DialoguePlayer {
    fn fire(&mut self) -> Step {
        match self.state {
            DialogueState::Idle | DialogueState::Done => Step::idle(),
            DialogueState::Showing(cursor) => self.hide(cursor),
            DialogueState::Hiding(cursor) => self.advance(cursor),
        }
    }

    fn cancel(&mut self) {
        self.lines.clear();
        self.state = DialogueState::Idle;
    }

    fn is_finished(&self) -> bool {
        self.state == DialogueState::Done
    }
}
