//! Typing sequencer: reveals story passages one character per tick.

use std::time::Duration;

use cutscene_core::event::PresentationEvent;
use cutscene_core::playback::{Sequencer, Step};
use cutscene_core::script::StoryPassage;
use tracing::debug;

/// Default interval between two revealed characters.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Pacing of the typing effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingConfig {
    /// Interval between two ticks.
    pub tick_interval: Duration,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

/// Position of the typing run.
///
/// `passage_index == passages.len()` only in the `Complete` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackCursor {
    /// Passage being revealed.
    pub passage_index: usize,
    /// Characters of that passage revealed so far.
    pub char_index: usize,
}

/// States of the typing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingState {
    /// Not started, or cancelled.
    Idle,
    /// Revealing a character on each tick.
    Typing(PlaybackCursor),
    /// Whole passage shown; waiting its reveal delay.
    Pausing(PlaybackCursor),
    /// Every passage shown and paused on.
    Complete,
}

/// Reveals a list of passages character by character.
#[derive(Debug)]
pub struct TypingSequencer {
    config: TypingConfig,
    passages: Vec<StoryPassage>,
    state: TypingState,
    revealed: String,
}

impl TypingSequencer {
    /// Creates an idle sequencer.
    #[must_use]
    pub fn new(config: TypingConfig) -> Self {
        Self {
            config,
            passages: Vec::new(),
            state: TypingState::Idle,
            revealed: String::new(),
        }
    }

    /// Resets the cursor and starts a run over `passages`.
    ///
    /// An empty list completes immediately. Otherwise the first character
    /// is revealed one tick later.
    pub fn start(&mut self, passages: Vec<StoryPassage>) -> Step {
        self.passages = passages;
        self.revealed.clear();
        if self.passages.is_empty() {
            debug!("no passages to type");
            self.state = TypingState::Complete;
            return Step::finish(vec![PresentationEvent::Complete]);
        }
        self.state = TypingState::Typing(PlaybackCursor::default());
        Step::wait(self.config.tick_interval)
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> TypingState {
        self.state
    }

    /// Returns the cursor, or `None` while idle.
    #[must_use]
    pub fn cursor(&self) -> Option<PlaybackCursor> {
        match self.state {
            TypingState::Idle => None,
            TypingState::Typing(cursor) | TypingState::Pausing(cursor) => Some(cursor),
            TypingState::Complete => Some(PlaybackCursor {
                passage_index: self.passages.len(),
                char_index: 0,
            }),
        }
    }

    /// Text revealed so far of the current passage.
    #[must_use]
    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    fn tick(&mut self, mut cursor: PlaybackCursor) -> Step {
        let Some(passage) = self.passages.get(cursor.passage_index) else {
            return self.complete();
        };
        // `revealed` is always a prefix of the passage text.
        match passage.text[self.revealed.len()..].chars().next() {
            Some(ch) => {
                self.revealed.push(ch);
                cursor.char_index += 1;
                self.state = TypingState::Typing(cursor);
                Step::emit_then_wait(
                    vec![PresentationEvent::TextUpdated {
                        value: self.revealed.clone(),
                    }],
                    self.config.tick_interval,
                )
            }
            None => {
                debug!(passage = cursor.passage_index, "passage revealed, pausing");
                self.state = TypingState::Pausing(cursor);
                Step::wait(passage.reveal_delay)
            }
        }
    }

    fn advance(&mut self, cursor: PlaybackCursor) -> Step {
        let next = cursor.passage_index + 1;
        if next >= self.passages.len() {
            return self.complete();
        }
        self.revealed.clear();
        self.state = TypingState::Typing(PlaybackCursor {
            passage_index: next,
            char_index: 0,
        });
        Step::wait(self.config.tick_interval)
    }

    fn complete(&mut self) -> Step {
        debug!(passages = self.passages.len(), "all passages typed");
        self.state = TypingState::Complete;
        Step::finish(vec![PresentationEvent::Complete])
    }
}

impl Default for TypingSequencer {
    fn default() -> Self {
        Self::new(TypingConfig::default())
    }
}

impl Sequencer for TypingSequencer {
    fn fire(&mut self) -> Step {
        match self.state {
            TypingState::Idle | TypingState::Complete => Step::idle(),
            TypingState::Typing(cursor) => self.tick(cursor),
            TypingState::Pausing(cursor) => self.advance(cursor),
        }
    }

    fn cancel(&mut self) {
        self.state = TypingState::Idle;
        self.passages.clear();
        self.revealed.clear();
    }

    fn is_finished(&self) -> bool {
        self.state == TypingState::Complete
    }
}
