//! Intro director: the typed story followed by the reveal chain.

use std::time::Duration;

use cutscene_core::event::{IntroElement, PresentationEvent};
use cutscene_core::playback::{Sequencer, Step};
use cutscene_core::script::StoryPassage;
use tracing::debug;

use super::sequencer::{TypingConfig, TypingSequencer};

/// Pacing of the whole intro scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroConfig {
    /// Typing effect pacing.
    pub typing: TypingConfig,
    /// Time the character takes to grow into view.
    pub character_reveal: Duration,
    /// Time the background takes to fade in.
    pub background_reveal: Duration,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            typing: TypingConfig::default(),
            character_reveal: Duration::from_secs(2),
            background_reveal: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntroPhase {
    Idle,
    Story,
    RevealingCharacter,
    RevealingBackground,
    Done,
}

/// Plays the intro story, then reveals the character, the background and
/// the start button, each after the previous animation has had its time.
#[derive(Debug)]
pub struct IntroDirector {
    config: IntroConfig,
    typing: TypingSequencer,
    phase: IntroPhase,
}

impl IntroDirector {
    /// Creates an idle director.
    #[must_use]
    pub fn new(config: IntroConfig) -> Self {
        Self {
            config,
            typing: TypingSequencer::new(config.typing),
            phase: IntroPhase::Idle,
        }
    }

    /// Starts the scene over `passages`.
    pub fn start(&mut self, passages: Vec<StoryPassage>) -> Step {
        self.phase = IntroPhase::Story;
        let step = self.typing.start(passages);
        self.after_story_step(step)
    }

    /// The typing sequencer's `Complete` ends only the story; the scene
    /// continues with the reveal chain.
    fn after_story_step(&mut self, mut step: Step) -> Step {
        let Some(pos) = step.events.iter().position(PresentationEvent::is_complete) else {
            return step;
        };
        debug!("story finished, revealing character");
        step.events.truncate(pos);
        step.events.push(PresentationEvent::StoryFinished);
        step.events.push(PresentationEvent::Revealed {
            element: IntroElement::Character,
        });
        self.phase = IntroPhase::RevealingCharacter;
        Step::emit_then_wait(step.events, self.config.character_reveal)
    }
}

impl Default for IntroDirector {
    fn default() -> Self {
        Self::new(IntroConfig::default())
    }
}

impl Sequencer for IntroDirector {
    fn fire(&mut self) -> Step {
        match self.phase {
            IntroPhase::Idle | IntroPhase::Done => Step::idle(),
            IntroPhase::Story => {
                let step = self.typing.fire();
                self.after_story_step(step)
            }
            IntroPhase::RevealingCharacter => {
                self.phase = IntroPhase::RevealingBackground;
                Step::emit_then_wait(
                    vec![PresentationEvent::Revealed {
                        element: IntroElement::Background,
                    }],
                    self.config.background_reveal,
                )
            }
            IntroPhase::RevealingBackground => {
                self.phase = IntroPhase::Done;
                Step::finish(vec![
                    PresentationEvent::Revealed {
                        element: IntroElement::StartButton,
                    },
                    PresentationEvent::Complete,
                ])
            }
        }
    }

    fn cancel(&mut self) {
        self.typing.cancel();
        self.phase = IntroPhase::Idle;
    }

    fn is_finished(&self) -> bool {
        self.phase == IntroPhase::Done
    }
}
