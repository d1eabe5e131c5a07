//! Presentation events and the sink that receives them.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::script::Actor;

/// Intro screen elements revealed after the story finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntroElement {
    /// The selected character grows into view.
    Character,
    /// The background fades in.
    Background,
    /// The start button becomes tappable.
    StartButton,
}

/// Discrete notification sent from a sequencer to the presentation layer.
///
/// Serialized as `{"event": "<name>", ...fields}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum PresentationEvent {
    /// The partially revealed passage grew by one character.
    TextUpdated {
        /// Everything revealed so far of the current passage.
        value: String,
    },
    /// Every intro passage has been revealed and paused on.
    StoryFinished,
    /// An intro element should animate into view.
    Revealed {
        /// The element to reveal.
        element: IntroElement,
    },
    /// An actor enters the field.
    ActorAppeared {
        /// The entering actor.
        actor: Actor,
    },
    /// A dialogue line becomes visible.
    LineShown {
        /// Who speaks.
        actor: Actor,
        /// The full line.
        value: String,
    },
    /// The visible dialogue line is hidden.
    LineHidden {
        /// Who spoke.
        actor: Actor,
    },
    /// Playback moved on to the next line of the same actor.
    LineAdvanced {
        /// Who speaks.
        actor: Actor,
        /// Index of the line about to be shown.
        index: usize,
    },
    /// An actor has said all of its lines; the other actor takes over.
    ActorFinished {
        /// The actor that finished.
        actor: Actor,
    },
    /// Both actors move to the center of the field.
    ActorsConverged,
    /// The "VS" banner is shown.
    VersusShown,
    /// The scene asks the owner to switch to the battle screen.
    BattleRequested,
    /// Terminal event of a run. Emitted exactly once.
    Complete,
}

impl PresentationEvent {
    /// Returns the wire name of the event.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::TextUpdated { .. } => "textUpdated",
            Self::StoryFinished => "storyFinished",
            Self::Revealed { .. } => "revealed",
            Self::ActorAppeared { .. } => "actorAppeared",
            Self::LineShown { .. } => "lineShown",
            Self::LineHidden { .. } => "lineHidden",
            Self::LineAdvanced { .. } => "lineAdvanced",
            Self::ActorFinished { .. } => "actorFinished",
            Self::ActorsConverged => "actorsConverged",
            Self::VersusShown => "versusShown",
            Self::BattleRequested => "battleRequested",
            Self::Complete => "complete",
        }
    }

    /// Returns `true` for the terminal `Complete` event.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Receiver of presentation events. Responsible for all rendering.
pub trait PresentationSink: Send {
    /// Delivers one event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PresentationClosed` when the receiving side is
    /// gone; the caller stops the run.
    fn deliver(&mut self, event: PresentationEvent) -> Result<(), DomainError>;
}

/// Adapts a closure into a `PresentationSink`.
///
/// This is how callback-style consumers (`on_advance`, `on_complete`)
/// observe a run: match on the event inside the closure.
pub struct FnSink<F>(pub F);

impl<F> PresentationSink for FnSink<F>
where
    F: FnMut(PresentationEvent) + Send,
{
    fn deliver(&mut self, event: PresentationEvent) -> Result<(), DomainError> {
        (self.0)(event);
        Ok(())
    }
}

impl<F> std::fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnSink")
    }
}
