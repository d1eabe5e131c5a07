//! Encounter director: the full wizard/monster scene.

use std::time::Duration;

use cutscene_core::event::PresentationEvent;
use cutscene_core::playback::{Sequencer, Step};
use cutscene_core::script::{Actor, DialogueLine};
use tracing::debug;

use super::player::{DialogueConfig, DialoguePlayer};

/// Pacing of the encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterConfig {
    /// Delay before the wizard appears.
    pub wizard_delay: Duration,
    /// Entrance animation of either actor.
    pub entrance: Duration,
    /// Pause between the wizard's last line and the monster's entrance.
    pub hand_off: Duration,
    /// Both actors walking to the center.
    pub converge: Duration,
    /// "VS" banner fade-in plus hold before the battle.
    pub versus: Duration,
    /// Dialogue bubble pacing.
    pub dialogue: DialogueConfig,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            wizard_delay: Duration::from_secs(1),
            entrance: Duration::from_secs(1),
            hand_off: Duration::from_millis(500),
            converge: Duration::from_millis(1500),
            versus: Duration::from_millis(1500),
            dialogue: DialogueConfig::default(),
        }
    }
}

/// Phases of the encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterPhase {
    /// Not started, or cancelled.
    Idle,
    /// Waiting for the wizard's cue.
    AwaitingWizard,
    /// An actor's entrance animation is running.
    Entering(Actor),
    /// An actor is saying its lines.
    Speaking(Actor),
    /// Short pause before the monster enters.
    HandingOff,
    /// Actors moving to the center.
    Converging,
    /// "VS" banner on screen.
    ShowingVersus,
    /// Battle requested.
    Done,
}

/// Plays the field scene: the wizard enters and speaks, hands off to the
/// monster, the monster enters and speaks, then both converge for the
/// battle.
#[derive(Debug)]
pub struct EncounterDirector {
    config: EncounterConfig,
    player: DialoguePlayer,
    wizard_lines: Vec<DialogueLine>,
    monster_lines: Vec<DialogueLine>,
    phase: EncounterPhase,
}

impl EncounterDirector {
    /// Creates an idle director.
    #[must_use]
    pub fn new(config: EncounterConfig) -> Self {
        Self {
            config,
            player: DialoguePlayer::new(config.dialogue),
            wizard_lines: Vec::new(),
            monster_lines: Vec::new(),
            phase: EncounterPhase::Idle,
        }
    }

    /// Starts the scene with the given lines for each actor.
    pub fn start(&mut self, wizard_lines: Vec<DialogueLine>, monster_lines: Vec<DialogueLine>) -> Step {
        self.wizard_lines = wizard_lines;
        self.monster_lines = monster_lines;
        self.phase = EncounterPhase::AwaitingWizard;
        Step::wait(self.config.wizard_delay)
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    fn enter(&mut self, actor: Actor) -> Step {
        debug!(%actor, "actor appears");
        self.phase = EncounterPhase::Entering(actor);
        Step::emit_then_wait(
            vec![PresentationEvent::ActorAppeared { actor }],
            self.config.entrance,
        )
    }

    fn speak(&mut self, actor: Actor) -> Step {
        let lines = match actor {
            Actor::Wizard => std::mem::take(&mut self.wizard_lines),
            Actor::Monster => std::mem::take(&mut self.monster_lines),
        };
        self.phase = EncounterPhase::Speaking(actor);
        let step = self.player.play_lines(lines);
        self.after_line_step(actor, step)
    }

    /// The player's `Complete` only ends one actor's turn.
    fn after_line_step(&mut self, actor: Actor, mut step: Step) -> Step {
        let Some(pos) = step.events.iter().position(PresentationEvent::is_complete) else {
            return step;
        };
        step.events.truncate(pos);
        step.events.push(PresentationEvent::ActorFinished { actor });
        match actor {
            Actor::Wizard => {
                debug!("wizard finished, handing off");
                self.phase = EncounterPhase::HandingOff;
                Step::emit_then_wait(step.events, self.config.hand_off)
            }
            Actor::Monster => {
                debug!("monster finished, converging");
                step.events.push(PresentationEvent::ActorsConverged);
                self.phase = EncounterPhase::Converging;
                Step::emit_then_wait(step.events, self.config.converge)
            }
        }
    }
}

impl Default for EncounterDirector {
    fn default() -> Self {
        Self::new(EncounterConfig::default())
    }
}

impl Sequencer for EncounterDirector {
    fn fire(&mut self) -> Step {
        match self.phase {
            EncounterPhase::Idle | EncounterPhase::Done => Step::idle(),
            EncounterPhase::AwaitingWizard => self.enter(Actor::Wizard),
            EncounterPhase::Entering(actor) => self.speak(actor),
            EncounterPhase::Speaking(actor) => {
                let step = self.player.fire();
                self.after_line_step(actor, step)
            }
            EncounterPhase::HandingOff => self.enter(Actor::Wizard.counterpart()),
            EncounterPhase::Converging => {
                self.phase = EncounterPhase::ShowingVersus;
                Step::emit_then_wait(vec![PresentationEvent::VersusShown], self.config.versus)
            }
            EncounterPhase::ShowingVersus => {
                debug!("requesting battle");
                self.phase = EncounterPhase::Done;
                Step::finish(vec![
                    PresentationEvent::BattleRequested,
                    PresentationEvent::Complete,
                ])
            }
        }
    }

    fn cancel(&mut self) {
        self.player.cancel();
        self.wizard_lines.clear();
        self.monster_lines.clear();
        self.phase = EncounterPhase::Idle;
    }

    fn is_finished(&self) -> bool {
        self.phase == EncounterPhase::Done
    }
}

#[cfg(test)]
mod tests {
    use cutscene_core::playback::timeline;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn quick_config() -> EncounterConfig {
        EncounterConfig {
            wizard_delay: ms(1000),
            entrance: ms(1000),
            hand_off: ms(500),
            converge: ms(1500),
            versus: ms(1500),
            dialogue: DialogueConfig {
                fade_in: Duration::ZERO,
                visible: ms(100),
                fade_out: Duration::ZERO,
            },
        }
    }

    #[test]
    fn test_encounter_orders_events_and_timing() {
        // Arrange
        let mut director = EncounterDirector::new(quick_config());
        let first = director.start(
            DialogueLine::for_actor(Actor::Wizard, ["w1", "w2"]),
            DialogueLine::for_actor(Actor::Monster, ["m1"]),
        );

        // Act
        let events: Vec<(u64, &'static str)> = timeline(&mut director, first)
            .into_iter()
            .map(|e| (e.at_ms, e.event.event_type()))
            .collect();

        // Assert
        assert_eq!(
            events,
            vec![
                (1000, "actorAppeared"),
                (2000, "lineShown"),
                (2100, "lineHidden"),
                (2100, "lineAdvanced"),
                (2100, "lineShown"),
                (2200, "lineHidden"),
                (2200, "actorFinished"),
                (2700, "actorAppeared"),
                (3700, "lineShown"),
                (3800, "lineHidden"),
                (3800, "actorFinished"),
                (3800, "actorsConverged"),
                (5300, "versusShown"),
                (6800, "battleRequested"),
                (6800, "complete"),
            ]
        );
        assert!(director.is_finished());
    }

    #[test]
    fn test_actors_appear_wizard_then_monster() {
        let mut director = EncounterDirector::default();
        let first = director.start(
            DialogueLine::for_actor(Actor::Wizard, ["w"]),
            DialogueLine::for_actor(Actor::Monster, ["m"]),
        );

        let appeared: Vec<Actor> = timeline(&mut director, first)
            .into_iter()
            .filter_map(|e| match e.event {
                PresentationEvent::ActorAppeared { actor } => Some(actor),
                _ => None,
            })
            .collect();

        assert_eq!(appeared, vec![Actor::Wizard, Actor::Monster]);
    }

    #[test]
    fn test_silent_actors_still_reach_battle() {
        let mut director = EncounterDirector::new(quick_config());
        let first = director.start(Vec::new(), Vec::new());

        let events: Vec<PresentationEvent> = timeline(&mut director, first)
            .into_iter()
            .map(|e| e.event)
            .collect();

        assert!(!events.iter().any(|e| matches!(e, PresentationEvent::LineShown { .. })));
        assert!(events.contains(&PresentationEvent::BattleRequested));
        assert_eq!(events.iter().filter(|e| e.is_complete()).count(), 1);
    }

    #[test]
    fn test_cancel_while_speaking_goes_idle() {
        // Arrange
        let mut director = EncounterDirector::new(quick_config());
        director.start(DialogueLine::for_actor(Actor::Wizard, ["w"]), Vec::new());
        director.fire();
        director.fire();
        assert_eq!(director.phase(), EncounterPhase::Speaking(Actor::Wizard));

        // Act
        director.cancel();

        // Assert
        assert_eq!(director.phase(), EncounterPhase::Idle);
        assert_eq!(director.fire(), Step::idle());
    }
}
