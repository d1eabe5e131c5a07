//! The sequencer contract shared by every scene.
//!
//! A sequencer is a pure state machine: each call to [`Sequencer::fire`]
//! performs one scheduled transition and returns a [`Step`] listing the
//! events to deliver and when it wants to be fired again. Sequencers never
//! sleep or spawn; a scheduler (the tokio driver in `cutscene-runtime`, or
//! [`timeline`] below) owns time.

use std::time::Duration;

use serde::Serialize;

use crate::event::PresentationEvent;

/// When the scheduler should fire the sequencer next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Fire again after the given delay.
    After(Duration),
    /// The run is over; do not fire again.
    Done,
}

/// Outcome of one firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Events to deliver, in order.
    pub events: Vec<PresentationEvent>,
    /// When to fire next.
    pub next: Next,
}

impl Step {
    /// A step that emits nothing and asks to be fired after `delay`.
    #[must_use]
    pub fn wait(delay: Duration) -> Self {
        Self {
            events: Vec::new(),
            next: Next::After(delay),
        }
    }

    /// A step that emits `events` and asks to be fired after `delay`.
    #[must_use]
    pub fn emit_then_wait(events: Vec<PresentationEvent>, delay: Duration) -> Self {
        Self {
            events,
            next: Next::After(delay),
        }
    }

    /// A terminal step emitting `events`.
    #[must_use]
    pub fn finish(events: Vec<PresentationEvent>) -> Self {
        Self {
            events,
            next: Next::Done,
        }
    }

    /// The no-op step returned when a finished or idle sequencer is fired.
    #[must_use]
    pub fn idle() -> Self {
        Self::finish(Vec::new())
    }

    /// Returns `true` if the scheduler should stop after this step.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.next == Next::Done
    }
}

/// A time-driven state machine.
pub trait Sequencer: Send {
    /// Performs the transition scheduled for now.
    ///
    /// Firing an idle or finished sequencer returns [`Step::idle`].
    fn fire(&mut self) -> Step;

    /// Returns the sequencer to its idle state, discarding the cursor.
    /// Calling it more than once has no further effect.
    fn cancel(&mut self);

    /// Returns `true` once the terminal state has been reached.
    fn is_finished(&self) -> bool;
}

/// An event stamped with its offset from the start of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimedEvent {
    /// Milliseconds since the run started.
    pub at_ms: u64,
    /// The event delivered at that moment.
    #[serde(flatten)]
    pub event: PresentationEvent,
}

/// Runs `sequencer` to exhaustion without sleeping, starting from the step
/// returned by its `start`-style constructor call.
///
/// Each event is stamped with the virtual time at which a real scheduler
/// would deliver it. Offsets saturate at `u64::MAX`.
pub fn timeline<S>(sequencer: &mut S, first: Step) -> Vec<TimedEvent>
where
    S: Sequencer + ?Sized,
{
    let mut elapsed = Duration::ZERO;
    let mut out = Vec::new();
    let mut step = first;
    loop {
        let at_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        out.extend(
            step.events
                .drain(..)
                .map(|event| TimedEvent { at_ms, event }),
        );
        match step.next {
            Next::Done => break,
            Next::After(delay) => {
                elapsed = elapsed.saturating_add(delay);
                step = sequencer.fire();
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts down, emitting `Complete` on the last firing.
    struct Countdown {
        remaining: u32,
    }

    impl Sequencer for Countdown {
        fn fire(&mut self) -> Step {
            match self.remaining {
                0 => Step::idle(),
                1 => {
                    self.remaining = 0;
                    Step::finish(vec![PresentationEvent::Complete])
                }
                _ => {
                    self.remaining -= 1;
                    Step::emit_then_wait(
                        vec![PresentationEvent::VersusShown],
                        Duration::from_millis(100),
                    )
                }
            }
        }

        fn cancel(&mut self) {
            self.remaining = 0;
        }

        fn is_finished(&self) -> bool {
            self.remaining == 0
        }
    }

    #[test]
    fn test_timeline_stamps_events_with_accumulated_delays() {
        // Arrange
        let mut countdown = Countdown { remaining: 3 };
        let first = Step::wait(Duration::from_millis(50));

        // Act
        let events = timeline(&mut countdown, first);

        // Assert
        let stamps: Vec<u64> = events.iter().map(|e| e.at_ms).collect();
        assert_eq!(stamps, vec![50, 150, 250]);
        assert_eq!(events[2].event, PresentationEvent::Complete);
        assert!(countdown.is_finished());
    }

    #[test]
    fn test_timeline_with_terminal_first_step_does_not_fire() {
        let mut countdown = Countdown { remaining: 3 };

        let events = timeline(&mut countdown, Step::finish(vec![PresentationEvent::Complete]));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].at_ms, 0);
        assert_eq!(countdown.remaining, 3);
    }

    #[test]
    fn test_timeline_saturates_instead_of_overflowing() {
        // Arrange
        let mut countdown = Countdown { remaining: 2 };
        let first = Step::wait(Duration::MAX);

        // Act
        let events = timeline(&mut countdown, first);

        // Assert
        let stamps: Vec<u64> = events.iter().map(|e| e.at_ms).collect();
        assert_eq!(stamps, vec![u64::MAX, u64::MAX]);
        assert_eq!(events[1].event, PresentationEvent::Complete);
    }

    #[test]
    fn test_timed_event_serializes_flat() {
        let timed = TimedEvent {
            at_ms: 250,
            event: PresentationEvent::Complete,
        };

        let json = serde_json::to_value(&timed).unwrap();

        assert_eq!(json, serde_json::json!({ "at_ms": 250, "event": "complete" }));
    }
}
