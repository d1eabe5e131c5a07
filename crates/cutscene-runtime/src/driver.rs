//! Tokio driver executing sequencers in real time.

use std::sync::Arc;
use std::time::Duration;

use cutscene_core::event::PresentationSink;
use cutscene_core::playback::{Next, Sequencer, Step};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::epoch::{Epoch, RunGuard};

/// About thirty years.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The sequencer reached its terminal step.
    Completed,
    /// The run was cancelled or superseded by a newer run.
    Cancelled,
    /// The sink stopped accepting events.
    Disconnected,
}

/// Runs `sequencer` to the end on the current task, with no external
/// cancellation. Returns once the terminal step has been delivered or the
/// sink has closed.
pub async fn drive<S, K>(sequencer: &mut S, first: Step, sink: &mut K) -> PlaybackOutcome
where
    S: Sequencer + ?Sized,
    K: PresentationSink + ?Sized,
{
    let epoch = Epoch::new();
    let issued = epoch.advance();
    run(sequencer, first, sink, &RunGuard::new(epoch, issued)).await
}

async fn run<S, K>(sequencer: &mut S, first: Step, sink: &mut K, guard: &RunGuard) -> PlaybackOutcome
where
    S: Sequencer + ?Sized,
    K: PresentationSink + ?Sized,
{
    let mut step = first;
    loop {
        for event in step.events.drain(..) {
            debug!(event = event.event_type(), "delivering");
            match guard.deliver(|| sink.deliver(event)) {
                None => {
                    sequencer.cancel();
                    return PlaybackOutcome::Cancelled;
                }
                Some(Err(e)) => {
                    warn!(error = %e, "presentation sink rejected event, stopping run");
                    sequencer.cancel();
                    return PlaybackOutcome::Disconnected;
                }
                Some(Ok(())) => {}
            }
        }

        let delay = match step.next {
            Next::Done => return PlaybackOutcome::Completed,
            Next::After(delay) => delay,
        };

        let deadline = deadline_after(delay);
        loop {
            tokio::select! {
                () = sleep_until(deadline) => break,
                () = guard.changed() => {
                    if !guard.is_current() {
                        break;
                    }
                }
            }
        }
        if !guard.is_current() {
            sequencer.cancel();
            return PlaybackOutcome::Cancelled;
        }

        step = sequencer.fire();
    }
}

/// Deadlines past what `Instant` can represent are pushed to a far-future
/// point instead; cancellation still wakes the run.
fn deadline_after(delay: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(delay).unwrap_or_else(|| now + FAR_FUTURE)
}

/// Handle to a spawned run.
///
/// Dropping the handle cancels the run.
#[derive(Debug)]
pub struct PlaybackHandle {
    run_id: Uuid,
    guard: RunGuard,
    task: Option<JoinHandle<PlaybackOutcome>>,
}

impl PlaybackHandle {
    /// Correlation ID of the run, also recorded on its tracing span.
    #[must_use]
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Stops the run. Once this returns, no further event of the run is
    /// delivered. Cancelling twice, or cancelling a run that already ended
    /// or was superseded, has no effect.
    pub fn cancel(&self) {
        if self.guard.epoch().invalidate(self.guard.issued()) {
            info!(run_id = %self.run_id, "playback cancelled");
        }
    }

    /// Returns `true` while no cancel or newer run has invalidated this run.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.guard.is_current()
    }

    /// Waits for the run to end.
    pub async fn finished(mut self) -> PlaybackOutcome {
        let Some(task) = self.task.take() else {
            return PlaybackOutcome::Cancelled;
        };
        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(run_id = %self.run_id, error = %e, "playback task failed");
                PlaybackOutcome::Cancelled
            }
        }
    }
}

impl Drop for PlaybackHandle {
    fn drop(&mut self) {
        if self.task.is_some() {
            self.cancel();
        }
    }
}

fn spawn_guarded<S, K>(mut sequencer: S, first: Step, mut sink: K, guard: RunGuard) -> PlaybackHandle
where
    S: Sequencer + 'static,
    K: PresentationSink + 'static,
{
    let run_id = Uuid::new_v4();
    let span = info_span!("playback", %run_id);
    let task_guard = guard.clone();
    let task = tokio::spawn(
        async move {
            info!("playback started");
            let outcome = run(&mut sequencer, first, &mut sink, &task_guard).await;
            info!(?outcome, "playback ended");
            outcome
        }
        .instrument(span),
    );
    PlaybackHandle {
        run_id,
        guard,
        task: Some(task),
    }
}

/// Spawns a run of `sequencer` on the current tokio runtime.
///
/// `first` is the step returned when the sequencer was started.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn spawn_playback<S, K>(sequencer: S, first: Step, sink: K) -> PlaybackHandle
where
    S: Sequencer + 'static,
    K: PresentationSink + 'static,
{
    let epoch = Epoch::new();
    let issued = epoch.advance();
    spawn_guarded(sequencer, first, sink, RunGuard::new(epoch, issued))
}

/// A playback slot that holds at most one live run.
///
/// Starting a run on a stage supersedes the previous one: its pending
/// firings are discarded before they can deliver anything.
#[derive(Debug, Clone)]
pub struct Stage {
    name: &'static str,
    epoch: Arc<Epoch>,
}

impl Stage {
    /// Creates an empty stage.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            epoch: Epoch::new(),
        }
    }

    /// Starts a run, superseding any run already on this stage.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn play<S, K>(&self, sequencer: S, first: Step, sink: K) -> PlaybackHandle
    where
        S: Sequencer + 'static,
        K: PresentationSink + 'static,
    {
        let issued = self.epoch.advance();
        debug!(stage = self.name, epoch = issued, "stage run issued");
        spawn_guarded(sequencer, first, sink, RunGuard::new(Arc::clone(&self.epoch), issued))
    }

    /// Stops whatever run is on the stage.
    pub fn clear(&self) {
        self.epoch.advance();
        debug!(stage = self.name, "stage cleared");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use cutscene_core::event::{FnSink, PresentationEvent};
    use cutscene_test_support::RecordingSink;

    use super::*;

    /// Emits `VersusShown` every 100 ms, then `Complete`.
    struct Beats {
        left: u32,
        cancelled: bool,
    }

    impl Beats {
        fn new(left: u32) -> (Self, Step) {
            (
                Self {
                    left,
                    cancelled: false,
                },
                Step::wait(Duration::from_millis(100)),
            )
        }
    }

    impl Sequencer for Beats {
        fn fire(&mut self) -> Step {
            if self.cancelled || self.left == 0 {
                return Step::idle();
            }
            self.left -= 1;
            if self.left == 0 {
                Step::finish(vec![PresentationEvent::Complete])
            } else {
                Step::emit_then_wait(
                    vec![PresentationEvent::VersusShown],
                    Duration::from_millis(100),
                )
            }
        }

        fn cancel(&mut self) {
            self.cancelled = true;
        }

        fn is_finished(&self) -> bool {
            self.left == 0
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_drive_delivers_events_on_schedule() {
        // Arrange
        let (mut beats, first) = Beats::new(3);
        let start = Instant::now();
        let mut stamps = Vec::new();
        let mut sink = FnSink(|event: PresentationEvent| {
            stamps.push((start.elapsed().as_millis(), event));
        });

        // Act
        let outcome = drive(&mut beats, first, &mut sink).await;

        // Assert
        assert_eq!(outcome, PlaybackOutcome::Completed);
        assert_eq!(
            stamps,
            vec![
                (100, PresentationEvent::VersusShown),
                (200, PresentationEvent::VersusShown),
                (300, PresentationEvent::Complete),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_mid_run_stops_delivery() {
        // Arrange
        let (beats, first) = Beats::new(10);
        let sink = RecordingSink::new();
        let handle = spawn_playback(beats, first, sink.clone());

        // Act
        tokio::time::sleep(Duration::from_millis(250)).await;
        handle.cancel();
        let delivered_at_cancel = sink.events().len();
        tokio::time::sleep(Duration::from_secs(5)).await;

        // Assert
        assert_eq!(delivered_at_cancel, 2);
        assert_eq!(sink.events().len(), 2);
        assert!(!sink.events().contains(&PresentationEvent::Complete));
        assert_eq!(handle.finished().await, PlaybackOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_twice_is_harmless() {
        let (beats, first) = Beats::new(3);
        let handle = spawn_playback(beats, first, RecordingSink::new());

        handle.cancel();
        handle.cancel();

        assert!(!handle.is_current());
        assert_eq!(handle.finished().await, PlaybackOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_channel_ends_run_as_disconnected() {
        let (beats, first) = Beats::new(5);
        let (sink, rx) = crate::channel();
        drop(rx);

        let handle = spawn_playback(beats, first, sink);

        assert_eq!(handle.finished().await, PlaybackOutcome::Disconnected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stage_play_supersedes_previous_run() {
        // Arrange
        let stage = Stage::new("test");
        let first_sink = RecordingSink::new();
        let second_sink = RecordingSink::new();
        let (beats, first) = Beats::new(3);
        let old = stage.play(beats, first, first_sink.clone());
        tokio::time::sleep(Duration::from_millis(150)).await;

        // Act
        let (beats, first) = Beats::new(2);
        let new = stage.play(beats, first, second_sink.clone());

        // Assert
        assert_eq!(old.finished().await, PlaybackOutcome::Cancelled);
        assert_eq!(new.finished().await, PlaybackOutcome::Completed);
        assert_eq!(first_sink.events(), vec![PresentationEvent::VersusShown]);
        assert_eq!(
            second_sink.events(),
            vec![PresentationEvent::VersusShown, PresentationEvent::Complete]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_stage_clear_cancels_live_run() {
        let stage = Stage::new("test");
        let sink = RecordingSink::new();
        let (beats, first) = Beats::new(3);
        let handle = stage.play(beats, first, sink.clone());

        stage.clear();

        assert_eq!(handle.finished().await, PlaybackOutcome::Cancelled);
        assert!(sink.events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unrepresentable_delay_waits_until_cancelled() {
        // Arrange
        let sink = RecordingSink::new();
        let handle = spawn_playback(Beats::new(3).0, Step::wait(Duration::MAX), sink.clone());

        // Act
        tokio::time::sleep(Duration::from_secs(1)).await;
        handle.cancel();

        // Assert
        assert_eq!(handle.finished().await, PlaybackOutcome::Cancelled);
        assert!(sink.events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sink_may_clear_its_own_stage_on_complete() {
        // Arrange
        let stage = Stage::new("test");
        let sink_stage = stage.clone();
        let sink = FnSink(move |event: PresentationEvent| {
            if event.is_complete() {
                sink_stage.clear();
            }
        });
        let (beats, first) = Beats::new(2);

        // Act
        let handle = stage.play(beats, first, sink);
        let outcome = tokio::time::timeout(Duration::from_secs(5), handle.finished()).await;

        // Assert
        assert_eq!(outcome, Ok(PlaybackOutcome::Completed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sink_may_chain_next_run_on_complete() {
        // Arrange
        let stage = Stage::new("test");
        let chained: Arc<std::sync::Mutex<Option<PlaybackHandle>>> = Arc::default();
        let second_sink = RecordingSink::new();
        let sink = {
            let stage = stage.clone();
            let chained = Arc::clone(&chained);
            let second_sink = second_sink.clone();
            FnSink(move |event: PresentationEvent| {
                if event.is_complete() {
                    let (beats, first) = Beats::new(2);
                    let next = stage.play(beats, first, second_sink.clone());
                    *chained.lock().unwrap() = Some(next);
                }
            })
        };
        let (beats, first) = Beats::new(1);

        // Act
        let handle = stage.play(beats, first, sink);
        let outcome = tokio::time::timeout(Duration::from_secs(5), handle.finished()).await;
        let next = chained.lock().unwrap().take().unwrap();
        let next_outcome = tokio::time::timeout(Duration::from_secs(5), next.finished()).await;

        // Assert
        assert_eq!(outcome, Ok(PlaybackOutcome::Completed));
        assert_eq!(next_outcome, Ok(PlaybackOutcome::Completed));
        assert_eq!(
            second_sink.events(),
            vec![PresentationEvent::VersusShown, PresentationEvent::Complete]
        );
    }
}
