//! Command handlers for the intro scene.

use cutscene_core::command::Command;
use cutscene_core::content::ContentSource;
use cutscene_core::event::PresentationSink;
use cutscene_runtime::{PlaybackHandle, Stage};
use tracing::info;

use crate::domain::commands::PlayIntro;
use crate::domain::director::{IntroConfig, IntroDirector};
use crate::domain::sequencer::TypingSequencer;

/// Handles the `PlayIntro` command: loads the story from `content` and
/// starts it on `stage`, superseding whatever the stage was playing.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn handle_play_intro<K>(
    command: &PlayIntro,
    content: &dyn ContentSource,
    config: IntroConfig,
    stage: &Stage,
    sink: K,
) -> PlaybackHandle
where
    K: PresentationSink + 'static,
{
    let passages = content.intro_story();
    let passage_count = passages.len();

    let handle = if command.story_only {
        let mut sequencer = TypingSequencer::new(config.typing);
        let first = sequencer.start(passages);
        stage.play(sequencer, first, sink)
    } else {
        let mut director = IntroDirector::new(config);
        let first = director.start(passages);
        stage.play(director, first, sink)
    };

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        run_id = %handle.run_id(),
        passages = passage_count,
        "intro playback started"
    );
    handle
}
