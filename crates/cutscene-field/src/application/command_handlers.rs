//! Command handlers for the field scene.

use cutscene_core::command::Command;
use cutscene_core::content::ContentSource;
use cutscene_core::event::{FnSink, PresentationEvent, PresentationSink};
use cutscene_core::script::{Actor, DialogueLine};
use cutscene_runtime::{PlaybackHandle, PlaybackOutcome, Stage, drive};
use tracing::info;

use crate::domain::commands::PlayEncounter;
use crate::domain::encounter::{EncounterConfig, EncounterDirector};
use crate::domain::player::{DialogueConfig, DialoguePlayer};

/// Handles the `PlayEncounter` command: loads both actors' lines from
/// `content` and starts the encounter on `stage`, superseding whatever the
/// stage was playing.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn handle_play_encounter<K>(
    command: &PlayEncounter,
    content: &dyn ContentSource,
    config: EncounterConfig,
    stage: &Stage,
    sink: K,
) -> PlaybackHandle
where
    K: PresentationSink + 'static,
{
    let wizard = content.dialogue(Actor::Wizard);
    let monster = content.dialogue(Actor::Monster);
    let (wizard_count, monster_count) = (wizard.len(), monster.len());

    let mut director = EncounterDirector::new(config);
    let first = director.start(wizard, monster);
    let handle = stage.play(director, first, sink);

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        run_id = %handle.run_id(),
        wizard_lines = wizard_count,
        monster_lines = monster_count,
        "encounter playback started"
    );
    handle
}

/// Plays `lines` on the current task, calling `on_advance` with the index of
/// every line after the first and `on_complete` once after the last line has
/// faded out.
pub async fn play_lines<A, C>(
    lines: Vec<DialogueLine>,
    config: DialogueConfig,
    mut on_advance: A,
    mut on_complete: C,
) -> PlaybackOutcome
where
    A: FnMut(usize) + Send,
    C: FnMut() + Send,
{
    let mut player = DialoguePlayer::new(config);
    let first = player.play_lines(lines);
    let mut sink = FnSink(|event: PresentationEvent| match event {
        PresentationEvent::LineAdvanced { index, .. } => on_advance(index),
        PresentationEvent::Complete => on_complete(),
        _ => {}
    });
    drive(&mut player, first, &mut sink).await
}
