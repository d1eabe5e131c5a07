//! Terminal player: plays the intro and then the field encounter in real
//! time, printing every presentation event.

use std::io::{self, ErrorKind, Write};

use cutscene_api::config::Config;
use cutscene_api::error::AppError;
use cutscene_api::state::LoadedContent;
use cutscene_core::error::DomainError;
use cutscene_core::event::{PresentationEvent, PresentationSink};
use cutscene_field::application::command_handlers::handle_play_encounter;
use cutscene_field::domain::commands::PlayEncounter;
use cutscene_intro::application::command_handlers::handle_play_intro;
use cutscene_intro::domain::commands::PlayIntro;
use cutscene_runtime::{PlaybackHandle, PlaybackOutcome, Stage};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Prints events to a terminal. A closed pipe ends the run.
struct TerminalSink<W> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    fn render(&mut self, event: &PresentationEvent) -> io::Result<()> {
        match event {
            PresentationEvent::TextUpdated { value } => {
                write!(self.out, "\r{value}")?;
                self.out.flush()
            }
            PresentationEvent::StoryFinished => writeln!(self.out),
            PresentationEvent::LineShown { actor, value } => writeln!(self.out, "[{actor}] {value}"),
            other => writeln!(self.out, "  · {}", other.event_type()),
        }
    }
}

impl<W: Write + Send> PresentationSink for TerminalSink<W> {
    fn deliver(&mut self, event: PresentationEvent) -> Result<(), DomainError> {
        match self.render(&event) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Err(DomainError::PresentationClosed),
            Err(e) => {
                debug!(error = %e, event = event.event_type(), "failed to print event");
                Ok(())
            }
        }
    }
}

fn stdout_sink() -> TerminalSink<io::Stdout> {
    TerminalSink { out: io::stdout() }
}

async fn play(stage: &Stage, handle: PlaybackHandle) -> PlaybackOutcome {
    tokio::select! {
        outcome = handle.finished() => outcome,
        _ = tokio::signal::ctrl_c() => {
            stage.clear();
            PlaybackOutcome::Cancelled
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let content = LoadedContent::from_config(&config).await?;
    let stage = Stage::new("terminal");

    let intro = handle_play_intro(
        &PlayIntro {
            correlation_id: Uuid::new_v4(),
            story_only: false,
        },
        content.source.as_ref(),
        config.pacing.intro_config(),
        &stage,
        stdout_sink(),
    );
    if play(&stage, intro).await != PlaybackOutcome::Completed {
        return Ok(());
    }

    let encounter = handle_play_encounter(
        &PlayEncounter {
            correlation_id: Uuid::new_v4(),
        },
        content.source.as_ref(),
        config.pacing.encounter_config(),
        &stage,
        stdout_sink(),
    );
    play(&stage, encounter).await;

    Ok(())
}
