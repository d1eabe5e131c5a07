//! YAML script documents and their compiled form.

use std::time::Duration;

use cutscene_core::content::ContentSource;
use cutscene_core::error::DomainError;
use cutscene_core::script::{Actor, DialogueLine, StoryPassage};
use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Longest accepted pause after a story passage.
pub const MAX_REVEAL_DELAY_SECONDS: f64 = 3600.0;

/// A script as written on disk.
///
/// ```yaml
/// intro:
///   - text: "Once upon a time..."
///     reveal_delay_seconds: 1.5
/// wizard: ["Who goes there?"]
/// monster: ["Nobody."]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptDocument {
    /// Intro story passages.
    #[serde(default)]
    pub intro: Vec<PassageDocument>,
    /// Wizard lines.
    #[serde(default)]
    pub wizard: Vec<String>,
    /// Monster lines.
    #[serde(default)]
    pub monster: Vec<String>,
}

/// One intro passage as written on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PassageDocument {
    /// Passage text.
    pub text: String,
    /// Pause after the passage, in seconds.
    #[serde(default)]
    pub reveal_delay_seconds: f64,
}

/// A validated script, ready to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledScript {
    intro: Vec<StoryPassage>,
    wizard: Vec<String>,
    monster: Vec<String>,
    version_hash: String,
}

impl CompiledScript {
    /// SHA-256 of the script source, lowercase hex.
    #[must_use]
    pub fn version_hash(&self) -> &str {
        &self.version_hash
    }
}

impl ContentSource for CompiledScript {
    fn intro_story(&self) -> Vec<StoryPassage> {
        self.intro.clone()
    }

    fn dialogue(&self, actor: Actor) -> Vec<DialogueLine> {
        let lines = match actor {
            Actor::Wizard => &self.wizard,
            Actor::Monster => &self.monster,
        };
        DialogueLine::for_actor(actor, lines.iter().cloned())
    }
}

/// Parses and validates a YAML script.
///
/// # Errors
///
/// Returns `DomainError::Content` if `source` is not a valid script
/// document, and `DomainError::Validation` if a text is blank or a delay is
/// negative, not finite, or longer than [`MAX_REVEAL_DELAY_SECONDS`].
pub fn compile_script(source: &str) -> Result<CompiledScript, DomainError> {
    let document: ScriptDocument =
        serde_yaml::from_str(source).map_err(|e| DomainError::Content(format!("invalid script: {e}")))?;

    let intro = document
        .intro
        .into_iter()
        .enumerate()
        .map(|(i, passage)| {
            ensure_not_blank(&passage.text, || format!("intro[{i}]"))?;
            let delay = Duration::try_from_secs_f64(passage.reveal_delay_seconds).map_err(|_| {
                DomainError::Validation(format!(
                    "intro[{i}]: reveal delay {} is not a valid duration",
                    passage.reveal_delay_seconds
                ))
            })?;
            if delay.as_secs_f64() > MAX_REVEAL_DELAY_SECONDS {
                return Err(DomainError::Validation(format!(
                    "intro[{i}]: reveal delay {} exceeds {MAX_REVEAL_DELAY_SECONDS} seconds",
                    passage.reveal_delay_seconds
                )));
            }
            Ok(StoryPassage::new(passage.text, delay))
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    for (actor, lines) in [(Actor::Wizard, &document.wizard), (Actor::Monster, &document.monster)] {
        for (i, line) in lines.iter().enumerate() {
            ensure_not_blank(line, || format!("{actor}[{i}]"))?;
        }
    }

    Ok(CompiledScript {
        intro,
        wizard: document.wizard,
        monster: document.monster,
        version_hash: format!("{:x}", Sha256::digest(source.as_bytes())),
    })
}

fn ensure_not_blank(text: &str, location: impl FnOnce() -> String) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::Validation(format!("{}: text must not be blank", location())));
    }
    Ok(())
}
