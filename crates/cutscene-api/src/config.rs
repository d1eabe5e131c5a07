//! Configuration read from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use cutscene_field::domain::encounter::EncounterConfig;
use cutscene_field::domain::player::DialogueConfig;
use cutscene_intro::domain::director::IntroConfig;
use cutscene_intro::domain::sequencer::TypingConfig;

use crate::error::AppError;

/// Slowest accepted typing tick.
pub const MAX_TICK_MS: u64 = 10_000;

/// Playback pacing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Interval between typed characters.
    pub tick_ms: u64,
    /// Time a dialogue line stays fully visible.
    pub line_visible_ms: u64,
    /// Dialogue bubble fade-in and fade-out.
    pub fade_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            line_visible_ms: 2500,
            fade_ms: 500,
        }
    }
}

impl Pacing {
    /// Intro scene pacing.
    #[must_use]
    pub fn intro_config(&self) -> IntroConfig {
        IntroConfig {
            typing: TypingConfig {
                tick_interval: Duration::from_millis(self.tick_ms),
            },
            ..IntroConfig::default()
        }
    }

    /// Field scene pacing.
    #[must_use]
    pub fn encounter_config(&self) -> EncounterConfig {
        let fade = Duration::from_millis(self.fade_ms);
        EncounterConfig {
            dialogue: DialogueConfig {
                fade_in: fade,
                visible: Duration::from_millis(self.line_visible_ms),
                fade_out: fade,
            },
            ..EncounterConfig::default()
        }
    }
}

/// Server and playback configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// JSON store file; in-memory store when unset.
    pub store_path: Option<PathBuf>,
    /// YAML script; built-in content when unset.
    pub script_path: Option<PathBuf>,
    /// Playback pacing.
    pub pacing: Pacing,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable or `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Pacing::default();
        let pacing = Pacing {
            tick_ms: parse_or(&lookup, "CUTSCENE_TICK_MS", defaults.tick_ms)?,
            line_visible_ms: parse_or(&lookup, "CUTSCENE_LINE_VISIBLE_MS", defaults.line_visible_ms)?,
            fade_ms: parse_or(&lookup, "CUTSCENE_FADE_MS", defaults.fade_ms)?,
        };
        if !(1..=MAX_TICK_MS).contains(&pacing.tick_ms) {
            return Err(AppError::Config(format!(
                "CUTSCENE_TICK_MS must be between 1 and {MAX_TICK_MS}"
            )));
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            store_path: lookup("CUTSCENE_STORE_PATH").map(PathBuf::from),
            script_path: lookup("CUTSCENE_SCRIPT_PATH").map(PathBuf::from),
            pacing,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|e| AppError::Config(format!("{key} must be a valid {}: {e}", std::any::type_name::<T>()))),
    }
}
