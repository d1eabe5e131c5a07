//! Wall-clock abstraction used to stamp persisted state.

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time.
///
/// Playback pacing never reads this; it only timestamps records such as a
/// saved character selection, so tests can pin the value.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
