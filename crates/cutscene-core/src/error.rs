//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Playback itself never fails: empty input completes immediately and
/// firing a finished sequencer is a no-op. These variants cover the
/// boundaries around it.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input rejected by domain rules.
    #[error("validation error: {0}")]
    Validation(String),

    /// The key/value store could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// A script could not be read or parsed.
    #[error("content error: {0}")]
    Content(String),

    /// The presentation side stopped accepting events.
    #[error("presentation sink closed")]
    PresentationClosed,
}
