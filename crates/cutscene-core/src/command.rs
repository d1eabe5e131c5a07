//! Command abstractions.

use uuid::Uuid;

/// Trait implemented by every request handled by an application layer.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted command name used in log records, e.g. `character.select`.
    fn command_type(&self) -> &'static str;

    /// Correlation ID tying the command to the logs and playback run it starts.
    fn correlation_id(&self) -> Uuid;
}
