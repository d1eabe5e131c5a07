//! Shared test doubles for the cutscene engine.

mod clock;
mod content;
mod sink;
mod store;

pub use clock::FixedClock;
pub use content::ScriptedContent;
pub use sink::RecordingSink;
pub use store::{FailingStore, RecordingStore};
