//! Cutscene Runtime — real-time scheduler for sequencers.
//!
//! Every run is a single tokio task stepping one sequencer, so events of a
//! run are delivered strictly in schedule order. Runs are guarded by an
//! epoch counter: bumping the epoch (cancel, or a newer run on the same
//! [`Stage`]) stops delivery before the next event.

mod driver;
mod epoch;
mod sink;

pub use driver::{PlaybackHandle, PlaybackOutcome, Stage, drive, spawn_playback};
pub use sink::{ChannelSink, channel};
