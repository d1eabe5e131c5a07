//! Cutscene Core — shared playback abstractions.
//!
//! This crate defines the script data model, the presentation event
//! vocabulary, the `Sequencer` state-machine contract and the boundaries
//! (content, persistence, clock) that every scene crate depends on. It
//! contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod content;
pub mod error;
pub mod event;
pub mod playback;
pub mod script;
pub mod storage;
