//! Intro scene domain: the typing sequencer and the director around it.

pub mod commands;
pub mod director;
pub mod sequencer;
