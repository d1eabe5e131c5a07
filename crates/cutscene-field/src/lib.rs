//! Cutscene engine — field encounter scene.
//!
//! Responsible for playing the scripted wizard/monster exchange: actor
//! entrances, timed dialogue lines, the hand-off between actors and the
//! build-up to the battle transition.

pub mod application;
pub mod domain;
