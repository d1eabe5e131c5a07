//! Cutscene engine — character selection.
//!
//! Responsible for the fixed character roster, the currently selected
//! character with its balloon text, and persisting that choice between
//! launches.

pub mod application;
pub mod domain;
