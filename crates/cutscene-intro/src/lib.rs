//! Cutscene engine — intro story scene.
//!
//! Responsible for revealing the intro passages one character at a time
//! and for the reveal chain (character, background, start button) that
//! follows the story.

pub mod application;
pub mod domain;
