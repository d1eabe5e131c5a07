//! Cutscene engine — script content.
//!
//! Responsible for the built-in intro story and encounter dialogue, and for
//! compiling YAML scripts that replace them.

pub mod application;
pub mod domain;
