//! Script content domain.

pub mod builtin;
pub mod commands;
pub mod document;
