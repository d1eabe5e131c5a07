//! Character selection domain.

pub mod commands;
pub mod roster;
pub mod selection;
