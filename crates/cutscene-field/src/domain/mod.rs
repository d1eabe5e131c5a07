//! Field scene domain.

pub mod commands;
pub mod encounter;
pub mod player;
