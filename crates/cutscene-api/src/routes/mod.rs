//! Route modules organized by scene.

pub mod characters;
pub mod content;
pub mod field;
pub mod health;
pub mod intro;

#[cfg(test)]
pub(crate) mod testing;
