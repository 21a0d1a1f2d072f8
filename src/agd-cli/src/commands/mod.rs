//! Subcommand implementations.

pub mod artifact;
pub mod character;
pub mod weapon;
