//! Subcommand implementations.

pub mod assess;
pub mod describe;
pub mod inspect;
