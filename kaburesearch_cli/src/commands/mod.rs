//! CLI subcommand implementations.

pub mod interactive;
pub mod search;
