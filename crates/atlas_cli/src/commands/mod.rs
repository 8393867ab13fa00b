//! Subcommand implementations.

pub mod add;
pub mod continent;
pub mod range;
pub mod search;
pub mod shell;
pub mod sort;
pub mod stats;
pub mod update;

/// Result type shared by all subcommands.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
