//! `stats` subcommand.

use atlas_core::Dataset;

use super::CommandResult;
use crate::table;

/// Prints the aggregate statistics summary.
pub fn run(dataset: &Dataset) -> CommandResult {
    table::print_stats(&dataset.statistics());
    Ok(())
}
