//! `continent` subcommand.

use atlas_core::Dataset;

use super::CommandResult;
use crate::table;

/// Prints the records belonging to `name`.
pub fn run(dataset: &Dataset, name: &str) -> CommandResult {
    let matches = dataset.filter_by_continent(name)?;
    table::print_countries(&matches);
    Ok(())
}
