//! `search` subcommand.

use atlas_core::{Dataset, NameMatch};

use super::CommandResult;
use crate::table;

/// Prints the records whose name matches `query`.
pub fn run(dataset: &Dataset, query: &str, exact: bool) -> CommandResult {
    let mode = if exact {
        NameMatch::Exact
    } else {
        NameMatch::Partial
    };
    let matches = dataset.search_by_name(query, mode)?;
    table::print_countries(&matches);
    Ok(())
}
