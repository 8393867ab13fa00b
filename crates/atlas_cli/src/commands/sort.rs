//! `sort` subcommand.

use atlas_core::{Dataset, SortKey};

use super::CommandResult;
use crate::table;

/// Prints all records ordered by `key`.
pub fn run(dataset: &Dataset, key: &str, descending: bool) -> CommandResult {
    let key = key.parse::<SortKey>()?;
    table::print_countries(&dataset.sorted(key, descending));
    Ok(())
}
