//! `population` and `area` range subcommands.

use atlas_core::Dataset;

use super::CommandResult;
use crate::table;

/// Prints the records with population within `[min, max]`.
pub fn population(dataset: &Dataset, min: Option<u64>, max: Option<u64>) -> CommandResult {
    let matches = dataset.filter_by_population_range(min, max)?;
    table::print_countries(&matches);
    Ok(())
}

/// Prints the records with area within `[min, max]`.
pub fn area(dataset: &Dataset, min: Option<u64>, max: Option<u64>) -> CommandResult {
    let matches = dataset.filter_by_area_range(min, max)?;
    table::print_countries(&matches);
    Ok(())
}
