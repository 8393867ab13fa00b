//! `add` subcommand.

use std::path::Path;

use atlas_core::Dataset;

use super::CommandResult;

/// Adds or overwrites a record, then persists the dataset.
pub fn run(
    dataset: &mut Dataset,
    path: &Path,
    name: &str,
    population: u64,
    area: u64,
    continent: &str,
) -> CommandResult {
    let record = dataset.add_or_update(name, population, area, continent)?;
    tracing::debug!(name = %record.name, "record upserted, persisting dataset");
    atlas_csv::save_countries(path, dataset.records())?;
    println!("Saved {} ({} records total).", record.name, dataset.len());
    Ok(())
}
