//! `update` subcommand.

use std::path::Path;

use atlas_core::{Dataset, FieldUpdate};

use super::CommandResult;

/// Updates fields of an existing record, then persists the dataset.
///
/// A name with no matching record is reported as a message, not a
/// failure; nothing is written in that case.
pub fn run(
    dataset: &mut Dataset,
    path: &Path,
    name: &str,
    population: Option<u64>,
    area: Option<u64>,
    continent: Option<String>,
) -> CommandResult {
    let update = FieldUpdate {
        population,
        area,
        continent,
    };
    match dataset.update_fields(name, update)? {
        Some(record) => {
            tracing::debug!(name = %record.name, "record updated, persisting dataset");
            atlas_csv::save_countries(path, dataset.records())?;
            println!("Updated {}.", record.name);
        }
        None => {
            println!("No country named {name:?} (matching ignores accents and case).");
        }
    }
    Ok(())
}
