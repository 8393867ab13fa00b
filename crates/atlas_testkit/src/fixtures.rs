//! Test fixtures and dataset file helpers.

use std::fs;
use std::path::Path;

use atlas_core::Country;
use tempfile::TempDir;

/// A small dataset with accented names and mixed continents.
///
/// The first three records are the canonical Argentina/Brasil/Francia
/// trio used across the workspace's scenario tests.
pub fn sample_dataset() -> Vec<Country> {
    vec![
        Country::new("Argentina", 45_000_000, 2_780_400, "América"),
        Country::new("Brasil", 214_000_000, 8_515_770, "América"),
        Country::new("Francia", 67_000_000, 543_940, "Europa"),
        Country::new("México", 126_000_000, 1_964_375, "América"),
        Country::new("España", 47_000_000, 505_990, "Europa"),
        Country::new("Japón", 125_000_000, 377_975, "Asia"),
    ]
}

/// [`sample_dataset`] rendered as CSV text with the canonical header.
pub fn sample_csv() -> String {
    let mut out = String::from("name,population,area,continent\n");
    for c in sample_dataset() {
        out.push_str(&format!(
            "{},{},{},{}\n",
            c.name, c.population, c.area, c.continent
        ));
    }
    out
}

/// Runs a closure against a dataset file with the given contents.
///
/// The file lives alone in a fresh temporary directory and is removed
/// when the closure returns.
///
/// # Example
///
/// ```rust,ignore
/// use atlas_testkit::fixtures::{sample_csv, with_dataset_file};
///
/// with_dataset_file(&sample_csv(), |path| {
///     let countries = atlas_csv::load_countries(path).unwrap();
///     assert_eq!(countries.len(), 6);
/// });
/// ```
pub fn with_dataset_file<F, R>(contents: &str, f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let dir = TempDir::new().expect("failed to create temp directory");
    let path = dir.path().join("countries.csv");
    fs::write(&path, contents).expect("failed to write dataset file");
    f(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_dataset_has_unique_normalized_names() {
        let records = sample_dataset();
        let mut keys: Vec<String> = records
            .iter()
            .map(|c| atlas_core::normalize(&c.name))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), records.len());
    }

    #[test]
    fn sample_csv_has_one_line_per_record_plus_header() {
        let lines = sample_csv().lines().count();
        assert_eq!(lines, sample_dataset().len() + 1);
    }

    #[test]
    fn with_dataset_file_cleans_up() {
        let remembered = with_dataset_file("name,population,area,continent\n", |path| {
            assert!(path.exists());
            path.to_path_buf()
        });
        assert!(!remembered.exists());
    }
}
