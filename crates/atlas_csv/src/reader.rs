//! CSV dataset loading.

use std::fs::File;
use std::path::Path;

use atlas_core::{normalize, Country};
use csv::StringRecord;
use tracing::info;

use crate::error::{CsvError, CsvResult};

/// Column names a dataset file must carry, in order.
pub const EXPECTED_HEADERS: [&str; 4] = ["name", "population", "area", "continent"];

/// Loads country records from a CSV file.
///
/// The file must be UTF-8 with the header
/// `name,population,area,continent`. Header cells are matched under
/// [`normalize`], so case, accents and surrounding whitespace are
/// tolerated, but the names and their order must match. An existing
/// but empty file loads as an empty dataset.
///
/// Rows are validated field by field: name and continent must not be
/// blank, population must parse as a non-negative integer, and area
/// must parse as a strictly positive integer (the load-time rule;
/// mutation-time updates only require non-negative). Every rejection
/// names the offending 1-based line.
pub fn load_countries(path: &Path) -> CsvResult<Vec<Country>> {
    let file = File::open(path)?;
    // Flexible mode lets row-length problems surface through
    // `parse_row`, which knows the offending line number.
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        // No header and no rows at all.
        return Ok(Vec::new());
    }
    check_headers(&headers)?;

    let mut countries = Vec::new();
    for (index, row) in reader.records().enumerate() {
        // The header occupies line 1; data starts on line 2.
        let line = index + 2;
        let row = row?;
        countries.push(parse_row(&row, line)?);
    }

    info!(count = countries.len(), path = %path.display(), "dataset loaded");
    Ok(countries)
}

fn check_headers(headers: &StringRecord) -> CsvResult<()> {
    let found: Vec<String> = headers.iter().map(normalize).collect();
    if found != EXPECTED_HEADERS {
        return Err(CsvError::invalid_header(
            EXPECTED_HEADERS.join(","),
            headers.iter().collect::<Vec<_>>().join(","),
        ));
    }
    Ok(())
}

fn parse_row(row: &StringRecord, line: usize) -> CsvResult<Country> {
    if row.len() != EXPECTED_HEADERS.len() {
        return Err(CsvError::invalid_row(
            line,
            format!(
                "expected {} fields, found {}",
                EXPECTED_HEADERS.len(),
                row.len()
            ),
        ));
    }

    let name = &row[0];
    let continent = &row[3];
    if normalize(name).is_empty() {
        return Err(CsvError::invalid_row(line, "name must not be blank"));
    }
    if normalize(continent).is_empty() {
        return Err(CsvError::invalid_row(line, "continent must not be blank"));
    }

    let population = parse_count(&row[1], "population", line)?;
    let area = parse_count(&row[2], "area", line)?;
    if area == 0 {
        return Err(CsvError::invalid_row(line, "area must be greater than zero"));
    }

    Ok(Country::new(name, population, area, continent))
}

fn parse_count(field: &str, column: &str, line: usize) -> CsvResult<u64> {
    field.parse::<u64>().map_err(|_| {
        CsvError::invalid_row(
            line,
            format!("{column} {field:?} is not a non-negative integer"),
        )
    })
}
