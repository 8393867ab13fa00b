//! `shell` subcommand: an interactive menu session over the dataset.
//!
//! Engine errors (blank input, inverted ranges, unknown sort keys) are
//! reported and the menu is shown again; only I/O failures end the
//! session. Mutations mark the session dirty and the user is offered a
//! save on exit.

use std::io::{self, BufRead, Write};
use std::path::Path;

use atlas_core::{Dataset, FieldUpdate, NameMatch, SortKey};

use super::CommandResult;
use crate::table;

const MENU: &str = "\
=== Menu ===
1) Add country
2) Update country
3) Search by name
4) Filter by continent
5) Filter by population range
6) Filter by area range
7) Sort
8) Statistics
9) Save changes
0) Exit";

/// Runs the interactive session on stdin.
pub fn run(dataset: &mut Dataset, path: &Path) -> CommandResult {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    session(dataset, path, &mut input)
}

fn session<R: BufRead>(dataset: &mut Dataset, path: &Path, input: &mut R) -> CommandResult {
    let mut dirty = false;
    loop {
        println!("\n{MENU}");
        let choice = match prompt(input, "Option: ") {
            Ok(choice) => choice,
            // Closed input ends the session like an explicit exit.
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                println!();
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        match choice.trim() {
            "0" => {
                if dirty && confirm(input, "Unsaved changes. Save now? [y/N]: ")? {
                    match atlas_csv::save_countries(path, dataset.records()) {
                        Ok(()) => println!("Changes saved to {}.", path.display()),
                        Err(err) => {
                            println!("Error: {err}");
                            continue;
                        }
                    }
                }
                println!("Bye.");
                return Ok(());
            }
            "9" => match atlas_csv::save_countries(path, dataset.records()) {
                Ok(()) => {
                    dirty = false;
                    println!("Changes saved to {}.", path.display());
                }
                Err(err) => println!("Error: {err}"),
            },
            "1" => {
                if add(dataset, input)? {
                    dirty = true;
                }
            }
            "2" => {
                if update(dataset, input)? {
                    dirty = true;
                }
            }
            "3" => search(dataset, input)?,
            "4" => continent(dataset, input)?,
            "5" => population_range(dataset, input)?,
            "6" => area_range(dataset, input)?,
            "7" => sort_menu(dataset, input)?,
            "8" => table::print_stats(&dataset.statistics()),
            other => println!("Invalid option {other:?}."),
        }
    }
}

fn add<R: BufRead>(dataset: &mut Dataset, input: &mut R) -> io::Result<bool> {
    let name = prompt(input, "Name: ")?;
    let population = match parse_required_u64(&prompt(input, "Population: ")?) {
        Ok(value) => value,
        Err(message) => {
            println!("{message}");
            return Ok(false);
        }
    };
    let area = match parse_required_u64(&prompt(input, "Area (km²): ")?) {
        Ok(value) => value,
        Err(message) => {
            println!("{message}");
            return Ok(false);
        }
    };
    let continent = prompt(input, "Continent: ")?;

    match dataset.add_or_update(&name, population, area, &continent) {
        Ok(record) => {
            println!("Saved {}.", record.name);
            Ok(true)
        }
        Err(err) => {
            println!("Error: {err}");
            Ok(false)
        }
    }
}

fn update<R: BufRead>(dataset: &mut Dataset, input: &mut R) -> io::Result<bool> {
    let name = prompt(input, "Name of the country to update: ")?;
    let population = match parse_optional_u64(&prompt(input, "New population (Enter to skip): ")?) {
        Ok(value) => value,
        Err(message) => {
            println!("{message}");
            return Ok(false);
        }
    };
    let area = match parse_optional_u64(&prompt(input, "New area (km², Enter to skip): ")?) {
        Ok(value) => value,
        Err(message) => {
            println!("{message}");
            return Ok(false);
        }
    };
    let continent_input = prompt(input, "New continent (Enter to skip): ")?;
    let continent = match continent_input.trim() {
        "" => None,
        trimmed => Some(trimmed.to_string()),
    };

    match dataset.update_fields(
        &name,
        FieldUpdate {
            population,
            area,
            continent,
        },
    ) {
        Ok(Some(record)) => {
            println!("Updated {}.", record.name);
            Ok(true)
        }
        Ok(None) => {
            println!("No country with that name (matching ignores accents and case).");
            Ok(false)
        }
        Err(err) => {
            println!("Error: {err}");
            Ok(false)
        }
    }
}

fn search<R: BufRead>(dataset: &Dataset, input: &mut R) -> io::Result<()> {
    let query = prompt(input, "Text to search (accents and case ignored): ")?;
    let exact = confirm(input, "Exact match? [y/N]: ")?;
    let mode = if exact {
        NameMatch::Exact
    } else {
        NameMatch::Partial
    };
    match dataset.search_by_name(&query, mode) {
        Ok(matches) => table::print_countries(&matches),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn continent<R: BufRead>(dataset: &Dataset, input: &mut R) -> io::Result<()> {
    let name = prompt(input, "Continent: ")?;
    match dataset.filter_by_continent(&name) {
        Ok(matches) => table::print_countries(&matches),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn population_range<R: BufRead>(dataset: &Dataset, input: &mut R) -> io::Result<()> {
    let Some((min, max)) = read_range(
        input,
        "Minimum population (Enter to skip): ",
        "Maximum population (Enter to skip): ",
    )?
    else {
        return Ok(());
    };
    match dataset.filter_by_population_range(min, max) {
        Ok(matches) => table::print_countries(&matches),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn area_range<R: BufRead>(dataset: &Dataset, input: &mut R) -> io::Result<()> {
    let Some((min, max)) = read_range(
        input,
        "Minimum area (Enter to skip): ",
        "Maximum area (Enter to skip): ",
    )?
    else {
        return Ok(());
    };
    match dataset.filter_by_area_range(min, max) {
        Ok(matches) => table::print_countries(&matches),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn sort_menu<R: BufRead>(dataset: &Dataset, input: &mut R) -> io::Result<()> {
    let key_input = prompt(input, &format!("Sort by ({}): ", SortKey::NAMES.join(" | ")))?;
    let descending = confirm(input, "Descending? [y/N]: ")?;
    match key_input.parse::<SortKey>() {
        Ok(key) => table::print_countries(&dataset.sorted(key, descending)),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

/// Reads a `[min, max]` pair, Enter skipping either bound. Returns
/// `None` after reporting a parse failure.
fn read_range<R: BufRead>(
    input: &mut R,
    min_message: &str,
    max_message: &str,
) -> io::Result<Option<(Option<u64>, Option<u64>)>> {
    let min = parse_optional_u64(&prompt(input, min_message)?);
    let max = parse_optional_u64(&prompt(input, max_message)?);
    match (min, max) {
        (Ok(min), Ok(max)) => Ok(Some((min, max))),
        _ => {
            println!("Enter whole numbers (or press Enter to skip a bound).");
            Ok(None)
        }
    }
}

fn prompt<R: BufRead>(input: &mut R, message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn confirm<R: BufRead>(input: &mut R, message: &str) -> io::Result<bool> {
    let answer = prompt(input, message)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn parse_required_u64(field: &str) -> Result<u64, String> {
    let trimmed = field.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| format!("Enter a whole non-negative number, got {trimmed:?}."))
}

fn parse_optional_u64(field: &str) -> Result<Option<u64>, String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_required_u64(trimmed).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_testkit::fixtures::{sample_csv, with_dataset_file};
    use std::io::Cursor;

    fn scripted(script: &str) -> Cursor<Vec<u8>> {
        Cursor::new(script.as_bytes().to_vec())
    }

    fn loaded_dataset(path: &Path) -> Dataset {
        Dataset::from_records(atlas_csv::load_countries(path).unwrap())
    }

    #[test]
    fn parse_optional_accepts_empty_and_numbers() {
        assert_eq!(parse_optional_u64(""), Ok(None));
        assert_eq!(parse_optional_u64("  "), Ok(None));
        assert_eq!(parse_optional_u64("42"), Ok(Some(42)));
        assert_eq!(parse_optional_u64(" 1000 "), Ok(Some(1000)));
        assert!(parse_optional_u64("many").is_err());
        assert!(parse_optional_u64("-3").is_err());
    }

    #[test]
    fn add_then_save_then_exit_persists_the_record() {
        with_dataset_file(&sample_csv(), |path| {
            let mut dataset = loaded_dataset(path);
            let mut input = scripted("1\nChile\n19000000\n756102\nAmérica\n9\n0\n");
            session(&mut dataset, path, &mut input).unwrap();

            let reloaded = atlas_csv::load_countries(path).unwrap();
            assert!(reloaded.iter().any(|c| c.name == "Chile"));
        });
    }

    #[test]
    fn exit_without_saving_leaves_the_file_alone() {
        with_dataset_file(&sample_csv(), |path| {
            let before = std::fs::read_to_string(path).unwrap();
            let mut dataset = loaded_dataset(path);
            // Add a record, then exit declining the save offer.
            let mut input = scripted("1\nChile\n19000000\n756102\nAmérica\n0\nn\n");
            session(&mut dataset, path, &mut input).unwrap();

            assert_eq!(std::fs::read_to_string(path).unwrap(), before);
        });
    }

    #[test]
    fn exit_save_offer_accepts_yes() {
        with_dataset_file(&sample_csv(), |path| {
            let mut dataset = loaded_dataset(path);
            let mut input = scripted("1\nChile\n19000000\n756102\nAmérica\n0\ny\n");
            session(&mut dataset, path, &mut input).unwrap();

            let reloaded = atlas_csv::load_countries(path).unwrap();
            assert!(reloaded.iter().any(|c| c.name == "Chile"));
        });
    }

    #[test]
    fn update_of_missing_country_does_not_dirty_the_session() {
        with_dataset_file(&sample_csv(), |path| {
            let before = std::fs::read_to_string(path).unwrap();
            let mut dataset = loaded_dataset(path);
            // Not-found update, then plain exit: no save prompt expected,
            // so the script carries no y/n answer.
            let mut input = scripted("2\nAtlantis\n1000\n\n\n0\n");
            session(&mut dataset, path, &mut input).unwrap();

            assert_eq!(std::fs::read_to_string(path).unwrap(), before);
        });
    }

    #[test]
    fn invalid_numeric_input_cancels_the_operation() {
        with_dataset_file(&sample_csv(), |path| {
            let mut dataset = loaded_dataset(path);
            let before = dataset.snapshot();
            let mut input = scripted("1\nChile\nlots\n0\n");
            session(&mut dataset, path, &mut input).unwrap();

            assert_eq!(dataset.snapshot(), before);
        });
    }

    #[test]
    fn closed_input_ends_the_session() {
        with_dataset_file(&sample_csv(), |path| {
            let mut dataset = loaded_dataset(path);
            let mut input = scripted("");
            session(&mut dataset, path, &mut input).unwrap();
        });
    }

    #[test]
    fn engine_errors_keep_the_session_alive() {
        with_dataset_file(&sample_csv(), |path| {
            let mut dataset = loaded_dataset(path);
            // Blank search, inverted range, bad sort key, then exit.
            let mut input = scripted("3\n   \nn\n5\n100\n10\n7\ndensity\nn\n0\n");
            session(&mut dataset, path, &mut input).unwrap();
        });
    }
}
