//! Aligned table rendering for record listings.

use atlas_core::{Country, DatasetStats};

/// Rows printed before the remainder is elided.
pub const MAX_ROWS: usize = 30;

/// Prints records as an aligned table, at most [`MAX_ROWS`] rows.
pub fn print_countries(records: &[Country]) {
    if records.is_empty() {
        println!("No results.");
        return;
    }

    let name_width = column_width(records.iter().map(|c| c.name.as_str()), "Name");
    let continent_width = column_width(records.iter().map(|c| c.continent.as_str()), "Continent");

    let header = format!(
        "{:<name_width$}  {:>14}  {:>12}  {:<continent_width$}",
        "Name", "Population", "Area", "Continent",
    );
    println!("{header}");
    println!("{}", "-".repeat(header.chars().count()));

    for (index, c) in records.iter().enumerate() {
        if index >= MAX_ROWS {
            println!("... ({} more)", records.len() - MAX_ROWS);
            break;
        }
        println!(
            "{:<name_width$}  {:>14}  {:>12}  {:<continent_width$}",
            c.name,
            group_digits(c.population),
            group_digits(c.area),
            c.continent,
        );
    }
}

/// Prints the statistics summary block.
pub fn print_stats(stats: &DatasetStats) {
    println!("\n> Statistics");
    if stats.count == 0 {
        println!("- No data.");
        return;
    }
    println!("- Records considered: {}", stats.count);
    if let Some(max) = &stats.max_population {
        println!(
            "- Highest population: {} ({})",
            max.name,
            group_digits(max.population)
        );
    }
    if let Some(min) = &stats.min_population {
        println!(
            "- Lowest population: {} ({})",
            min.name,
            group_digits(min.population)
        );
    }
    println!(
        "- Average population: {}",
        group_digits(stats.mean_population.round() as u64)
    );
    println!(
        "- Average area: {} km²",
        group_digits(stats.mean_area.round() as u64)
    );
    println!("- Records per continent:");
    for (continent, count) in &stats.by_continent {
        println!("  * {continent}: {count}");
    }
}

/// Formats a count with thousands separators: `8515770` → `"8,515,770"`.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .chain([header.chars().count()])
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_grouping() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(8_515_770), "8,515,770");
        assert_eq!(group_digits(214_000_000), "214,000,000");
    }

    #[test]
    fn column_width_counts_characters_not_bytes() {
        let width = column_width(["Japón", "Perú"].into_iter(), "Name");
        assert_eq!(width, 5);
    }
}
