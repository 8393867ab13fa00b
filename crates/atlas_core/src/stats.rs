//! Aggregate statistics over a dataset snapshot.

use crate::country::Country;

/// Aggregate statistics for a set of country records.
///
/// The [`Default`] value is the explicit empty state reported for an
/// empty input: zero count, no extrema, zero means and an empty
/// continent table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetStats {
    /// Number of records considered.
    pub count: usize,
    /// Record with the highest population; on ties, the first in input
    /// order. Absent for an empty input.
    pub max_population: Option<Country>,
    /// Record with the lowest population; same tie-break rule.
    pub min_population: Option<Country>,
    /// Arithmetic mean of population.
    pub mean_population: f64,
    /// Arithmetic mean of area.
    pub mean_area: f64,
    /// Record count per continent, keyed by the exact continent string
    /// in order of first appearance.
    pub by_continent: Vec<(String, u64)>,
}

impl DatasetStats {
    /// Looks up the count for a continent by its exact string.
    #[must_use]
    pub fn continent_count(&self, continent: &str) -> Option<u64> {
        self.by_continent
            .iter()
            .find(|(name, _)| name == continent)
            .map(|(_, count)| *count)
    }
}

/// Computes statistics over `records` in a single pass.
///
/// Totals accumulate in `u128`, so the means cannot overflow for any
/// realistic record count.
#[must_use]
pub fn compute_statistics(records: &[Country]) -> DatasetStats {
    let Some(first) = records.first() else {
        return DatasetStats::default();
    };

    let mut max = first;
    let mut min = first;
    let mut population_total: u128 = 0;
    let mut area_total: u128 = 0;
    let mut by_continent: Vec<(String, u64)> = Vec::new();

    for record in records {
        if record.population > max.population {
            max = record;
        }
        if record.population < min.population {
            min = record;
        }
        population_total += u128::from(record.population);
        area_total += u128::from(record.area);

        match by_continent
            .iter_mut()
            .find(|(name, _)| *name == record.continent)
        {
            Some((_, count)) => *count += 1,
            None => by_continent.push((record.continent.clone(), 1)),
        }
    }

    let n = records.len() as f64;
    DatasetStats {
        count: records.len(),
        max_population: Some(max.clone()),
        min_population: Some(min.clone()),
        mean_population: population_total as f64 / n,
        mean_area: area_total as f64 / n,
        by_continent,
    }
}
