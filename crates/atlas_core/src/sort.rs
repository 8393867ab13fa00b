//! Stable sorting of dataset snapshots.

use std::str::FromStr;

use crate::country::Country;
use crate::error::CoreError;
use crate::normalize::normalize;

/// Key to order records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Order by name, compared in normalized form.
    Name,
    /// Order by population.
    Population,
    /// Order by area.
    Area,
}

impl SortKey {
    /// Key names accepted by the [`FromStr`] implementation.
    pub const NAMES: [&'static str; 3] = ["name", "population", "area"];
}

impl FromStr for SortKey {
    type Err = CoreError;

    /// Parses a key name. Input goes through
    /// [`normalize`](crate::normalize::normalize) first, so case and
    /// surrounding whitespace are tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "name" => Ok(Self::Name),
            "population" => Ok(Self::Population),
            "area" => Ok(Self::Area),
            _ => Err(CoreError::invalid_sort_key(s)),
        }
    }
}

/// Returns a new sequence with `records` ordered by `key`.
///
/// The sort is stable: records that compare equal keep their input
/// order. `descending` reverses the comparator rather than the sorted
/// output, so ties keep input order in both directions. For
/// [`SortKey::Name`] the comparison uses normalized forms while the
/// returned records keep their original spelling.
#[must_use]
pub fn sort(records: &[Country], key: SortKey, descending: bool) -> Vec<Country> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ord = match key {
            SortKey::Name => normalize(&a.name).cmp(&normalize(&b.name)),
            SortKey::Population => a.population.cmp(&b.population),
            SortKey::Area => a.area.cmp(&b.area),
        };
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
    sorted
}
