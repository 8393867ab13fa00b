//! The country record type.

use serde::{Deserialize, Serialize};

/// A single country record.
///
/// Records are value-like: no identity field and no cross-record
/// references. The name, compared under
/// [`normalize`](crate::normalize::normalize), acts as the natural key
/// inside a [`Dataset`](crate::dataset::Dataset).
///
/// Both numeric fields are unsigned, so "non-negative" holds by
/// construction. Loaders additionally require `area > 0`; see
/// `atlas_csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Country name as loaded or entered, case and accents preserved.
    pub name: String,
    /// Population count.
    pub population: u64,
    /// Surface area in square kilometres.
    pub area: u64,
    /// Continent name, case and accents preserved.
    pub continent: String,
}

impl Country {
    /// Creates a new record.
    pub fn new(
        name: impl Into<String>,
        population: u64,
        area: u64,
        continent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            population,
            area,
            continent: continent.into(),
        }
    }
}
