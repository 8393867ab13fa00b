//! The owned record store and its mutation operations.

use tracing::debug;

use crate::country::Country;
use crate::error::{CoreError, CoreResult};
use crate::normalize::{is_blank, normalize};
use crate::query::{self, NameMatch};
use crate::sort::{self, SortKey};
use crate::stats::{compute_statistics, DatasetStats};

/// A partial update applied by [`Dataset::update_fields`].
///
/// Absent fields are left untouched; an update with no fields present
/// is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldUpdate {
    /// New population, if provided.
    pub population: Option<u64>,
    /// New area, if provided.
    pub area: Option<u64>,
    /// New continent, if provided. Must not be blank.
    pub continent: Option<String>,
}

impl FieldUpdate {
    /// True if no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.population.is_none() && self.area.is_none() && self.continent.is_none()
    }
}

/// The in-memory, insertion-ordered collection of country records.
///
/// A `Dataset` exclusively owns its records. Read paths hand out
/// borrowed slices or freshly allocated copies; query, sort and
/// statistics results never alias the store's entries, so presentation
/// code cannot mutate the store through them. All mutation goes
/// through [`add_or_update`](Self::add_or_update) and
/// [`update_fields`](Self::update_fields), which maintain the
/// invariant that at most one record exists per normalized name.
///
/// The store is single-session: callers must not interleave mutation
/// with reads from another thread. Nothing here blocks, suspends or
/// performs I/O.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Country>,
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records produced by a loader.
    ///
    /// The loader is responsible for field validation; records are
    /// taken as-is.
    #[must_use]
    pub fn from_records(records: Vec<Country>) -> Self {
        Self { records }
    }

    /// Borrows the records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Country] {
        &self.records
    }

    /// Returns an owned copy of all records.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Country> {
        self.records.clone()
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds a record by normalized-name equality.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        let key = normalize(name);
        self.records.iter().find(|c| normalize(&c.name) == key)
    }

    /// Searches records by name. See [`query::search_by_name`].
    pub fn search_by_name(&self, q: &str, mode: NameMatch) -> CoreResult<Vec<Country>> {
        query::search_by_name(&self.records, q, mode)
    }

    /// Filters records by continent. See [`query::filter_by_continent`].
    pub fn filter_by_continent(&self, continent: &str) -> CoreResult<Vec<Country>> {
        query::filter_by_continent(&self.records, continent)
    }

    /// Filters records by population range.
    /// See [`query::filter_by_population_range`].
    pub fn filter_by_population_range(
        &self,
        min: Option<u64>,
        max: Option<u64>,
    ) -> CoreResult<Vec<Country>> {
        query::filter_by_population_range(&self.records, min, max)
    }

    /// Filters records by area range. See [`query::filter_by_area_range`].
    pub fn filter_by_area_range(
        &self,
        min: Option<u64>,
        max: Option<u64>,
    ) -> CoreResult<Vec<Country>> {
        query::filter_by_area_range(&self.records, min, max)
    }

    /// Returns a sorted copy of the records. See [`sort::sort`].
    #[must_use]
    pub fn sorted(&self, key: SortKey, descending: bool) -> Vec<Country> {
        sort::sort(&self.records, key, descending)
    }

    /// Computes aggregate statistics over the current records.
    #[must_use]
    pub fn statistics(&self) -> DatasetStats {
        compute_statistics(&self.records)
    }

    /// Inserts a record, or overwrites the one with the same normalized
    /// name.
    ///
    /// A matching record keeps its stored name spelling and has its
    /// population, area and continent overwritten in place; otherwise a
    /// new record is appended. Returns a copy of the stored record.
    /// Surrounding whitespace on new names and continents is trimmed,
    /// case and accents are preserved.
    ///
    /// # Errors
    ///
    /// Fails if `name` or `continent` is blank. Validation runs before
    /// any mutation, so a rejected call leaves the store unchanged.
    pub fn add_or_update(
        &mut self,
        name: &str,
        population: u64,
        area: u64,
        continent: &str,
    ) -> CoreResult<Country> {
        if is_blank(name) {
            return Err(CoreError::blank_field("name"));
        }
        if is_blank(continent) {
            return Err(CoreError::blank_field("continent"));
        }

        let key = normalize(name);
        match self.records.iter_mut().find(|c| normalize(&c.name) == key) {
            Some(existing) => {
                existing.population = population;
                existing.area = area;
                existing.continent = continent.trim().to_string();
                debug!(name = %existing.name, "overwrote existing record");
                Ok(existing.clone())
            }
            None => {
                let record = Country::new(name.trim(), population, area, continent.trim());
                self.records.push(record.clone());
                debug!(name = %record.name, count = self.records.len(), "appended record");
                Ok(record)
            }
        }
    }

    /// Applies a partial update to the record matching `name`.
    ///
    /// Returns `Ok(None)` when no record matches the normalized name,
    /// an expected outcome for interactive callers rather than an
    /// error.
    /// Otherwise applies only the provided fields and returns a copy of
    /// the updated record.
    ///
    /// # Errors
    ///
    /// Fails if `name` is blank, if the update carries no fields, or if
    /// a provided continent is blank. A failed call leaves the store
    /// unchanged.
    pub fn update_fields(&mut self, name: &str, update: FieldUpdate) -> CoreResult<Option<Country>> {
        if is_blank(name) {
            return Err(CoreError::blank_field("name"));
        }
        if update.is_empty() {
            return Err(CoreError::EmptyUpdate);
        }
        if let Some(continent) = &update.continent {
            if is_blank(continent) {
                return Err(CoreError::blank_field("continent"));
            }
        }

        let key = normalize(name);
        let record = match self.records.iter_mut().find(|c| normalize(&c.name) == key) {
            Some(record) => record,
            None => return Ok(None),
        };

        if let Some(population) = update.population {
            record.population = population;
        }
        if let Some(area) = update.area {
            record.area = area;
        }
        if let Some(continent) = update.continent {
            record.continent = continent.trim().to_string();
        }
        debug!(name = %record.name, "applied field update");
        Ok(Some(record.clone()))
    }
}
