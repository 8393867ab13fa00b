//! Query engine: stateless filters over a dataset snapshot.
//!
//! Every function here is `O(n)`, side-effect-free and returns a newly
//! allocated sequence preserving input order. Text comparisons go
//! through [`normalize`], so accents and case never affect a match.
//!
//! Blank text inputs are rejected with an error rather than silently
//! matching nothing; an interactive caller can tell a typo from an
//! empty result.

use crate::country::Country;
use crate::error::{CoreError, CoreResult};
use crate::normalize::normalize;

/// How [`search_by_name`] matches the query against record names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// Normalized name must equal the normalized query.
    Exact,
    /// Normalized name must contain the normalized query.
    Partial,
}

/// Searches records by name.
///
/// Returns every record whose normalized name equals
/// ([`NameMatch::Exact`]) or contains ([`NameMatch::Partial`]) the
/// normalized query, in input order.
///
/// # Errors
///
/// Fails if the query normalizes to the empty string.
pub fn search_by_name(
    records: &[Country],
    query: &str,
    mode: NameMatch,
) -> CoreResult<Vec<Country>> {
    let q = normalize(query);
    if q.is_empty() {
        return Err(CoreError::blank_field("query"));
    }
    let matches = records
        .iter()
        .filter(|c| {
            let name = normalize(&c.name);
            match mode {
                NameMatch::Exact => name == q,
                NameMatch::Partial => name.contains(&q),
            }
        })
        .cloned()
        .collect();
    Ok(matches)
}

/// Returns the records whose continent equals `continent` under
/// normalization, in input order.
///
/// # Errors
///
/// Fails if `continent` normalizes to the empty string.
pub fn filter_by_continent(records: &[Country], continent: &str) -> CoreResult<Vec<Country>> {
    let wanted = normalize(continent);
    if wanted.is_empty() {
        return Err(CoreError::blank_field("continent"));
    }
    Ok(records
        .iter()
        .filter(|c| normalize(&c.continent) == wanted)
        .cloned()
        .collect())
}

/// Returns the records whose population lies within `[min, max]`,
/// inclusive. An absent bound leaves that side unbounded.
///
/// # Errors
///
/// Fails if both bounds are present and `min > max`.
pub fn filter_by_population_range(
    records: &[Country],
    min: Option<u64>,
    max: Option<u64>,
) -> CoreResult<Vec<Country>> {
    check_bounds(min, max)?;
    Ok(records
        .iter()
        .filter(|c| within(c.population, min, max))
        .cloned()
        .collect())
}

/// Returns the records whose area lies within `[min, max]`, inclusive.
/// Same contract as [`filter_by_population_range`].
///
/// # Errors
///
/// Fails if both bounds are present and `min > max`.
pub fn filter_by_area_range(
    records: &[Country],
    min: Option<u64>,
    max: Option<u64>,
) -> CoreResult<Vec<Country>> {
    check_bounds(min, max)?;
    Ok(records
        .iter()
        .filter(|c| within(c.area, min, max))
        .cloned()
        .collect())
}

fn check_bounds(min: Option<u64>, max: Option<u64>) -> CoreResult<()> {
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(CoreError::inverted_range(lo, hi));
        }
    }
    Ok(())
}

fn within(value: u64, min: Option<u64>, max: Option<u64>) -> bool {
    min.map_or(true, |lo| value >= lo) && max.map_or(true, |hi| value <= hi)
}
