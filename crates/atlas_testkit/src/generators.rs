//! Property-based test generators using proptest.
//!
//! Strategies produce realistic country records, including accented
//! names, so properties exercise the normalization paths.

use atlas_core::Country;
use proptest::prelude::*;

/// Strategy for country names: capitalized words with optional accents.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-ZÁÉÍÓÚÑ][a-záéíóúñ]{1,11}( [A-Z][a-z]{1,7}){0,2}")
        .expect("valid regex")
}

/// Strategy for continent names.
pub fn continent_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("África".to_string()),
        Just("América".to_string()),
        Just("Antártida".to_string()),
        Just("Asia".to_string()),
        Just("Europa".to_string()),
        Just("Oceanía".to_string()),
    ]
}

/// Strategy for population counts.
pub fn population_strategy() -> impl Strategy<Value = u64> {
    0u64..2_000_000_000
}

/// Strategy for areas, strictly positive per the load-time rule.
pub fn area_strategy() -> impl Strategy<Value = u64> {
    1u64..20_000_000
}

/// Strategy for whole country records.
pub fn country_strategy() -> impl Strategy<Value = Country> {
    (
        name_strategy(),
        population_strategy(),
        area_strategy(),
        continent_strategy(),
    )
        .prop_map(|(name, population, area, continent)| {
            Country::new(name, population, area, continent)
        })
}

/// Strategy for record vectors of up to `max` entries.
///
/// Names may collide under normalization; callers that need the
/// store's unique-name invariant should insert through
/// `Dataset::add_or_update`.
pub fn records_strategy(max: usize) -> impl Strategy<Value = Vec<Country>> {
    prop::collection::vec(country_strategy(), 0..max)
}
