//! End-to-end engine tests and property-based checks.

use atlas_core::{
    compute_statistics, filter_by_population_range, search_by_name, sort, Country, Dataset,
    FieldUpdate, NameMatch, SortKey,
};
use proptest::prelude::*;

fn south_american_trio() -> Vec<Country> {
    vec![
        Country::new("Argentina", 45_000_000, 2_780_400, "América"),
        Country::new("Brasil", 214_000_000, 8_515_770, "América"),
        Country::new("Francia", 67_000_000, 543_940, "Europa"),
    ]
}

#[test]
fn interactive_session_workflow() {
    let mut store = Dataset::from_records(south_american_trio());

    // Accent-free continent filter finds the accented records.
    let america = store.filter_by_continent("america").unwrap();
    let names: Vec<&str> = america.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Argentina", "Brasil"]);

    // Sort by population, descending.
    let by_population = store.sorted("population".parse::<SortKey>().unwrap(), true);
    let names: Vec<&str> = by_population.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Brasil", "Francia", "Argentina"]);

    // Continent counts keep first-appearance order.
    let stats = store.statistics();
    assert_eq!(
        stats.by_continent,
        vec![("América".to_string(), 2), ("Europa".to_string(), 1)]
    );

    // Update through an upper-cased name; area survives.
    let updated = store
        .update_fields(
            "ARGENTINA",
            FieldUpdate {
                population: Some(46_000_000),
                ..FieldUpdate::default()
            },
        )
        .unwrap()
        .expect("Argentina should be found");
    assert_eq!(updated.population, 46_000_000);
    assert_eq!(updated.area, 2_780_400);

    // A name absent from the store reports not-found and changes nothing.
    let before = store.snapshot();
    let missing = store
        .update_fields(
            "Chile",
            FieldUpdate {
                population: Some(19_000_000),
                ..FieldUpdate::default()
            },
        )
        .unwrap();
    assert!(missing.is_none());
    assert_eq!(store.snapshot(), before);

    // Upserting an existing record must not grow the store.
    store
        .add_or_update("brasil", 215_000_000, 8_515_770, "América")
        .unwrap();
    assert_eq!(store.len(), 3);
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-ZÁÉÍÓÚÑ][a-záéíóúñ]{1,11}( [A-Z][a-z]{1,7})?")
        .expect("valid regex")
}

fn continent_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("África".to_string()),
        Just("América".to_string()),
        Just("Asia".to_string()),
        Just("Europa".to_string()),
        Just("Oceanía".to_string()),
    ]
}

fn country_strategy() -> impl Strategy<Value = Country> {
    (
        name_strategy(),
        0u64..2_000_000_000,
        1u64..20_000_000,
        continent_strategy(),
    )
        .prop_map(|(name, population, area, continent)| {
            Country::new(name, population, area, continent)
        })
}

fn records_strategy() -> impl Strategy<Value = Vec<Country>> {
    prop::collection::vec(country_strategy(), 0..24)
}

proptest! {
    #[test]
    fn exact_search_agrees_for_normalized_equal_queries(records in records_strategy()) {
        for record in &records {
            let lowered = record.name.to_lowercase();
            let shouted = record.name.to_uppercase();
            let a = search_by_name(&records, &lowered, NameMatch::Exact).unwrap();
            let b = search_by_name(&records, &shouted, NameMatch::Exact).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert!(a.iter().any(|c| c.name == record.name));
        }
    }

    #[test]
    fn descending_sort_is_the_reversed_comparator(
        records in records_strategy(),
        key in prop_oneof![Just(SortKey::Name), Just(SortKey::Population), Just(SortKey::Area)],
    ) {
        let asc = sort(&records, key, false);
        let desc = sort(&records, key, true);
        // Re-sorting the ascending result with the reversed comparator
        // must agree with sorting the input descending.
        prop_assert_eq!(&sort(&asc, key, true), &desc);
        // Idempotence in both directions.
        prop_assert_eq!(&sort(&asc, key, false), &asc);
        prop_assert_eq!(&sort(&desc, key, true), &desc);
    }

    #[test]
    fn population_filter_is_a_faithful_subset(
        records in records_strategy(),
        min in prop::option::of(0u64..2_000_000_000),
    ) {
        let max = min.map(|lo| lo.saturating_add(500_000_000));
        let hits = filter_by_population_range(&records, min, max).unwrap();
        for hit in &hits {
            prop_assert!(records.contains(hit));
            prop_assert!(min.map_or(true, |lo| hit.population >= lo));
            prop_assert!(max.map_or(true, |hi| hit.population <= hi));
        }
        for record in &records {
            let inside = min.map_or(true, |lo| record.population >= lo)
                && max.map_or(true, |hi| record.population <= hi);
            prop_assert_eq!(inside, hits.contains(record));
        }
    }

    #[test]
    fn statistics_count_and_extrema_are_consistent(records in records_strategy()) {
        let stats = compute_statistics(&records);
        prop_assert_eq!(stats.count, records.len());
        let continent_total: u64 = stats.by_continent.iter().map(|(_, n)| n).sum();
        prop_assert_eq!(continent_total as usize, records.len());
        if let (Some(max), Some(min)) = (&stats.max_population, &stats.min_population) {
            for record in &records {
                prop_assert!(record.population <= max.population);
                prop_assert!(record.population >= min.population);
            }
        } else {
            prop_assert!(records.is_empty());
        }
    }

    #[test]
    fn upsert_never_duplicates_a_normalized_name(
        records in records_strategy(),
        population in 0u64..1_000_000,
        area in 1u64..1_000_000,
    ) {
        let mut store = Dataset::new();
        for record in &records {
            store
                .add_or_update(&record.name, record.population, record.area, &record.continent)
                .unwrap();
        }
        let inserted = store.len();
        for record in &records {
            store
                .add_or_update(&record.name.to_uppercase(), population, area, &record.continent)
                .unwrap();
        }
        prop_assert_eq!(store.len(), inserted);
    }
}
