//! Benchmark data generation.

use atlas_core::Country;
use rand::seq::SliceRandom;
use rand::Rng;

const CONTINENTS: [&str; 6] = [
    "África",
    "América",
    "Asia",
    "Europa",
    "Oceanía",
    "Antártida",
];

const NAME_SYLLABLES: [&str; 12] = [
    "al", "bar", "cor", "dan", "es", "fra", "gua", "lan", "mar", "nia", "rú", "tán",
];

/// Generates a pronounceable pseudo-name of 2-4 syllables.
pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let syllables = rng.gen_range(2..=4);
    let mut name = String::new();
    for _ in 0..syllables {
        name.push_str(NAME_SYLLABLES.choose(rng).expect("non-empty"));
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => name,
    }
}

/// Generates `count` random country records.
///
/// Names may repeat; benches that need the store invariant should
/// insert through `Dataset::add_or_update`.
pub fn generate_records(count: usize) -> Vec<Country> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            Country::new(
                random_name(&mut rng),
                rng.gen_range(0..2_000_000_000u64),
                rng.gen_range(1..20_000_000u64),
                *CONTINENTS.choose(&mut rng).expect("non-empty"),
            )
        })
        .collect()
}
