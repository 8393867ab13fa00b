//! # Atlas Core
//!
//! In-memory engine for a dataset of country records: accent- and
//! case-insensitive lookup, filter predicates, stable multi-key
//! sorting, aggregate statistics and upsert-style mutation.
//!
//! This crate provides:
//! - Text normalization for all name and continent comparisons
//! - An owned, insertion-ordered record store with copy-on-read views
//! - Stateless query, sort and statistics functions over snapshots
//! - Upsert and partial-update mutation with eager validation
//!
//! The engine is synchronous and single-threaded: every operation is a
//! finite computation over the current in-memory records, with no I/O
//! and no suspension points. Loading and saving datasets lives in
//! `atlas_csv`; presentation lives in `atlas_cli`.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod country;
pub mod dataset;
pub mod error;
pub mod normalize;
pub mod query;
pub mod sort;
pub mod stats;

pub use country::Country;
pub use dataset::{Dataset, FieldUpdate};
pub use error::{CoreError, CoreResult};
pub use normalize::normalize;
pub use query::{
    filter_by_area_range, filter_by_continent, filter_by_population_range, search_by_name,
    NameMatch,
};
pub use sort::{sort, SortKey};
pub use stats::{compute_statistics, DatasetStats};

/// Crate version, for tooling that reports it.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
