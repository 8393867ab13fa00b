//! # Atlas CSV
//!
//! Loading and saving Atlas country datasets as delimited text files.
//!
//! This crate provides:
//! - [`load_countries`]: typed, validated loading with tolerant header
//!   matching and line-numbered row errors
//! - [`save_countries`]: atomic write-temp-then-rename persistence
//!
//! Loaded records satisfy the engine's load-time contract (non-blank
//! name and continent, non-negative population, strictly positive
//! area), so `atlas_core` takes them without re-validation.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use reader::{load_countries, EXPECTED_HEADERS};
pub use writer::save_countries;
