//! Atlas CLI
//!
//! Command-line front end for Atlas country datasets.
//!
//! # Commands
//!
//! - `search`, `continent`, `population`, `area` - matching and filtering
//! - `sort`, `stats` - ordered views and aggregates
//! - `add`, `update` - mutations, persisted back to the dataset file
//! - `shell` - interactive menu session

mod commands;
mod table;

use std::path::PathBuf;
use std::process::ExitCode;

use atlas_core::Dataset;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Atlas country dataset tools.
#[derive(Parser)]
#[command(name = "atlas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dataset CSV file
    #[arg(global = true, short, long)]
    dataset: Option<PathBuf>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search records by name
    Search {
        /// Text to match against names, accents and case ignored
        query: String,

        /// Require the whole name to match instead of a substring
        #[arg(short, long)]
        exact: bool,
    },

    /// List the records of one continent
    Continent {
        /// Continent name, accents and case ignored
        name: String,
    },

    /// Filter records by population range
    Population {
        /// Lowest population to keep
        #[arg(long)]
        min: Option<u64>,

        /// Highest population to keep
        #[arg(long)]
        max: Option<u64>,
    },

    /// Filter records by area range
    Area {
        /// Lowest area to keep, in square kilometres
        #[arg(long)]
        min: Option<u64>,

        /// Highest area to keep, in square kilometres
        #[arg(long)]
        max: Option<u64>,
    },

    /// Print records ordered by a key
    Sort {
        /// Sort key: name, population or area
        key: String,

        /// Sort in descending order
        #[arg(short = 'D', long)]
        desc: bool,
    },

    /// Show aggregate statistics
    Stats,

    /// Add a record, or overwrite the record with the same name
    Add {
        /// Country name
        name: String,
        /// Population count
        population: u64,
        /// Area in square kilometres
        area: u64,
        /// Continent name
        continent: String,
    },

    /// Update fields of an existing record
    Update {
        /// Name of the record to update, accents and case ignored
        name: String,

        /// New population
        #[arg(long)]
        population: Option<u64>,

        /// New area in square kilometres
        #[arg(long)]
        area: Option<u64>,

        /// New continent
        #[arg(long)]
        continent: Option<String>,
    },

    /// Interactive menu session over the dataset
    Shell,

    /// Show version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if matches!(cli.command, Commands::Version) {
        println!("Atlas CLI v{}", env!("CARGO_PKG_VERSION"));
        println!("Atlas Core v{}", atlas_core::VERSION);
        return ExitCode::SUCCESS;
    }

    let path = match cli.dataset {
        Some(path) => path,
        None => {
            eprintln!("error: dataset path required (use --dataset)");
            return ExitCode::from(2);
        }
    };
    let mut dataset = match atlas_csv::load_countries(&path) {
        Ok(records) => Dataset::from_records(records),
        Err(err) => {
            eprintln!("error: failed to load {}: {err}", path.display());
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Search { query, exact } => commands::search::run(&dataset, &query, exact),
        Commands::Continent { name } => commands::continent::run(&dataset, &name),
        Commands::Population { min, max } => commands::range::population(&dataset, min, max),
        Commands::Area { min, max } => commands::range::area(&dataset, min, max),
        Commands::Sort { key, desc } => commands::sort::run(&dataset, &key, desc),
        Commands::Stats => commands::stats::run(&dataset),
        Commands::Add {
            name,
            population,
            area,
            continent,
        } => commands::add::run(&mut dataset, &path, &name, population, area, &continent),
        Commands::Update {
            name,
            population,
            area,
            continent,
        } => commands::update::run(&mut dataset, &path, &name, population, area, continent),
        Commands::Shell => commands::shell::run(&mut dataset, &path),
        // Handled above, before the dataset is loaded.
        Commands::Version => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
