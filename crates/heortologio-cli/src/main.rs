//! `heortologio` CLI — Orthodox movable feasts and name-day lookups from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Orthodox Easter for a year
//! heortologio easter 2024
//!
//! # Every movable observance of a year
//! heortologio feasts 2024
//! heortologio feasts 2024 --json
//!
//! # What is observed on a date
//! heortologio day 2024-05-05
//!
//! # Nameday entries of the name-bearing movable feasts
//! heortologio namedays 2023 --json
//!
//! # Does a contact name denote a registry name? (exit code 0 = yes)
//! heortologio match "Ιωάννη" "Ιωάννης"
//!
//! # Greeklish-tolerant name search, optionally over a static registry file
//! heortologio search vaia --year 2023
//! heortologio search giorgos --year 2023 --registry datanames.json
//! ```

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use std::process;

use heortologio::lookup::{weekday_name, GREEK_MONTHS_GENITIVE};
use heortologio::{
    feast_for_date, find_name, latin_to_greek, names_match, nameday_entries, orthodox_easter,
    DisplayContext, FeastSet, MatchConfig, NamedayEntry,
};

#[derive(Parser)]
#[command(
    name = "heortologio",
    version,
    about = "Orthodox movable-feast dates and Greek name-day matching"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Gregorian date of Orthodox Easter for a year
    Easter { year: i32 },
    /// List every movable observance of a year, in calendar order
    Feasts {
        year: i32,
        /// Emit a JSON array instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Show the movable observance falling on a date, if any
    Day {
        /// Date in YYYY-MM-DD form
        date: String,
    },
    /// Nameday entries for the name-bearing movable feasts of a year
    Namedays {
        year: i32,
        /// Emit a JSON array instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Decide whether two names denote the same given name
    Match {
        candidate: String,
        registry_name: String,
    },
    /// Find where a (possibly Greeklish) name celebrates
    Search {
        query: String,
        /// Year used for the movable entries
        #[arg(long)]
        year: i32,
        /// Path to a static registry JSON file (array of nameday entries)
        #[arg(long)]
        registry: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Easter { year } => {
            let easter = orthodox_easter(year)?;
            println!("{}", format_date(easter));
        }
        Commands::Feasts { year, json } => {
            let set = FeastSet::for_year(year)?;
            if json {
                println!("{}", serde_json::to_string_pretty(set.feasts())?);
            } else {
                for feast in set.iter() {
                    println!("{}  {}", feast.date, feast.name);
                }
            }
        }
        Commands::Day { date } => {
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("invalid date: {} (expected YYYY-MM-DD)", date))?;
            match feast_for_date(date)? {
                Some(name) => println!("{}: {}", format_date(date), name),
                None => println!("{}: no movable feast", format_date(date)),
            }
        }
        Commands::Namedays { year, json } => {
            let set = FeastSet::for_year(year)?;
            let entries = nameday_entries(&set);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in &entries {
                    println!(
                        "{} {} — {} — {}",
                        entry.day,
                        entry.month,
                        entry.celebrations.join(", "),
                        entry.names.join(", ")
                    );
                }
            }
        }
        Commands::Match {
            candidate,
            registry_name,
        } => {
            if names_match(&candidate, &registry_name, &MatchConfig::default()) {
                println!("match");
            } else {
                println!("no match");
                process::exit(1);
            }
        }
        Commands::Search {
            query,
            year,
            registry,
        } => {
            let static_entries = load_registry(registry.as_deref())?;
            let ctx = DisplayContext::new(year);
            let mut hits = find_name(&query, &static_entries, &ctx)?;
            if hits.is_empty() {
                // The query may be Greeklish; retry transliterated.
                hits = find_name(&latin_to_greek(&query), &static_entries, &ctx)?;
            }
            if hits.is_empty() {
                println!("no entries found for '{}'", query);
                process::exit(1);
            }
            for entry in &hits {
                println!(
                    "{} {} — {} — {}",
                    entry.day,
                    entry.month,
                    entry.celebrations.join(", "),
                    entry.names.join(", ")
                );
            }
        }
    }

    Ok(())
}

/// Greek civil rendering: weekday, day, genitive month, year.
fn format_date(date: NaiveDate) -> String {
    format!(
        "{} ({}, {} {} {})",
        date,
        weekday_name(date.weekday()),
        date.day(),
        GREEK_MONTHS_GENITIVE[date.month0() as usize],
        date.year()
    )
}

/// Read a static registry JSON file, or an empty registry when none given.
fn load_registry(path: Option<&str>) -> Result<Vec<NamedayEntry>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read registry file: {}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid registry JSON in {}", path))
        }
        None => Ok(Vec::new()),
    }
}
