//! # heortologio
//!
//! Orthodox movable-feast date engine and Greek name-day matching.
//!
//! For a given civil year the crate computes Orthodox Easter (Julian computus,
//! expressed as a Gregorian date) and derives the full registry of movable
//! observances — the pre-Lenten and Lenten sequences, Holy Week, the
//! post-Paschal feasts, plus the special rules (Εργατική Πρωτομαγιά, the
//! second-Sunday-of-May Γιορτή της Μητέρας, and the Easter-deferred Άγιος
//! Γεώργιος). On top of the date engine sits a fuzzy Greek name matcher that
//! resolves free-text names — accented, case-inflected, compound, or typed in
//! Greeklish — against the day's celebrated names.
//!
//! Everything is a pure, synchronous computation over immutable inputs:
//! no I/O, no shared mutable state, safe to call from any thread.
//!
//! ## Quick start
//!
//! ```rust
//! use heortologio::{orthodox_easter, FeastSet};
//! use chrono::NaiveDate;
//!
//! let easter = orthodox_easter(2024).unwrap();
//! assert_eq!(easter, NaiveDate::from_ymd_opt(2024, 5, 5).unwrap());
//!
//! let set = FeastSet::for_year(2024).unwrap();
//! assert_eq!(set.feast_on(easter), Some("Πάσχα"));
//! ```
//!
//! ## Modules
//!
//! - [`easter`] — Orthodox Easter computus (1900–2099)
//! - [`feasts`] — the movable-feast registry ([`FeastSet`])
//! - [`lookup`] — month/weekday name tables and nameday entries
//! - [`normalize`] — name canonicalization and Greek↔Latin transliteration
//! - [`matcher`] — fuzzy name matching and contact search
//! - [`registry`] — merging static and movable calendar entries
//! - [`schema`] — close-group membership with change notification
//! - [`error`] — error types

pub mod easter;
pub mod error;
pub mod feasts;
pub mod lookup;
pub mod matcher;
pub mod normalize;
pub mod registry;
pub mod schema;

pub use easter::orthodox_easter;
pub use error::{HeortologioError, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};
pub use feasts::{all_feasts_for_year, feast_for_date, FeastSet, MovableFeast};
pub use lookup::{nameday_entries, nameday_entries_for_year, NamedayEntry};
pub use matcher::{contacts_for_nameday, names_match, search_contacts, ContactCard, MatchConfig};
pub use normalize::{greek_to_latin, latin_to_greek, normalize};
pub use registry::{entries_for_day, find_name, DisplayContext};
pub use schema::{members_celebrating, Schema, SchemaEvent, SchemaStore};
