//! Query surface over the feast registry: Greek calendar name tables and the
//! registry-shaped nameday entries for the name-bearing movable feasts.
//!
//! The month tables are the shared vocabulary with the external static
//! name registry — both sides key entries by `(nominative month name, day)`,
//! so the exact strings matter.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::feasts::{FeastSet, PALM_SUNDAY, PASCHA, THOMAS_SUNDAY};

/// Greek month names, nominative case, January first.
pub const GREEK_MONTHS_NOMINATIVE: [&str; 12] = [
    "Ιανουάριος",
    "Φεβρουάριος",
    "Μάρτιος",
    "Απρίλιος",
    "Μάιος",
    "Ιούνιος",
    "Ιούλιος",
    "Αύγουστος",
    "Σεπτέμβριος",
    "Οκτώβριος",
    "Νοέμβριος",
    "Δεκέμβριος",
];

/// Greek month names, genitive case, for date display ("14 Μαΐου").
pub const GREEK_MONTHS_GENITIVE: [&str; 12] = [
    "Ιανουαρίου",
    "Φεβρουαρίου",
    "Μαρτίου",
    "Απριλίου",
    "Μαΐου",
    "Ιουνίου",
    "Ιουλίου",
    "Αυγούστου",
    "Σεπτεμβρίου",
    "Οκτωβρίου",
    "Νοεμβρίου",
    "Δεκεμβρίου",
];

/// Greek weekday names, Sunday first.
pub const GREEK_WEEKDAYS: [&str; 7] = [
    "Κυριακή",
    "Δευτέρα",
    "Τρίτη",
    "Τετάρτη",
    "Πέμπτη",
    "Παρασκευή",
    "Σάββατο",
];

/// Nominative month name for a zero-based month index (0 = January).
pub fn month_name(index: usize) -> Option<&'static str> {
    GREEK_MONTHS_NOMINATIVE.get(index).copied()
}

/// Zero-based month index for a nominative Greek month name.
pub fn month_index(name: &str) -> Option<usize> {
    GREEK_MONTHS_NOMINATIVE.iter().position(|&m| m == name)
}

/// Greek name of a chrono weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    GREEK_WEEKDAYS[weekday.num_days_from_sunday() as usize]
}

/// One day's nameday record, structurally compatible with the external
/// static registry: `(month, day)` key, the given names celebrated, and the
/// observance name(s) active that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedayEntry {
    pub day: u32,
    /// Nominative month name from [`GREEK_MONTHS_NOMINATIVE`].
    pub month: String,
    /// Registry order, duplicates permitted and meaningful.
    pub names: Vec<String>,
    pub celebrations: Vec<String>,
}

/// Given names tied to Κυριακή των Βαΐων.
pub const PALM_SUNDAY_NAMES: &[&str] = &["Βάια", "Βάγια", "Βαία", "Βάιος", "Δάφνη", "Δάφνης"];

/// Given names tied to Κυριακή του Θωμά.
pub const THOMAS_SUNDAY_NAMES: &[&str] = &["Θωμάς", "Θωμαΐς", "Θωμαή"];

/// Given names tied to Πάσχα.
pub const PASCHA_NAMES: &[&str] = &[
    "Αναστάσιος",
    "Τάσος",
    "Αναστάσης",
    "Ανέστης",
    "Αναστασία",
    "Τασούλα",
    "Νατάσα",
    "Νανά",
    "Τασία",
    "Σία",
    "Τατία",
    "Τάσα",
    "Τέσα",
    "Σάσα",
    "Πασχαλίνα",
    "Λίνα",
    "Πασχαλιά",
    "Πασχάλης",
    "Λάμπρος",
    "Λαμπρινή",
    "Λαμπρίνα",
    "Λίλα",
];

/// Registry-shaped entries for the three name-bearing movable feasts of the
/// set's year, in feast order: Palm Sunday, Thomas Sunday, Easter.
///
/// Stable for repeated calls with the same year.
pub fn nameday_entries(set: &FeastSet) -> Vec<NamedayEntry> {
    [
        (PALM_SUNDAY, PALM_SUNDAY_NAMES),
        (THOMAS_SUNDAY, THOMAS_SUNDAY_NAMES),
        (PASCHA, PASCHA_NAMES),
    ]
    .iter()
    .filter_map(|&(feast, names)| {
        let date = set.date_of(feast)?;
        Some(NamedayEntry {
            day: date.day(),
            month: GREEK_MONTHS_NOMINATIVE[date.month0() as usize].to_string(),
            names: names.iter().map(|n| n.to_string()).collect(),
            celebrations: vec![feast.to_string()],
        })
    })
    .collect()
}

/// Registry-shaped entries for `year`, building the [`FeastSet`] on demand.
///
/// # Errors
/// Returns [`HeortologioError::YearOutOfRange`](crate::HeortologioError::YearOutOfRange)
/// for years outside 1900–2099.
pub fn nameday_entries_for_year(year: i32) -> Result<Vec<NamedayEntry>> {
    Ok(nameday_entries(&FeastSet::for_year(year)?))
}
