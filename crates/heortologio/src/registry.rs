//! Merge surface between the external static name registry and the computed
//! movable entries.
//!
//! The static day-of-year registry is supplied by the caller (it is external
//! data, keyed by nominative month name and day). This module answers the
//! two questions the display layer asks: "where does this name celebrate?"
//! and "what is observed on this day?" — in both cases merging static and
//! movable entries and tagging each hit with any movable feast that falls on
//! its date.

use chrono::NaiveDate;

use crate::error::Result;
use crate::feasts::FeastSet;
use crate::lookup::{month_index, nameday_entries, NamedayEntry};
use crate::matcher::MatchConfig;
use crate::normalize::normalize;

/// Explicit per-call configuration: the year every computation refers to and
/// the matcher thresholds in effect. Threaded into year-sensitive calls
/// instead of living in ambient global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContext {
    pub selected_year: i32,
    pub match_config: MatchConfig,
}

impl DisplayContext {
    pub fn new(selected_year: i32) -> Self {
        DisplayContext {
            selected_year,
            match_config: MatchConfig::default(),
        }
    }
}

/// Calendar date of an entry within the context year, when its month name is
/// known and the day is valid for that month.
fn entry_date(entry: &NamedayEntry, year: i32) -> Option<NaiveDate> {
    let month = month_index(&entry.month)? as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, entry.day)
}

/// Add the movable feast falling on the entry's date to its celebrations,
/// unless it is already listed. Entries with unknown month names or invalid
/// days are left untouched.
fn augment_with_movable_feast(entry: &mut NamedayEntry, set: &FeastSet) {
    let Some(date) = entry_date(entry, set.year()) else {
        return;
    };
    if let Some(feast) = set.feast_on(date) {
        if !entry.celebrations.iter().any(|c| c == feast) {
            entry.celebrations.push(feast.to_string());
        }
    }
}

/// Find every calendar entry — static or movable — carrying a given name
/// that normalizes exactly to `query`, for the context year.
///
/// Each hit's celebrations are augmented with the movable feast of its date.
/// An empty or whitespace-only query yields no hits, never an error.
///
/// # Errors
/// Returns [`HeortologioError::YearOutOfRange`](crate::HeortologioError::YearOutOfRange)
/// when the context year is outside 1900–2099.
pub fn find_name(
    query: &str,
    static_entries: &[NamedayEntry],
    ctx: &DisplayContext,
) -> Result<Vec<NamedayEntry>> {
    let q = normalize(query);
    if q.is_empty() {
        return Ok(Vec::new());
    }

    let set = FeastSet::for_year(ctx.selected_year)?;
    let movable = nameday_entries(&set);

    let mut found: Vec<NamedayEntry> = static_entries
        .iter()
        .chain(movable.iter())
        .filter(|entry| entry.names.iter().any(|n| normalize(n) == q))
        .cloned()
        .collect();

    for entry in &mut found {
        augment_with_movable_feast(entry, &set);
    }

    Ok(found)
}

/// Everything observed on one `(month, day)` of the context year: the static
/// entries for that key, the movable nameday entries landing on it, each
/// augmented with the movable feast of the date.
///
/// `month` is the zero-based month index matching the month-name tables.
///
/// # Errors
/// Returns [`HeortologioError::YearOutOfRange`](crate::HeortologioError::YearOutOfRange)
/// when the context year is outside 1900–2099.
pub fn entries_for_day(
    static_entries: &[NamedayEntry],
    ctx: &DisplayContext,
    month: usize,
    day: u32,
) -> Result<Vec<NamedayEntry>> {
    let set = FeastSet::for_year(ctx.selected_year)?;
    let movable = nameday_entries(&set);

    let mut found: Vec<NamedayEntry> = static_entries
        .iter()
        .chain(movable.iter())
        .filter(|entry| entry.day == day && month_index(&entry.month) == Some(month))
        .cloned()
        .collect();

    for entry in &mut found {
        augment_with_movable_feast(entry, &set);
    }

    Ok(found)
}
