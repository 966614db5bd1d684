//! The movable-feast registry — every Orthodox observance whose date is
//! defined relative to Easter, plus the three special-rule entries (a fixed
//! civil date, an Nth-weekday rule, and a name-day with an Easter-dependent
//! deferral).
//!
//! A [`FeastSet`] is built once per civil year and is an immutable value:
//! callers may hold it, share it across threads, and query it freely.
//! Building twice for the same year yields identical results.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::easter::orthodox_easter;
use crate::error::Result;

/// Canonical names referenced elsewhere in the crate.
pub const PALM_SUNDAY: &str = "Κυριακή των Βαΐων";
pub const THOMAS_SUNDAY: &str = "Κυριακή του Θωμά";
pub const PASCHA: &str = "Πάσχα";
pub const MAY_DAY: &str = "Εργατική Πρωτομαγιά";
pub const MOTHERS_DAY: &str = "Γιορτή της Μητέρας";
pub const SAINT_GEORGE: &str = "Άγιος Γεώργιος";

/// The canonical offset table: `(observance name, days relative to Easter)`.
///
/// Insertion order is the registry order — chronological within the year.
/// Two observances intentionally share offset −42; their relative order here
/// (Τυροφάγος first) is the stable tie-break for date lookups and must not
/// be reordered.
pub const EASTER_OFFSETS: &[(&str, i64)] = &[
    ("Τσικνοπέμπτη", -52),
    ("Ψυχοσάββατο", -50),
    ("Κυριακή της Απόκρεω", -49),
    ("Καθαρά Δευτέρα", -48),
    ("Α΄ Χαιρετισμοί", -43),
    ("Τυροφάγος", -42),
    ("Κυριακή της Ορθοδοξίας", -42),
    ("Β΄ Χαιρετισμοί", -36),
    ("Β΄ Κυριακή των Νηστειών", -35),
    ("Γ΄ Χαιρετισμοί", -29),
    ("Κυριακή της Σταυροπροσκυνήσεως", -28),
    ("Δ΄ Χαιρετισμοί", -22),
    ("Δ΄ Κυριακή των Νηστειών", -21),
    ("Ακάθιστος Ύμνος", -15),
    ("Ε΄ Κυριακή των Νηστειών", -14),
    ("Σάββατο του Λαζάρου", -8),
    (PALM_SUNDAY, -7),
    ("Μεγάλη Δευτέρα", -6),
    ("Μεγάλη Τρίτη", -5),
    ("Μεγάλη Τετάρτη", -4),
    ("Μεγάλη Πέμπτη", -3),
    ("Μεγάλη Παρασκευή", -2),
    ("Μεγάλο Σάββατο", -1),
    (PASCHA, 0),
    (THOMAS_SUNDAY, 7),
    ("3η Διακαινησίμου", 10),
    ("Ζωοδόχος Πηγή", 12),
    ("Ανάληψη", 40),
    ("Πεντηκοστή", 50),
    ("Αγίου Πνεύματος", 51),
    ("Αγίων Πάντων", 56),
];

/// A single named observance with its computed date for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovableFeast {
    pub name: &'static str,
    pub date: NaiveDate,
}

/// All movable observances of one civil year, in canonical registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeastSet {
    year: i32,
    easter: NaiveDate,
    feasts: Vec<MovableFeast>,
}

impl FeastSet {
    /// Build the complete feast registry for `year`.
    ///
    /// Offset entries come first (chronological), followed by the three
    /// civil/special entries: Εργατική Πρωτομαγιά (May 1), Γιορτή της
    /// Μητέρας (second Sunday of May), and Άγιος Γεώργιος (April 23, or
    /// Easter Monday when April 23 falls strictly before Easter).
    ///
    /// # Errors
    /// Returns [`HeortologioError::YearOutOfRange`](crate::HeortologioError::YearOutOfRange)
    /// for years outside 1900–2099.
    pub fn for_year(year: i32) -> Result<FeastSet> {
        let easter = orthodox_easter(year)?;

        let mut feasts: Vec<MovableFeast> = EASTER_OFFSETS
            .iter()
            .map(|&(name, offset)| MovableFeast {
                name,
                date: easter + Duration::days(offset),
            })
            .collect();

        feasts.push(MovableFeast {
            name: MAY_DAY,
            date: civil_date(year, 5, 1),
        });
        feasts.push(MovableFeast {
            name: MOTHERS_DAY,
            date: second_sunday_of_may(year),
        });
        feasts.push(MovableFeast {
            name: SAINT_GEORGE,
            date: saint_george_date(year, easter),
        });

        Ok(FeastSet {
            year,
            easter,
            feasts,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Orthodox Easter of this set's year, Gregorian civil date.
    pub fn easter(&self) -> NaiveDate {
        self.easter
    }

    /// All observances in canonical registry order.
    pub fn feasts(&self) -> &[MovableFeast] {
        &self.feasts
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovableFeast> {
        self.feasts.iter()
    }

    /// The observance falling on `date`, if any.
    ///
    /// When two observances share a date (Τυροφάγος and Κυριακή της
    /// Ορθοδοξίας, offset −42), the first in registry order wins.
    pub fn feast_on(&self, date: NaiveDate) -> Option<&'static str> {
        self.feasts
            .iter()
            .find(|f| f.date == date)
            .map(|f| f.name)
    }

    /// The computed date of a canonical observance name, if present.
    pub fn date_of(&self, name: &str) -> Option<NaiveDate> {
        self.feasts.iter().find(|f| f.name == name).map(|f| f.date)
    }
}

/// The observance on `date`, if any — builds the [`FeastSet`] for the date's
/// year on demand.
///
/// # Errors
/// Returns [`HeortologioError::YearOutOfRange`](crate::HeortologioError::YearOutOfRange)
/// when the date's year is outside 1900–2099.
pub fn feast_for_date(date: NaiveDate) -> Result<Option<&'static str>> {
    Ok(FeastSet::for_year(date.year())?.feast_on(date))
}

/// Every movable observance of `year` in canonical registry order, as an
/// owned list.
///
/// # Errors
/// Returns [`HeortologioError::YearOutOfRange`](crate::HeortologioError::YearOutOfRange)
/// for years outside 1900–2099.
pub fn all_feasts_for_year(year: i32) -> Result<Vec<MovableFeast>> {
    Ok(FeastSet::for_year(year)?.feasts)
}

fn civil_date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Only called with fixed in-range month/day pairs.
    NaiveDate::from_ymd_opt(year, month, day).expect("fixed civil date is always valid")
}

/// Second Sunday of May. May has 31 days and therefore always at least four
/// Sundays, so the scan always terminates inside the month.
fn second_sunday_of_may(year: i32) -> NaiveDate {
    let mut sundays = 0;
    for day in 1..=31 {
        let date = civil_date(year, 5, day);
        if date.weekday() == Weekday::Sun {
            sundays += 1;
            if sundays == 2 {
                return date;
            }
        }
    }
    unreachable!("May always contains at least two Sundays")
}

/// Άγιος Γεώργιος: fixed on April 23, unless that falls strictly before
/// Easter — then the observance moves to Easter Monday.
fn saint_george_date(year: i32, easter: NaiveDate) -> NaiveDate {
    let fixed = civil_date(year, 4, 23);
    if fixed < easter {
        easter + Duration::days(1)
    } else {
        fixed
    }
}
