//! Orthodox Easter computation — Meeus' Julian-calendar algorithm with the
//! fixed-day correction that expresses the result as a Gregorian civil date.
//!
//! The computus runs entirely on the Julian calendar; the final +13 days maps
//! the Julian date onto the Gregorian calendar. That correction constant is
//! only valid for civil years 1900–2099, so years outside that window are
//! rejected rather than silently answered wrong.

use chrono::{Duration, NaiveDate};

use crate::error::{HeortologioError, Result, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};

/// Days to add to a Julian-calendar date to obtain its Gregorian civil
/// expression, for years 1900–2099.
const JULIAN_TO_GREGORIAN_DAYS: i64 = 13;

/// Compute the Gregorian civil date of Orthodox Easter for `year`.
///
/// Deterministic and pure; the result always falls on a Sunday between late
/// March and late April (Gregorian) for the supported window.
///
/// # Errors
/// Returns [`HeortologioError::YearOutOfRange`] for years outside 1900–2099.
pub fn orthodox_easter(year: i32) -> Result<NaiveDate> {
    if !(MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        return Err(HeortologioError::YearOutOfRange(year));
    }

    let a = year % 4;
    let b = year % 7;
    let c = year % 19;

    let d = (19 * c + 15) % 30;
    // 2a + 4b - d + 34 is never negative (d <= 29), so plain % is safe.
    let e = (2 * a + 4 * b - d + 34) % 7;

    // The formula's internal epoch starts at March; this yields 3 or 4.
    let month = (d + e + 114) / 31;
    let day = ((d + e + 114) % 31) + 1;

    // In-range years always produce a valid March/April day, so the unwrap
    // in from_ymd_opt can never fire; keep it as an invariant check.
    let julian = NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("computus always yields a valid March or April date");

    Ok(julian + Duration::days(JULIAN_TO_GREGORIAN_DAYS))
}
