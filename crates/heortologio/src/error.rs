//! Error types for heortologio operations.

use thiserror::Error;

/// First civil year for which the +13-day Julian-to-Gregorian correction
/// used by the Easter computation is valid.
pub const MIN_SUPPORTED_YEAR: i32 = 1900;

/// Last civil year of the correction window.
pub const MAX_SUPPORTED_YEAR: i32 = 2099;

#[derive(Error, Debug)]
pub enum HeortologioError {
    #[error("year {0} is outside the supported range {MIN_SUPPORTED_YEAR}-{MAX_SUPPORTED_YEAR} (the Julian-to-Gregorian correction differs outside this window)")]
    YearOutOfRange(i32),
}

pub type Result<T> = std::result::Result<T, HeortologioError>;
