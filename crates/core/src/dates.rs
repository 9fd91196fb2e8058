use chrono::NaiveDate;

use crate::errors::CoreError;

/// The only date format accepted at the library boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Day-count convention: average Gregorian year including leap days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Parse a `YYYY-MM-DD` date. Anything else is rejected, never defaulted.
///
/// chrono alone accepts unpadded fields, a signed year and surrounding
/// whitespace, so the fixed-width shape is checked first.
pub fn parse_date(text: &str) -> Result<NaiveDate, CoreError> {
    let invalid = || CoreError::InvalidDate(text.to_string());
    if !has_iso_shape(text) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}

/// Exactly ten bytes: four digits, `-`, two digits, `-`, two digits.
fn has_iso_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Elapsed time in years between two dates (negative when `to` is before `from`).
pub fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / DAYS_PER_YEAR
}
