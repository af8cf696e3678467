//! Date and month validation
//!
//! Dates are kept as text in the data file. These checks gate what the user
//! may enter; rows already on disk are never rejected.

use chrono::NaiveDate;

/// Earliest accepted year
pub const MIN_YEAR: i32 = 1900;

/// Latest accepted year
pub const MAX_YEAR: i32 = 3000;

/// Check that `s` is a real calendar date written as `YYYY-MM-DD`
///
/// The year must lie in 1900..=3000. Day ranges follow the Gregorian
/// calendar, including leap years.
///
/// # Examples
/// ```
/// use expense_tracker::models::is_valid_date;
/// assert!(is_valid_date("2024-02-29"));
/// assert!(!is_valid_date("2023-02-29"));
/// assert!(!is_valid_date("2024-2-9"));
/// ```
pub fn is_valid_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return false;
    }

    // All positions checked above, so these slices are ASCII digits
    let (Ok(year), Ok(month), Ok(day)) = (
        s[0..4].parse::<i32>(),
        s[5..7].parse::<u32>(),
        s[8..10].parse::<u32>(),
    ) else {
        return false;
    };

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return false;
    }

    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Check that `s` looks like a `YYYY-MM` month filter
///
/// Only the length and the dash position are checked; the month filter is a
/// plain prefix match against stored dates.
pub fn is_valid_month(s: &str) -> bool {
    s.len() == 7 && s.as_bytes()[4] == b'-'
}
