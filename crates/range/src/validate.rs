//! Shape checks for range options.
//!
//! Each `validate_*` function returns [`RangeError::InvalidParameter`] on
//! failure. The `is_valid_*` predicates apply the same rules and return a
//! plain `bool`.

use daterange_calendar::{CalendarDay, Weekday};

use crate::error::RangeError;

/// Largest accepted offset magnitude, in days (one hundred Julian years).
pub const MAX_OFFSET_DAYS: i32 = 36_525;

/// Largest accepted day count for a day-run range.
pub const MAX_DAY_COUNT: u32 = MAX_OFFSET_DAYS.unsigned_abs();

/// Parses and validates a reference date given as text.
///
/// Accepts `YYYY-MM-DD`, an ISO date-time, or an RFC 3339 timestamp; the
/// time of day is dropped.
///
/// # Errors
///
/// Returns [`RangeError::InvalidParameter`] if `input` does not name a real date.
pub fn validate_ref_date(input: &str) -> Result<CalendarDay, RangeError> {
    input
        .parse::<CalendarDay>()
        .map_err(|_| RangeError::InvalidParameter {
            parameter: "ref_date",
            value: format!("{input:?}"),
            expected: "a date such as 2024-01-31 or an RFC 3339 timestamp".to_string(),
            hint: "pass a real calendar date",
        })
}

/// Validates a reference weekday number.
///
/// # Errors
///
/// Returns [`RangeError::InvalidParameter`] unless `weekday` is in 1..=7.
pub fn validate_ref_weekday(weekday: u8) -> Result<Weekday, RangeError> {
    Weekday::new(weekday).map_err(|_| RangeError::InvalidParameter {
        parameter: "ref_weekday",
        value: weekday.to_string(),
        expected: "an integer in 1..=7".to_string(),
        hint: "use 1 for Monday through 7 for Sunday",
    })
}

/// Validates a boundary offset.
///
/// Offsets are signed: a positive value widens the range at that side, a
/// negative value narrows it.
///
/// # Errors
///
/// Returns [`RangeError::InvalidParameter`] if `|offset|` exceeds
/// [`MAX_OFFSET_DAYS`].
pub fn validate_offset(parameter: &'static str, offset: i32) -> Result<i32, RangeError> {
    if is_valid_offset(offset) {
        Ok(offset)
    } else {
        Err(RangeError::InvalidParameter {
            parameter,
            value: offset.to_string(),
            expected: format!("an integer in -{MAX_OFFSET_DAYS}..={MAX_OFFSET_DAYS}"),
            hint: "shift the reference date instead of using a huge offset",
        })
    }
}

/// Validates a day count for a day-run range.
///
/// # Errors
///
/// Returns [`RangeError::InvalidParameter`] if `day_count` is zero or
/// exceeds [`MAX_DAY_COUNT`].
pub fn validate_day_count(day_count: u32) -> Result<u32, RangeError> {
    if (1..=MAX_DAY_COUNT).contains(&day_count) {
        Ok(day_count)
    } else {
        Err(RangeError::InvalidParameter {
            parameter: "day_count",
            value: day_count.to_string(),
            expected: format!("an integer in 1..={MAX_DAY_COUNT}"),
            hint: "request at least one day and at most a century of days",
        })
    }
}

/// Returns `true` if `input` parses as a reference date.
pub fn is_valid_ref_date(input: &str) -> bool {
    validate_ref_date(input).is_ok()
}

/// Returns `true` if `weekday` is in 1..=7.
pub fn is_valid_ref_weekday(weekday: u8) -> bool {
    (1..=7).contains(&weekday)
}

/// Returns `true` if `|offset| <= MAX_OFFSET_DAYS`.
pub fn is_valid_offset(offset: i32) -> bool {
    offset.unsigned_abs() <= MAX_OFFSET_DAYS.unsigned_abs()
}
