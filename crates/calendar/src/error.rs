//! Error types for the daterange-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the daterange-calendar crate.
///
/// Covers construction of calendar days and weekdays from raw parts,
/// parsing of date strings, and arithmetic that would leave the range of
/// representable dates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year/month/day triple does not name a real date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: u32,
        /// The day that was provided.
        day: u32,
    },

    /// Returned when a weekday number is outside the valid range 1..=7.
    #[error("invalid weekday: {weekday} (must be 1..=7, 1 = Monday)")]
    InvalidWeekday {
        /// The invalid weekday number that was provided.
        weekday: u8,
    },

    /// Returned when a string cannot be read as a date or date-time.
    #[error("cannot parse {input:?} as a date (expected YYYY-MM-DD or RFC 3339)")]
    Parse {
        /// The input that failed to parse.
        input: String,
    },

    /// Returned when day or month arithmetic leaves the representable range.
    #[error("date arithmetic out of range: {from} {amount:+} {unit}")]
    OutOfRange {
        /// The date the arithmetic started from.
        from: NaiveDate,
        /// The signed amount that was applied.
        amount: i64,
        /// The unit of `amount` (`"days"` or `"months"`).
        unit: &'static str,
    },
}
