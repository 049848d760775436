//! Error types for the daterange-range crate.

use daterange_calendar::CalendarError;

/// Error type for all fallible operations in the daterange-range crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeError {
    /// Returned when a required argument was not supplied.
    #[error("missing argument `{parameter}` in {call_site}")]
    MissingArgument {
        /// Name of the omitted parameter.
        parameter: &'static str,
        /// Operation that required it.
        call_site: &'static str,
    },

    /// Returned when an option field fails shape validation.
    #[error("invalid `{parameter}`: {value} (expected {expected}); {hint}")]
    InvalidParameter {
        /// Name of the offending field.
        parameter: &'static str,
        /// The rejected value, rendered for display.
        value: String,
        /// Description of an acceptable value.
        expected: String,
        /// How to fix the call.
        hint: &'static str,
    },

    /// Returned when a value handed to navigation is not a generated range.
    #[error("not a generated date range: {value} ({reason})")]
    InvalidDateRange {
        /// The rejected value, rendered for display.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Returned when navigation is given a range that was never generated.
    #[error("{method} needs a generated range, but the range is empty")]
    EmptyDateRange {
        /// Navigation method that was called.
        method: &'static str,
    },

    /// Returned when a range field is read before any range was generated.
    #[error("cannot read `{field}` before a range has been generated")]
    UninitializedAccess {
        /// The field that was read.
        field: &'static str,
    },

    /// Calendar arithmetic failed, typically at the edge of the representable
    /// date range.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
