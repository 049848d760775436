//! Caller-supplied options for range generation.

use daterange_calendar::CalendarDay;
use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::kind::RangeKind;
use crate::validate::{validate_day_count, validate_offset, validate_ref_weekday};

/// Optional overrides for a generator call.
///
/// Every field left as `None` falls back to its default: today's date
/// (from the generator's clock), Monday, zero offsets and a single day.
/// A field the chosen range kind does not read is rejected rather than
/// silently ignored.
///
/// # Example
///
/// ```
/// use daterange_calendar::CalendarDay;
/// use daterange_range::{RangeKind, RangeOptions};
///
/// let options = RangeOptions::new()
///     .with_ref_date(CalendarDay::new(2023, 1, 10)?)
///     .with_ref_weekday(7)
///     .with_end_offset(1);
///
/// assert!(options.validate(RangeKind::Week).is_ok());
/// assert!(options.validate(RangeKind::MonthExact).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ref_date: Option<CalendarDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ref_weekday: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_offset: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_offset: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    day_count: Option<u32>,
}

impl RangeOptions {
    /// Creates an empty option set; every field takes its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reference date.
    pub fn with_ref_date(mut self, ref_date: impl Into<CalendarDay>) -> Self {
        self.ref_date = Some(ref_date.into());
        self
    }

    /// Sets the reference weekday (1 = Monday ..= 7 = Sunday).
    pub fn with_ref_weekday(mut self, ref_weekday: u8) -> Self {
        self.ref_weekday = Some(ref_weekday);
        self
    }

    /// Sets the start offset in days.
    pub fn with_start_offset(mut self, start_offset: i32) -> Self {
        self.start_offset = Some(start_offset);
        self
    }

    /// Sets the end offset in days.
    pub fn with_end_offset(mut self, end_offset: i32) -> Self {
        self.end_offset = Some(end_offset);
        self
    }

    /// Sets the number of days in a day-run range.
    pub fn with_day_count(mut self, day_count: u32) -> Self {
        self.day_count = Some(day_count);
        self
    }

    /// Returns the reference date, if set.
    pub fn ref_date(&self) -> Option<CalendarDay> {
        self.ref_date
    }

    /// Returns the reference weekday, if set.
    pub fn ref_weekday(&self) -> Option<u8> {
        self.ref_weekday
    }

    /// Returns the start offset, if set.
    pub fn start_offset(&self) -> Option<i32> {
        self.start_offset
    }

    /// Returns the end offset, if set.
    pub fn end_offset(&self) -> Option<i32> {
        self.end_offset
    }

    /// Returns the day count, if set.
    pub fn day_count(&self) -> Option<u32> {
        self.day_count
    }

    /// Validates the fields that are present against `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidParameter`] for the first field that is
    /// malformed or that `kind` does not consume.
    pub fn validate(&self, kind: RangeKind) -> Result<(), RangeError> {
        if let Some(weekday) = self.ref_weekday {
            if !kind.uses_weekday() {
                return Err(unused("ref_weekday", weekday, kind));
            }
            validate_ref_weekday(weekday)?;
        }
        if let Some(offset) = self.start_offset {
            validate_offset("start_offset", offset)?;
        }
        if let Some(offset) = self.end_offset {
            validate_offset("end_offset", offset)?;
        }
        if let Some(count) = self.day_count {
            if !kind.uses_day_count() {
                return Err(unused("day_count", count, kind));
            }
            validate_day_count(count)?;
        }
        Ok(())
    }
}

fn unused(parameter: &'static str, value: impl ToString, kind: RangeKind) -> RangeError {
    RangeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        expected: format!("no value ({kind} ranges do not read it)"),
        hint: "drop the field or choose a range kind that uses it",
    }
}
