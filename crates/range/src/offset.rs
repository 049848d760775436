//! Boundary offsets applied to a base day sequence.

use daterange_calendar::{CalendarDay, days_inclusive};

use crate::error::RangeError;

/// Widens or narrows a contiguous day sequence at each end.
///
/// A positive `start` prepends that many days before the first day; a
/// negative `start` drops that many days from the front. `end` does the
/// same at the back. With both offsets zero the input is returned as is.
///
/// # Errors
///
/// Returns [`RangeError::InvalidParameter`] if `days` is empty or if the
/// offsets would remove every day, and [`RangeError::Calendar`] if widening
/// leaves the representable date range.
///
/// # Example
///
/// ```
/// use daterange_calendar::{CalendarDay, day_sequence};
/// use daterange_range::apply_offsets;
///
/// let base = day_sequence(CalendarDay::new(2024, 3, 4)?, 7)?;
/// let widened = apply_offsets(base, 1, -2)?;
/// assert_eq!(widened.len(), 6);
/// assert_eq!(widened[0], CalendarDay::new(2024, 3, 3)?);
/// assert_eq!(widened[5], CalendarDay::new(2024, 3, 8)?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn apply_offsets(
    days: Vec<CalendarDay>,
    start: i32,
    end: i32,
) -> Result<Vec<CalendarDay>, RangeError> {
    if start == 0 && end == 0 {
        return Ok(days);
    }
    let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
        return Err(RangeError::InvalidParameter {
            parameter: "days",
            value: "[]".to_string(),
            expected: "a non-empty day sequence".to_string(),
            hint: "offsets can only be applied to a generated range",
        });
    };

    let remaining = days.len() as i64 + i64::from(start) + i64::from(end);
    if remaining < 1 {
        return Err(RangeError::InvalidParameter {
            parameter: "start_offset/end_offset",
            value: format!("({start}, {end})"),
            expected: format!("offsets leaving at least one of {} days", days.len()),
            hint: "use smaller negative offsets",
        });
    }

    let new_first = first.checked_sub_days(i64::from(start))?;
    let new_last = last.checked_add_days(i64::from(end))?;
    Ok(days_inclusive(new_first, new_last)?)
}
