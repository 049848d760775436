//! Stepping from one range to its neighbour of the same shape.

use daterange_calendar::CalendarDay;

use crate::error::RangeError;
use crate::generate::build;
use crate::kind::{Provenance, RangeKind};
use crate::range::{DateRange, GeneratedRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

impl Direction {
    fn method(self) -> &'static str {
        match self {
            Self::Next => "next_range",
            Self::Previous => "previous_range",
        }
    }

    fn sign(self) -> i64 {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }

    fn provenance(self) -> Provenance {
        match self {
            Self::Next => Provenance::Next,
            Self::Previous => Provenance::Previous,
        }
    }
}

/// Returns the range that follows `range`.
///
/// The new range has the same kind, weekday, offsets and day count; only
/// the reference date moves:
///
/// | kind | new reference date |
/// |------|--------------------|
/// | days | reference + `day_count` days |
/// | week | reference + 7 days |
/// | month (exact or extended) | 1st of the following month |
///
/// The result is marked as produced by `next`.
///
/// # Errors
///
/// - [`RangeError::MissingArgument`] if `range` is `None`.
/// - [`RangeError::EmptyDateRange`] if `range` was never generated.
/// - [`RangeError::Calendar`] at the edge of the representable calendar.
pub fn next_range(range: Option<&DateRange>) -> Result<DateRange, RangeError> {
    shift(range, Direction::Next)
}

/// Returns the range that precedes `range`.
///
/// Mirror image of [`next_range`]; the result is marked as produced by
/// `previous`.
///
/// # Errors
///
/// See [`next_range`].
pub fn previous_range(range: Option<&DateRange>) -> Result<DateRange, RangeError> {
    shift(range, Direction::Previous)
}

#[tracing::instrument(level = "debug", skip(range))]
fn shift(range: Option<&DateRange>, direction: Direction) -> Result<DateRange, RangeError> {
    let range = range.ok_or(RangeError::MissingArgument {
        parameter: "range",
        call_site: direction.method(),
    })?;
    let current = range.as_generated().ok_or(RangeError::EmptyDateRange {
        method: direction.method(),
    })?;
    let ref_date = shifted_ref_date(current, direction)?;
    build(
        current.parameters().with_ref_date(ref_date),
        direction.provenance(),
    )
}

fn shifted_ref_date(
    range: &GeneratedRange,
    direction: Direction,
) -> Result<CalendarDay, RangeError> {
    let sign = direction.sign();
    let ref_date = range.ref_date();
    let moved = match range.kind() {
        RangeKind::Days => ref_date.checked_add_days(sign * i64::from(range.day_count()))?,
        RangeKind::Week => ref_date.checked_add_days(sign * 7)?,
        RangeKind::MonthExact | RangeKind::MonthExtended => {
            ref_date.checked_add_months(sign as i32)?
        }
    };
    Ok(moved)
}
