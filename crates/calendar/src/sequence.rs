//! Calendar-day sequence generation.

use crate::day::CalendarDay;
use crate::error::CalendarError;

/// Generates a contiguous sequence of calendar days.
///
/// Starting from `start`, produces exactly `n_days` consecutive days by
/// repeatedly advancing to the next day. Month, year and leap-day
/// boundaries are handled by the underlying date arithmetic.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the run would pass the last
/// representable date.
///
/// # Example
///
/// ```
/// use daterange_calendar::{CalendarDay, day_sequence};
///
/// let days = day_sequence(CalendarDay::new(2000, 12, 30)?, 4)?;
/// assert_eq!(days.len(), 4);
/// assert_eq!(days[3], CalendarDay::new(2001, 1, 2)?);
/// # Ok::<(), daterange_calendar::CalendarError>(())
/// ```
pub fn day_sequence(start: CalendarDay, n_days: usize) -> Result<Vec<CalendarDay>, CalendarError> {
    if n_days == 0 {
        return Ok(Vec::new());
    }
    // The last day must exist before the run is allocated.
    let span = i64::try_from(n_days - 1).unwrap_or(i64::MAX);
    start.checked_add_days(span)?;

    let mut days = Vec::with_capacity(n_days);
    days.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current.succ()?;
        days.push(current);
    }
    Ok(days)
}

/// Generates every day from `first` through `last`, inclusive.
///
/// Returns an empty sequence when `last` precedes `first`.
///
/// # Errors
///
/// Propagates [`CalendarError::OutOfRange`] from [`day_sequence`].
pub fn days_inclusive(
    first: CalendarDay,
    last: CalendarDay,
) -> Result<Vec<CalendarDay>, CalendarError> {
    let span = first.days_until(last);
    if span < 0 {
        return Ok(Vec::new());
    }
    day_sequence(first, span as usize + 1)
}

/// Returns `true` if every adjacent pair in `days` is exactly one day apart.
///
/// Empty and single-element slices are trivially contiguous.
pub fn is_contiguous(days: &[CalendarDay]) -> bool {
    days.windows(2).all(|w| w[0].days_until(w[1]) == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(y, m, d).unwrap()
    }

    #[test]
    fn empty() {
        let days = day_sequence(day(2000, 1, 1), 0).unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn single() {
        let start = day(2000, 6, 15);
        let days = day_sequence(start, 1).unwrap();
        assert_eq!(days, vec![start]);
    }

    #[test]
    fn leap_year() {
        let days = day_sequence(day(2000, 1, 1), 366).unwrap();
        assert_eq!(days.len(), 366);
        assert_eq!(days[59], day(2000, 2, 29));
        assert_eq!(*days.last().unwrap(), day(2000, 12, 31));
    }

    #[test]
    fn year_transition() {
        let days = day_sequence(day(2000, 12, 30), 4).unwrap();
        assert_eq!(
            days,
            vec![
                day(2000, 12, 30),
                day(2000, 12, 31),
                day(2001, 1, 1),
                day(2001, 1, 2),
            ]
        );
    }

    #[test]
    fn overflow_at_max() {
        let max = CalendarDay::from(chrono::NaiveDate::MAX);
        assert!(day_sequence(max, 1).is_ok());
        assert!(day_sequence(max, 2).is_err());
    }

    #[test]
    fn unrepresentable_run_fails_before_allocating() {
        let start = day(2000, 1, 1);
        for n in [u32::MAX as usize, usize::MAX] {
            let err = day_sequence(start, n).unwrap_err();
            assert!(matches!(err, CalendarError::OutOfRange { unit: "days", .. }));
        }
    }

    #[test]
    fn inclusive_month() {
        let days = days_inclusive(day(2021, 2, 1), day(2021, 2, 28)).unwrap();
        assert_eq!(days.len(), 28);
        assert_eq!(days[0], day(2021, 2, 1));
        assert_eq!(days[27], day(2021, 2, 28));
    }

    #[test]
    fn inclusive_same_day() {
        let d = day(2021, 2, 1);
        assert_eq!(days_inclusive(d, d).unwrap(), vec![d]);
    }

    #[test]
    fn inclusive_reversed_is_empty() {
        assert!(days_inclusive(day(2021, 2, 2), day(2021, 2, 1)).unwrap().is_empty());
    }

    #[test]
    fn contiguity() {
        assert!(is_contiguous(&[]));
        assert!(is_contiguous(&[day(2021, 1, 1)]));
        assert!(is_contiguous(&day_sequence(day(2021, 1, 1), 40).unwrap()));
        assert!(!is_contiguous(&[day(2021, 1, 1), day(2021, 1, 3)]));
        assert!(!is_contiguous(&[day(2021, 1, 2), day(2021, 1, 1)]));
    }
}
