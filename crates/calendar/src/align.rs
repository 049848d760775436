//! Week and month boundary alignment.

use crate::day::CalendarDay;
use crate::error::CalendarError;
use crate::weekday::Weekday;

/// Returns the latest day on or before `day` whose weekday is `anchor`.
///
/// Steps backward one day at a time, so at most six steps are taken.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the walk runs past the first
/// representable date.
///
/// # Examples
///
/// ```
/// use daterange_calendar::{CalendarDay, Weekday, align_week_start};
///
/// // 2023-01-10 is a Tuesday; the Sunday on or before it is 2023-01-08.
/// let start = align_week_start(CalendarDay::new(2023, 1, 10)?, Weekday::SUNDAY)?;
/// assert_eq!(start, CalendarDay::new(2023, 1, 8)?);
/// # Ok::<(), daterange_calendar::CalendarError>(())
/// ```
pub fn align_week_start(day: CalendarDay, anchor: Weekday) -> Result<CalendarDay, CalendarError> {
    let mut current = day;
    while current.weekday() != anchor {
        current = current.pred()?;
    }
    Ok(current)
}

/// Returns the earliest day on or after `day` that closes a week anchored
/// on `anchor`, i.e. whose weekday is `anchor.pred()`.
///
/// Steps forward one day at a time, so at most six steps are taken.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the walk runs past the last
/// representable date.
pub fn align_week_end(day: CalendarDay, anchor: Weekday) -> Result<CalendarDay, CalendarError> {
    let closing = anchor.pred();
    let mut current = day;
    while current.weekday() != closing {
        current = current.succ()?;
    }
    Ok(current)
}

/// Returns the first and last day of the month containing `day`.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] for the final representable month.
pub fn month_bounds(day: CalendarDay) -> Result<(CalendarDay, CalendarDay), CalendarError> {
    Ok((day.start_of_month(), day.end_of_month()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(y, m, d).unwrap()
    }

    fn wd(n: u8) -> Weekday {
        Weekday::new(n).unwrap()
    }

    #[test]
    fn week_start_same_day() {
        // 2023-01-09 is a Monday
        assert_eq!(align_week_start(day(2023, 1, 9), wd(1)).unwrap(), day(2023, 1, 9));
    }

    #[test]
    fn week_start_steps_back() {
        // Tuesday 2023-01-10 -> Monday 2023-01-09
        assert_eq!(align_week_start(day(2023, 1, 10), wd(1)).unwrap(), day(2023, 1, 9));
        // Tuesday 2023-01-10 -> Wednesday 2023-01-04
        assert_eq!(align_week_start(day(2023, 1, 10), wd(3)).unwrap(), day(2023, 1, 4));
    }

    #[test]
    fn week_start_crosses_year() {
        // Sunday 2023-01-01 with Monday anchor -> 2022-12-26
        assert_eq!(align_week_start(day(2023, 1, 1), wd(1)).unwrap(), day(2022, 12, 26));
    }

    #[test]
    fn week_start_all_anchors_within_six_days() {
        let d = day(2024, 6, 15);
        for n in 1..=7u8 {
            let start = align_week_start(d, wd(n)).unwrap();
            assert_eq!(start.weekday().get(), n);
            let back = start.days_until(d);
            assert!((0..=6).contains(&back), "anchor {n}: {back} days back");
        }
    }

    #[test]
    fn week_end_same_day() {
        // Sunday 2023-01-08 closes a Monday-anchored week
        assert_eq!(align_week_end(day(2023, 1, 8), wd(1)).unwrap(), day(2023, 1, 8));
    }

    #[test]
    fn week_end_steps_forward() {
        // Tuesday 2023-01-31 with Monday anchor -> Sunday 2023-02-05
        assert_eq!(align_week_end(day(2023, 1, 31), wd(1)).unwrap(), day(2023, 2, 5));
        // Sunday anchor closes on Saturday
        assert_eq!(align_week_end(day(2023, 1, 31), wd(7)).unwrap(), day(2023, 2, 4));
    }

    #[test]
    fn month_bounds_regular() {
        assert_eq!(
            month_bounds(day(2020, 1, 17)).unwrap(),
            (day(2020, 1, 1), day(2020, 1, 31))
        );
        assert_eq!(
            month_bounds(day(2021, 4, 30)).unwrap(),
            (day(2021, 4, 1), day(2021, 4, 30))
        );
    }

    #[test]
    fn month_bounds_february() {
        assert_eq!(
            month_bounds(day(2020, 2, 1)).unwrap(),
            (day(2020, 2, 1), day(2020, 2, 29))
        );
        assert_eq!(
            month_bounds(day(1900, 2, 1)).unwrap(),
            (day(1900, 2, 1), day(1900, 2, 28))
        );
    }
}
