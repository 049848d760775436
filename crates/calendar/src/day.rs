//! Midnight-aligned calendar day.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::weekday::Weekday;

/// A calendar day, standing for local midnight of a specific date.
///
/// Equality and ordering follow the date. Any wall-clock value converts
/// into a `CalendarDay` by dropping its time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Creates a new `CalendarDay` from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the triple does not name a
    /// real proleptic Gregorian date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the ISO weekday (1 = Monday ..= 7 = Sunday).
    pub fn weekday(self) -> Weekday {
        Weekday::from(self.0.weekday())
    }

    /// Adds `n` days (negative `n` moves backward).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result is not representable.
    pub fn checked_add_days(self, n: i64) -> Result<Self, CalendarError> {
        TimeDelta::try_days(n)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
            .ok_or(CalendarError::OutOfRange {
                from: self.0,
                amount: n,
                unit: "days",
            })
    }

    /// Subtracts `n` days (negative `n` moves forward).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result is not representable.
    pub fn checked_sub_days(self, n: i64) -> Result<Self, CalendarError> {
        let neg = n.checked_neg().ok_or(CalendarError::OutOfRange {
            from: self.0,
            amount: n,
            unit: "days",
        })?;
        self.checked_add_days(neg)
    }

    /// Returns the day after this one.
    pub fn succ(self) -> Result<Self, CalendarError> {
        self.checked_add_days(1)
    }

    /// Returns the day before this one.
    pub fn pred(self) -> Result<Self, CalendarError> {
        self.checked_add_days(-1)
    }

    /// Moves `n` months from this day's month and returns the first day of
    /// the resulting month.
    ///
    /// Anchoring on the 1st sidesteps end-of-month clamping: 31 January plus
    /// one month is 1 February, never 28/29 February.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result is not representable.
    pub fn checked_add_months(self, n: i32) -> Result<Self, CalendarError> {
        let err = CalendarError::OutOfRange {
            from: self.0,
            amount: i64::from(n),
            unit: "months",
        };
        let first = self.start_of_month().0;
        let moved = if n >= 0 {
            first.checked_add_months(Months::new(n.unsigned_abs()))
        } else {
            first.checked_sub_months(Months::new(n.unsigned_abs()))
        };
        moved.map(Self).ok_or(err)
    }

    /// Returns the first day of this day's month.
    pub fn start_of_month(self) -> Self {
        // Day 1 exists in every month chrono can represent.
        Self(self.0 - TimeDelta::days(i64::from(self.0.day0())))
    }

    /// Returns the last day of this day's month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] for the final representable month,
    /// whose successor cannot be computed.
    pub fn end_of_month(self) -> Result<Self, CalendarError> {
        self.checked_add_months(1)?.pred()
    }

    /// Returns the number of days in this day's month (28..=31).
    ///
    /// # Errors
    ///
    /// See [`CalendarDay::end_of_month`].
    pub fn days_in_month(self) -> Result<u32, CalendarError> {
        Ok(self.end_of_month()?.day())
    }

    /// Returns the wall-clock instant at the start of this day (00:00:00).
    pub fn start_of_day(self) -> NaiveDateTime {
        NaiveDateTime::new(self.0, NaiveTime::MIN)
    }

    /// Returns the signed number of days from `self` to `other`.
    pub fn days_until(self, other: CalendarDay) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying calendar-day value.
    pub fn to_naive_date(self) -> NaiveDate {
        self.0
    }

    /// Returns the day as a wall-clock value at midnight.
    pub fn to_wall_clock(self) -> NaiveDateTime {
        self.start_of_day()
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for CalendarDay {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarDay {
    /// Takes the local date of `dt` in its own time zone.
    fn from(dt: DateTime<Tz>) -> Self {
        Self(dt.date_naive())
    }
}

impl From<CalendarDay> for NaiveDate {
    fn from(day: CalendarDay) -> Self {
        day.0
    }
}

impl FromStr for CalendarDay {
    type Err = CalendarError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.f]` or an RFC 3339 timestamp.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(date) = s.parse::<NaiveDate>() {
            return Ok(Self(date));
        }
        if let Ok(dt) = s.parse::<NaiveDateTime>() {
            return Ok(Self::from(dt));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from(dt));
        }
        Err(CalendarError::Parse {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(y, m, d).unwrap()
    }

    #[test]
    fn new_valid() {
        let d = day(2020, 1, 17);
        assert_eq!(d.year(), 2020);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 17);
    }

    #[test]
    fn new_invalid() {
        assert_eq!(
            CalendarDay::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29,
            }
        );
        assert!(CalendarDay::new(2023, 13, 1).is_err());
        assert!(CalendarDay::new(2023, 1, 0).is_err());
    }

    #[test]
    fn weekday_numbers() {
        assert_eq!(day(2023, 1, 9).weekday().get(), 1); // Monday
        assert_eq!(day(2023, 1, 10).weekday().get(), 2); // Tuesday
        assert_eq!(day(2023, 1, 8).weekday().get(), 7); // Sunday
    }

    #[test]
    fn add_days_across_year() {
        assert_eq!(day(2020, 12, 30).checked_add_days(3).unwrap(), day(2021, 1, 2));
        assert_eq!(day(2021, 1, 2).checked_add_days(-3).unwrap(), day(2020, 12, 30));
        assert_eq!(day(2021, 1, 2).checked_sub_days(3).unwrap(), day(2020, 12, 30));
    }

    #[test]
    fn add_days_leap_day() {
        assert_eq!(day(2024, 2, 28).succ().unwrap(), day(2024, 2, 29));
        assert_eq!(day(2023, 2, 28).succ().unwrap(), day(2023, 3, 1));
    }

    #[test]
    fn add_days_overflow() {
        let max = CalendarDay::from(NaiveDate::MAX);
        let err = max.succ().unwrap_err();
        assert!(matches!(err, CalendarError::OutOfRange { unit: "days", .. }));
        assert!(max.checked_add_days(i64::MAX).is_err());
        assert!(max.checked_sub_days(i64::MIN).is_err());
    }

    #[test]
    fn add_months_anchors_first() {
        assert_eq!(day(2020, 1, 31).checked_add_months(1).unwrap(), day(2020, 2, 1));
        assert_eq!(day(2020, 12, 15).checked_add_months(1).unwrap(), day(2021, 1, 1));
        assert_eq!(day(2020, 1, 15).checked_add_months(-1).unwrap(), day(2019, 12, 1));
        assert_eq!(day(2020, 3, 9).checked_add_months(0).unwrap(), day(2020, 3, 1));
    }

    #[test]
    fn add_months_overflow() {
        let max = CalendarDay::from(NaiveDate::MAX);
        assert!(matches!(
            max.checked_add_months(1).unwrap_err(),
            CalendarError::OutOfRange { unit: "months", .. }
        ));
    }

    #[test]
    fn month_bounds() {
        let d = day(2024, 2, 10);
        assert_eq!(d.start_of_month(), day(2024, 2, 1));
        assert_eq!(d.end_of_month().unwrap(), day(2024, 2, 29));
        assert_eq!(d.days_in_month().unwrap(), 29);
        assert_eq!(day(2023, 2, 10).days_in_month().unwrap(), 28);
        assert_eq!(day(2023, 12, 31).end_of_month().unwrap(), day(2023, 12, 31));
    }

    #[test]
    fn start_of_day_is_midnight() {
        let dt = day(2020, 1, 17).start_of_day();
        assert_eq!(dt.to_string(), "2020-01-17 00:00:00");
        assert_eq!(day(2020, 1, 17).to_wall_clock(), dt);
    }

    #[test]
    fn from_wall_clock_truncates() {
        let dt = NaiveDate::from_ymd_opt(2020, 1, 17)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(CalendarDay::from(dt), day(2020, 1, 17));
    }

    #[test]
    fn from_zoned_uses_local_date() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let dt = tz.with_ymd_and_hms(2020, 1, 17, 1, 0, 0).unwrap();
        assert_eq!(CalendarDay::from(dt), day(2020, 1, 17));
    }

    #[test]
    fn parse_forms() {
        assert_eq!("2020-01-17".parse::<CalendarDay>().unwrap(), day(2020, 1, 17));
        assert_eq!(
            "2020-01-17T18:30:00".parse::<CalendarDay>().unwrap(),
            day(2020, 1, 17)
        );
        assert_eq!(
            "2020-01-17T18:30:00-05:00".parse::<CalendarDay>().unwrap(),
            day(2020, 1, 17)
        );
        assert_eq!(" 2020-01-17 ".parse::<CalendarDay>().unwrap(), day(2020, 1, 17));
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(
            "2020-02-30".parse::<CalendarDay>().unwrap_err(),
            CalendarError::Parse {
                input: "2020-02-30".to_string()
            }
        );
        assert!("".parse::<CalendarDay>().is_err());
        assert!("17/01/2020".parse::<CalendarDay>().is_err());
    }

    #[test]
    fn display_iso() {
        assert_eq!(day(2020, 1, 7).to_string(), "2020-01-07");
    }

    #[test]
    fn days_until() {
        assert_eq!(day(2020, 1, 1).days_until(day(2020, 2, 1)), 31);
        assert_eq!(day(2020, 2, 1).days_until(day(2020, 1, 1)), -31);
    }

    #[test]
    fn serde_transparent() {
        let json = serde_json::to_string(&day(2020, 1, 7)).unwrap();
        assert_eq!(json, "\"2020-01-07\"");
        let back: CalendarDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, day(2020, 1, 7));
    }

    #[test]
    fn ordering() {
        assert!(day(2019, 12, 31) < day(2020, 1, 1));
        assert!(day(2020, 1, 2) > day(2020, 1, 1));
    }
}
