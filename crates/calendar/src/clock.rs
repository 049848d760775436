//! Sources of "today".

use crate::day::CalendarDay;

/// Supplies the current calendar day.
///
/// Range generation takes its default reference date from a `Clock`
/// instead of reading the process clock, so callers and tests can pin it.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> CalendarDay;
}

/// Reads the local date from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDay {
        CalendarDay::from(chrono::Local::now())
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDay);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDay {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDay {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> CalendarDay {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_day() {
        let d = CalendarDay::new(2020, 1, 17).unwrap();
        assert_eq!(FixedClock(d).today(), d);
    }

    #[test]
    fn system_clock_matches_local_date() {
        let before = CalendarDay::from(chrono::Local::now());
        let today = SystemClock.today();
        let after = CalendarDay::from(chrono::Local::now());
        assert!(before <= today && today <= after);
    }

    #[test]
    fn boxed_and_borrowed() {
        let d = CalendarDay::new(1999, 12, 31).unwrap();
        let boxed: Box<dyn Clock> = Box::new(FixedClock(d));
        assert_eq!(boxed.today(), d);
        assert_eq!((&FixedClock(d)).today(), d);
    }
}
