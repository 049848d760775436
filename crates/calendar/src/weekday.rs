//! ISO weekday newtype (1 = Monday ..= 7 = Sunday).

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// ISO weekday number, 1 (Monday) through 7 (Sunday).
///
/// Used as the anchor for week-aligned ranges: a week starting on
/// `Weekday::SUNDAY` runs Sunday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weekday(u8);

impl Weekday {
    /// Monday, the default range anchor.
    pub const MONDAY: Weekday = Weekday(1);
    /// Sunday.
    pub const SUNDAY: Weekday = Weekday(7);

    /// Creates a new `Weekday`, validating that `n` is in 1..=7.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekday`] if `n` is 0 or greater than 7.
    pub fn new(n: u8) -> Result<Self, CalendarError> {
        if (1..=7).contains(&n) {
            Ok(Self(n))
        } else {
            Err(CalendarError::InvalidWeekday { weekday: n })
        }
    }

    /// Returns the inner weekday number (1..=7).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the weekday before this one, wrapping Monday to Sunday.
    ///
    /// A week anchored on `self` ends on `self.pred()`.
    pub fn pred(self) -> Self {
        if self.0 == 1 { Self(7) } else { Self(self.0 - 1) }
    }
}

impl Default for Weekday {
    fn default() -> Self {
        Self::MONDAY
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(wd: chrono::Weekday) -> Self {
        // number_from_monday is always 1..=7
        Self(wd.number_from_monday() as u8)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<Weekday> for u8 {
    fn from(wd: Weekday) -> Self {
        wd.0
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
