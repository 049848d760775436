//! Generated ranges and the range state value.

use chrono::{NaiveDate, NaiveDateTime};
use daterange_calendar::{
    CalendarDay, Weekday, align_week_end, align_week_start, day_sequence, days_inclusive,
    is_contiguous, month_bounds,
};
use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::kind::{Provenance, RangeKind};
use crate::offset::apply_offsets;
use crate::options::RangeOptions;
use crate::validate::{validate_day_count, validate_offset};

/// The full configuration that produced a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeParameters {
    kind: RangeKind,
    ref_date: CalendarDay,
    ref_weekday: Weekday,
    start_offset: i32,
    end_offset: i32,
    day_count: u32,
}

impl RangeParameters {
    /// Merges validated `options` over the defaults for `kind`.
    ///
    /// `today` is called for the reference date only when `options` has none.
    pub(crate) fn resolve(
        kind: RangeKind,
        options: &RangeOptions,
        today: impl FnOnce() -> CalendarDay,
    ) -> Result<Self, RangeError> {
        options.validate(kind)?;
        let ref_weekday = match options.ref_weekday() {
            Some(n) => Weekday::new(n)?,
            None => Weekday::default(),
        };
        Ok(Self {
            kind,
            ref_date: options.ref_date().unwrap_or_else(today),
            ref_weekday,
            start_offset: options.start_offset().unwrap_or(0),
            end_offset: options.end_offset().unwrap_or(0),
            day_count: options.day_count().unwrap_or(1),
        })
    }

    /// Returns the same parameters anchored on a different reference date.
    pub(crate) fn with_ref_date(&self, ref_date: CalendarDay) -> Self {
        Self {
            ref_date,
            ..self.clone()
        }
    }

    /// Returns the range kind.
    pub fn kind(&self) -> RangeKind {
        self.kind
    }

    /// Returns the reference date.
    pub fn ref_date(&self) -> CalendarDay {
        self.ref_date
    }

    /// Returns the reference weekday. Only week and month-extended ranges
    /// read it; the others carry the default.
    pub fn ref_weekday(&self) -> Weekday {
        self.ref_weekday
    }

    /// Returns the start offset in days.
    pub fn start_offset(&self) -> i32 {
        self.start_offset
    }

    /// Returns the end offset in days.
    pub fn end_offset(&self) -> i32 {
        self.end_offset
    }

    /// Returns the day count. Only day-run ranges read it; the others carry 1.
    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Returns the number of days these parameters produce, when that is
    /// known without walking the calendar.
    ///
    /// Day runs and weeks have a fixed base width; month ranges depend on
    /// the month and return `None`.
    fn fixed_len(&self) -> Option<i64> {
        let base = match self.kind {
            RangeKind::Days => i64::from(self.day_count),
            RangeKind::Week => 7,
            RangeKind::MonthExact | RangeKind::MonthExtended => return None,
        };
        Some(base + i64::from(self.start_offset) + i64::from(self.end_offset))
    }

    /// Builds the base days for the kind, before offsets.
    fn base_days(&self) -> Result<Vec<CalendarDay>, RangeError> {
        let days = match self.kind {
            RangeKind::Days => day_sequence(self.ref_date, self.day_count as usize)?,
            RangeKind::Week => {
                let start = align_week_start(self.ref_date, self.ref_weekday)?;
                day_sequence(start, 7)?
            }
            RangeKind::MonthExact => {
                let (first, last) = month_bounds(self.ref_date)?;
                days_inclusive(first, last)?
            }
            RangeKind::MonthExtended => {
                let (first, last) = month_bounds(self.ref_date)?;
                let start = align_week_start(first, self.ref_weekday)?;
                let end = align_week_end(last, self.ref_weekday)?;
                days_inclusive(start, end)?
            }
        };
        Ok(days)
    }

    /// Builds the final days: the base sequence with offsets applied.
    pub(crate) fn build_days(&self) -> Result<Vec<CalendarDay>, RangeError> {
        apply_offsets(self.base_days()?, self.start_offset, self.end_offset)
    }
}

/// A generated range: its parameters, its days and how it was produced.
///
/// The days are never empty and each is exactly one day after the previous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangeSnapshot")]
pub struct GeneratedRange {
    #[serde(flatten)]
    params: RangeParameters,
    days: Vec<CalendarDay>,
    provenance: Provenance,
}

impl GeneratedRange {
    /// Generates the days described by `params`.
    pub(crate) fn build(params: RangeParameters, provenance: Provenance) -> Result<Self, RangeError> {
        let days = params.build_days()?;
        Ok(Self {
            params,
            days,
            provenance,
        })
    }

    /// Returns the generating parameters.
    pub fn parameters(&self) -> &RangeParameters {
        &self.params
    }

    /// Returns the range kind.
    pub fn kind(&self) -> RangeKind {
        self.params.kind
    }

    /// Returns the reference date.
    pub fn ref_date(&self) -> CalendarDay {
        self.params.ref_date
    }

    /// Returns the reference weekday.
    pub fn ref_weekday(&self) -> Weekday {
        self.params.ref_weekday
    }

    /// Returns the start offset in days.
    pub fn start_offset(&self) -> i32 {
        self.params.start_offset
    }

    /// Returns the end offset in days.
    pub fn end_offset(&self) -> i32 {
        self.params.end_offset
    }

    /// Returns the day count.
    pub fn day_count(&self) -> u32 {
        self.params.day_count
    }

    /// Returns the days of the range in ascending order.
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Returns how the range was produced.
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Returns `true` if the range was produced by stepping forward.
    pub fn produced_by_next(&self) -> bool {
        self.provenance == Provenance::Next
    }

    /// Returns `true` if the range was produced by stepping backward.
    pub fn produced_by_previous(&self) -> bool {
        self.provenance == Provenance::Previous
    }

    /// Returns the number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false`; kept alongside [`GeneratedRange::len`].
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the first day.
    pub fn first(&self) -> CalendarDay {
        self.days[0]
    }

    /// Returns the last day.
    pub fn last(&self) -> CalendarDay {
        self.days[self.days.len() - 1]
    }

    /// Returns `true` if `day` falls inside the range.
    pub fn contains(&self, day: CalendarDay) -> bool {
        self.first() <= day && day <= self.last()
    }

    /// Iterates over the days.
    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDay> {
        self.days.iter()
    }

    /// Exports the days as calendar-day values.
    pub fn to_naive_dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|d| d.to_naive_date()).collect()
    }

    /// Exports the days as wall-clock values at midnight.
    pub fn to_wall_clock(&self) -> Vec<NaiveDateTime> {
        self.days.iter().map(|d| d.to_wall_clock()).collect()
    }
}

impl<'a> IntoIterator for &'a GeneratedRange {
    type Item = &'a CalendarDay;
    type IntoIter = std::slice::Iter<'a, CalendarDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Unchecked wire form of a [`GeneratedRange`].
#[derive(Deserialize)]
struct RangeSnapshot {
    #[serde(flatten)]
    params: RangeParameters,
    days: Vec<CalendarDay>,
    #[serde(default)]
    provenance: Provenance,
}

impl TryFrom<RangeSnapshot> for GeneratedRange {
    type Error = String;

    fn try_from(snapshot: RangeSnapshot) -> Result<Self, Self::Error> {
        let params = snapshot.params;
        validate_day_count(params.day_count).map_err(|e| e.to_string())?;
        validate_offset("start_offset", params.start_offset).map_err(|e| e.to_string())?;
        validate_offset("end_offset", params.end_offset).map_err(|e| e.to_string())?;
        if snapshot.days.is_empty() {
            return Err("range has no days".to_string());
        }
        if !is_contiguous(&snapshot.days) {
            return Err("days are not consecutive".to_string());
        }
        if let Some(len) = params.fixed_len() {
            if len != snapshot.days.len() as i64 {
                return Err(format!(
                    "expected {len} days for a {} range, found {}",
                    params.kind,
                    snapshot.days.len()
                ));
            }
        }
        let expected = params.build_days().map_err(|e| e.to_string())?;
        if expected != snapshot.days {
            return Err(format!(
                "days do not match a {} range for {}",
                params.kind, params.ref_date
            ));
        }
        Ok(Self {
            params,
            days: snapshot.days,
            provenance: snapshot.provenance,
        })
    }
}

/// The state of a range value: either nothing generated yet, or a
/// generated range.
///
/// Generators and navigation always return a new value; a `DateRange` is
/// never changed in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateRange {
    /// No range has been generated.
    #[default]
    Uninitialized,
    /// A generated range.
    Generated(GeneratedRange),
}

impl DateRange {
    /// Creates an empty range value.
    pub fn new() -> Self {
        Self::Uninitialized
    }

    /// Returns `true` if a range has been generated.
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    /// Returns the generated range, if any.
    pub fn as_generated(&self) -> Option<&GeneratedRange> {
        match self {
            Self::Generated(range) => Some(range),
            Self::Uninitialized => None,
        }
    }

    /// Consumes the value and returns the generated range, if any.
    pub fn into_generated(self) -> Option<GeneratedRange> {
        match self {
            Self::Generated(range) => Some(range),
            Self::Uninitialized => None,
        }
    }

    fn require(&self, field: &'static str) -> Result<&GeneratedRange, RangeError> {
        self.as_generated()
            .ok_or(RangeError::UninitializedAccess { field })
    }

    /// Returns the range kind.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::UninitializedAccess`] if nothing was generated.
    pub fn kind(&self) -> Result<RangeKind, RangeError> {
        Ok(self.require("kind")?.kind())
    }

    /// Returns the reference date.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::UninitializedAccess`] if nothing was generated.
    pub fn ref_date(&self) -> Result<CalendarDay, RangeError> {
        Ok(self.require("ref_date")?.ref_date())
    }

    /// Returns the reference weekday.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::UninitializedAccess`] if nothing was generated.
    pub fn ref_weekday(&self) -> Result<Weekday, RangeError> {
        Ok(self.require("ref_weekday")?.ref_weekday())
    }

    /// Returns the start offset.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::UninitializedAccess`] if nothing was generated.
    pub fn start_offset(&self) -> Result<i32, RangeError> {
        Ok(self.require("start_offset")?.start_offset())
    }

    /// Returns the end offset.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::UninitializedAccess`] if nothing was generated.
    pub fn end_offset(&self) -> Result<i32, RangeError> {
        Ok(self.require("end_offset")?.end_offset())
    }

    /// Returns the day count.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::UninitializedAccess`] if nothing was generated.
    pub fn day_count(&self) -> Result<u32, RangeError> {
        Ok(self.require("day_count")?.day_count())
    }

    /// Returns the days.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::UninitializedAccess`] if nothing was generated.
    pub fn days(&self) -> Result<&[CalendarDay], RangeError> {
        Ok(self.require("days")?.days())
    }

    /// Returns whether the range was produced by stepping forward.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::UninitializedAccess`] if nothing was generated.
    pub fn produced_by_next(&self) -> Result<bool, RangeError> {
        Ok(self.require("produced_by_next")?.produced_by_next())
    }

    /// Returns whether the range was produced by stepping backward.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::UninitializedAccess`] if nothing was generated.
    pub fn produced_by_previous(&self) -> Result<bool, RangeError> {
        Ok(self.require("produced_by_previous")?.produced_by_previous())
    }
}

impl From<GeneratedRange> for DateRange {
    fn from(range: GeneratedRange) -> Self {
        Self::Generated(range)
    }
}

impl TryFrom<&serde_json::Value> for DateRange {
    type Error = RangeError;

    /// Reads a range previously serialized from a [`GeneratedRange`].
    ///
    /// The days must be exactly what the embedded parameters generate.
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        GeneratedRange::deserialize(value)
            .map(Self::Generated)
            .map_err(|e| RangeError::InvalidDateRange {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }
}
