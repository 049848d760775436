//! Range generators.

use daterange_calendar::{Clock, SystemClock};
use tracing::debug;

use crate::error::RangeError;
use crate::kind::{Provenance, RangeKind};
use crate::navigate::{next_range, previous_range};
use crate::options::RangeOptions;
use crate::range::{DateRange, GeneratedRange, RangeParameters};

/// Produces date ranges, taking the default reference date from a [`Clock`].
///
/// Every call returns a new [`DateRange`]; the generator holds no range
/// state of its own and can be shared freely.
///
/// # Example
///
/// ```
/// use daterange_calendar::{CalendarDay, FixedClock};
/// use daterange_range::RangeGenerator;
///
/// let generator = RangeGenerator::with_clock(FixedClock(CalendarDay::new(2020, 1, 17)?));
///
/// let month = generator.month_exact(None)?;
/// let days = month.days()?;
/// assert_eq!(days.len(), 31);
/// assert_eq!(days[0].to_string(), "2020-01-01");
///
/// let next = generator.next(Some(&month))?;
/// assert_eq!(next.days()?.len(), 29); // February 2020
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RangeGenerator<C = SystemClock> {
    clock: C,
}

impl RangeGenerator<SystemClock> {
    /// Creates a generator that reads today's date from the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> RangeGenerator<C> {
    /// Creates a generator backed by `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// `day_count` consecutive days starting at the reference date.
    ///
    /// Reads `ref_date`, `start_offset`, `end_offset` and `day_count`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidParameter`] for malformed or unused
    /// options and [`RangeError::Calendar`] at the edge of the calendar.
    pub fn days(&self, options: Option<&RangeOptions>) -> Result<DateRange, RangeError> {
        self.generate(RangeKind::Days, options)
    }

    /// Seven days starting on the latest `ref_weekday` on or before the
    /// reference date.
    ///
    /// Reads `ref_date`, `ref_weekday`, `start_offset` and `end_offset`.
    ///
    /// # Errors
    ///
    /// See [`RangeGenerator::days`].
    pub fn week(&self, options: Option<&RangeOptions>) -> Result<DateRange, RangeError> {
        self.generate(RangeKind::Week, options)
    }

    /// Every day of the reference date's month, 1st through last.
    ///
    /// Reads `ref_date`, `start_offset` and `end_offset`.
    ///
    /// # Errors
    ///
    /// See [`RangeGenerator::days`].
    pub fn month_exact(&self, options: Option<&RangeOptions>) -> Result<DateRange, RangeError> {
        self.generate(RangeKind::MonthExact, options)
    }

    /// The reference date's month widened to whole weeks: from the
    /// `ref_weekday` on or before the 1st to the day before the next
    /// `ref_weekday` on or after the last day.
    ///
    /// Reads `ref_date`, `ref_weekday`, `start_offset` and `end_offset`.
    ///
    /// # Errors
    ///
    /// See [`RangeGenerator::days`].
    pub fn month_extended(&self, options: Option<&RangeOptions>) -> Result<DateRange, RangeError> {
        self.generate(RangeKind::MonthExtended, options)
    }

    /// Generates a range of `kind`.
    ///
    /// Options are validated before anything is built, so a failed call
    /// produces no range at all.
    ///
    /// # Errors
    ///
    /// See [`RangeGenerator::days`].
    #[tracing::instrument(level = "debug", skip(self, options))]
    pub fn generate(
        &self,
        kind: RangeKind,
        options: Option<&RangeOptions>,
    ) -> Result<DateRange, RangeError> {
        let defaults = RangeOptions::default();
        let options = options.unwrap_or(&defaults);
        let params = RangeParameters::resolve(kind, options, || self.clock.today())?;
        build(params, Provenance::Fresh)
    }

    /// The range following `range`, with the same kind and options.
    ///
    /// # Errors
    ///
    /// See [`next_range`].
    pub fn next(&self, range: Option<&DateRange>) -> Result<DateRange, RangeError> {
        next_range(range)
    }

    /// The range preceding `range`, with the same kind and options.
    ///
    /// # Errors
    ///
    /// See [`previous_range`].
    pub fn previous(&self, range: Option<&DateRange>) -> Result<DateRange, RangeError> {
        previous_range(range)
    }
}

/// Builds a range from resolved parameters and logs its bounds.
pub(crate) fn build(
    params: RangeParameters,
    provenance: Provenance,
) -> Result<DateRange, RangeError> {
    let range = GeneratedRange::build(params, provenance)?;
    debug!(
        kind = %range.kind(),
        first = %range.first(),
        last = %range.last(),
        len = range.len(),
        ?provenance,
        "range generated"
    );
    Ok(DateRange::Generated(range))
}
