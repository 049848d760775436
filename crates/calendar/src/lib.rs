//! # daterange-calendar
//!
//! Calendar-day arithmetic for range generation.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate / NaiveDateTime / DateTime"] -->|"From"| B["CalendarDay"]
//!     S["&str"] -->|"parse()"| B
//!     B -->|".weekday()"| W["Weekday (1..=7)"]
//!     B -->|"align_week_start()"| B
//!     B -->|"month_bounds()"| M["(first, last)"]
//!     B -->|"day_sequence()"| D["Vec of CalendarDay"]
//!     K["Clock"] -->|".today()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use daterange_calendar::{CalendarDay, Weekday, align_week_start, day_sequence, month_bounds};
//!
//! let reference: CalendarDay = "2023-01-10".parse()?;
//! assert_eq!(reference.weekday().get(), 2); // Tuesday
//!
//! // Sunday on or before the reference
//! let start = align_week_start(reference, Weekday::SUNDAY)?;
//! let week = day_sequence(start, 7)?;
//! assert_eq!(week[0].to_string(), "2023-01-08");
//!
//! let (first, last) = month_bounds(reference)?;
//! assert_eq!((first.day(), last.day()), (1, 31));
//! # Ok::<(), daterange_calendar::CalendarError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `day` | Midnight-aligned calendar day |
//! | `weekday` | ISO weekday newtype |
//! | `align` | Week and month boundary alignment |
//! | `sequence` | Contiguous day sequences |
//! | `clock` | Explicit sources of "today" |
//! | `error` | Error types |

mod align;
mod clock;
mod day;
mod error;
mod sequence;
mod weekday;

pub use align::{align_week_end, align_week_start, month_bounds};
pub use clock::{Clock, FixedClock, SystemClock};
pub use day::CalendarDay;
pub use error::CalendarError;
pub use sequence::{day_sequence, days_inclusive, is_contiguous};
pub use weekday::Weekday;
