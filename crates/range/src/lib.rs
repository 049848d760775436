//! # daterange-range
//!
//! Day-run, week and month ranges with aligned boundaries, signed offsets
//! and next/previous navigation.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     O["RangeOptions"] -->|"validate()"| P["RangeParameters"]
//!     K["Clock"] -->|"default ref_date"| P
//!     P -->|"base days"| B["Vec of CalendarDay"]
//!     B -->|"apply_offsets()"| G["GeneratedRange"]
//!     G --> R["DateRange::Generated"]
//!     R -->|"next_range() / previous_range()"| R
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use daterange_calendar::{CalendarDay, FixedClock};
//! use daterange_range::{RangeGenerator, RangeOptions};
//!
//! let generator = RangeGenerator::with_clock(FixedClock(CalendarDay::new(2023, 1, 10)?));
//!
//! // Sunday-anchored week around the reference date
//! let week = generator.week(Some(&RangeOptions::new().with_ref_weekday(7)))?;
//! assert_eq!(week.days()?[0].to_string(), "2023-01-08");
//!
//! // The week after it
//! let next = generator.next(Some(&week))?;
//! assert_eq!(next.days()?[0].to_string(), "2023-01-15");
//! assert!(next.produced_by_next()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `validate` | Option validators and predicates |
//! | `options` | Caller-supplied options |
//! | `offset` | Boundary offsets |
//! | `range` | Generated ranges and the range state value |
//! | `generate` | Range generators |
//! | `navigate` | Next/previous navigation |
//! | `kind` | Range kinds and provenance |
//! | `error` | Error types |

mod error;
mod generate;
mod kind;
mod navigate;
mod offset;
mod options;
mod range;
mod validate;

pub use error::RangeError;
pub use generate::RangeGenerator;
pub use kind::{Provenance, RangeKind};
pub use navigate::{next_range, previous_range};
pub use offset::apply_offsets;
pub use options::RangeOptions;
pub use range::{DateRange, GeneratedRange, RangeParameters};
pub use validate::{
    MAX_DAY_COUNT, MAX_OFFSET_DAYS, is_valid_offset, is_valid_ref_date, is_valid_ref_weekday,
    validate_day_count, validate_offset, validate_ref_date, validate_ref_weekday,
};

// Re-export the calendar types that appear in this crate's API.
pub use daterange_calendar::{CalendarDay, Clock, FixedClock, SystemClock, Weekday};
